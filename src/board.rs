use std::fmt::{self, Write as _};

use arrayvec::ArrayVec;

use crate::{color::Color, piece::Piece, role::Role, square::Square};

/// Pieces collected from a full-board scan, stored inline.
pub type PieceList = ArrayVec<Piece, 64>;

/// One accepted move: the relocated piece, where it came from and went
/// to, and whatever it captured.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub capture: Option<Piece>,
}

impl MoveRecord {
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

/// An 8×8 board owning at most one piece per square, the side to move,
/// and the log of accepted moves.
///
/// The board owns all mutation: pieces are placed, relocated and
/// captured only through it, and every query a piece needs during a
/// legality check goes back through the board.
///
/// # Examples
///
/// ```
/// use xadrez::{Board, Color, Square};
///
/// let mut board = Board::new();
/// assert!(board.move_piece(Square::E2, Square::E4));
/// assert_eq!(board.turn(), Color::Black);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    turn: Color,
    moves: Vec<MoveRecord>,
}

impl Board {
    /// An empty board with White to move and an empty move log.
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            turn: Color::White,
            moves: Vec::new(),
        }
    }

    /// The regulation starting position.
    pub fn new() -> Board {
        const BACK_RANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        let mut board = Board::empty();
        for color in Color::ALL {
            let pawn_rank = color.fold(1, 6);
            for file in 0..8 {
                board.place_piece(Piece::new(color, Role::Pawn, Square::new(pawn_rank, file)));
            }
            for (file, role) in BACK_RANK.into_iter().enumerate() {
                board.place_piece(Piece::new(
                    color,
                    role,
                    Square::new(color.backrank(), file as i8),
                ));
            }
        }
        board
    }

    /// Puts a piece on the square it records as its own. Raw setup:
    /// any previous occupant is overwritten without being logged as a
    /// capture, and a piece with an off-board square is silently
    /// dropped.
    pub fn place_piece(&mut self, piece: Piece) {
        let square = piece.square();
        if square.is_valid() {
            self.grid[square.rank() as usize][square.file() as usize] = Some(piece);
        }
    }

    /// The occupant of `square`, or `None` when the square is empty or
    /// off the board.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        if !square.is_valid() {
            return None;
        }
        self.grid[square.rank() as usize][square.file() as usize].as_ref()
    }

    /// Checks that every square strictly between `start` and `end` is
    /// empty. Adjacent squares are vacuously clear.
    ///
    /// Assumes the two squares share a rank, file or diagonal; on any
    /// other pair the walk is meaningless (off-board probes read as
    /// empty) rather than an error.
    pub fn is_path_clear(&self, start: Square, end: Square) -> bool {
        let rank_step = (end.rank() - start.rank()).signum();
        let file_step = (end.file() - start.file()).signum();
        let steps = start.distance(end);

        let mut rank = start.rank() + rank_step;
        let mut file = start.file() + file_step;
        for _ in 1..steps {
            if self.piece_at(Square::new(rank, file)).is_some() {
                return false;
            }
            rank += rank_step;
            file += file_step;
        }
        true
    }

    /// Moves the piece on `start` to `end` if the side to move owns it
    /// and its movement rules allow the destination. Returns whether
    /// the move was accepted.
    ///
    /// On success the grid, the piece's square and moved flag, the
    /// move log, and the side to move are all updated together; on
    /// rejection nothing changes.
    ///
    /// Movement legality alone is enforced: a move that leaves the
    /// mover's own king attacked is still accepted. Use
    /// [`Board::move_piece_safe`] to reject those.
    pub fn move_piece(&mut self, start: Square, end: Square) -> bool {
        let piece = match self.piece_at(start) {
            Some(piece) => *piece,
            None => return false,
        };
        if piece.color != self.turn {
            return false;
        }
        if !piece.can_move_to(end, self) {
            return false;
        }

        let capture = self.piece_at(end).copied();
        let mut piece = piece;
        piece.relocate(end);
        self.grid[end.rank() as usize][end.file() as usize] = Some(piece);
        self.grid[start.rank() as usize][start.file() as usize] = None;
        self.moves.push(MoveRecord {
            piece,
            from: start,
            to: end,
            capture,
        });
        self.turn = !self.turn;
        true
    }

    /// Like [`Board::move_piece`], but additionally rejects a move
    /// that would leave the mover's own king attacked.
    ///
    /// The move is simulated on a copy of the board and committed only
    /// if the mover is not in check afterwards.
    pub fn move_piece_safe(&mut self, start: Square, end: Square) -> bool {
        let mover = self.turn;
        let mut trial = self.clone();
        if !trial.move_piece(start, end) {
            return false;
        }
        if trial.is_in_check(mover) {
            return false;
        }
        *self = trial;
        true
    }

    /// Checks whether any piece of `by` color could move to `square`
    /// under plain movement legality.
    ///
    /// A pawn therefore does not count as attacking an empty diagonal
    /// square, since it has no capture to play there.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        for rank in &self.grid {
            for piece in rank.iter().flatten() {
                if piece.color == by && piece.can_move_to(square, self) {
                    return true;
                }
            }
        }
        false
    }

    /// The square of the first king of `color` found in a row-major
    /// scan, or `None` when absent.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for rank in &self.grid {
            for piece in rank.iter().flatten() {
                if piece.color == color && piece.role == Role::King {
                    return Some(piece.square());
                }
            }
        }
        None
    }

    /// Checks whether the king of `color` is attacked. A board without
    /// that king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, !color),
            None => false,
        }
    }

    /// Collects the pieces on the board in row-major scan order,
    /// optionally restricted to one color.
    pub fn pieces(&self, color: Option<Color>) -> PieceList {
        let mut pieces = PieceList::new();
        for rank in &self.grid {
            for piece in rank.iter().flatten() {
                if color.map_or(true, |c| piece.color == c) {
                    pieces.push(*piece);
                }
            }
        }
        pieces
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The accepted moves so far, in order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>, glyph: fn(&Piece) -> char) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let square = Square::new(rank, file);
                f.write_char(self.piece_at(square).map_or('.', glyph))?;
                f.write_char(if file < 7 { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Renders the board rank 8 down to rank 1 with Unicode figurines,
/// empty squares as dots. A debugging aid, not a protocol.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, Piece::symbol)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, Piece::char)
    }
}
