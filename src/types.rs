use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// Pieces are plain values; the square a piece stands on is the board
/// cell that holds it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// The piece letter, uppercase for white and lowercase for black.
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    /// Parses a piece letter, uppercase for white and lowercase for black.
    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| {
            role.of(if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            })
        })
    }
}

/// The observable result of a move attempt.
///
/// Illegal moves are not errors: they come back as a rejected outcome
/// with no fields set and the position untouched.
///
/// # Examples
///
/// ```
/// use skirmish::{Game, Square};
///
/// let mut game = Game::new();
/// let outcome = game.attempt_move(Square::E2, Square::E4);
/// assert!(outcome.applied);
/// assert!(!outcome.is_capture());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveOutcome {
    /// Whether the move passed validation and was applied.
    pub applied: bool,
    /// The piece removed from the destination square, if any.
    pub captured: Option<Piece>,
    /// The queen a pawn was promoted into, if any.
    pub promoted: Option<Piece>,
}

impl MoveOutcome {
    /// A move that was not applied.
    pub const fn rejected() -> MoveOutcome {
        MoveOutcome {
            applied: false,
            captured: None,
            promoted: None,
        }
    }

    /// Checks if the move captured a piece.
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Checks if the move promoted a pawn.
    pub const fn is_promotion(self) -> bool {
        self.promoted.is_some()
    }
}
