use crate::{board::Board, color::Color, square::Square, types::MoveOutcome};

/// One game in progress: piece placement plus the side to move.
///
/// The sole mutation entry point is [`Game::attempt_move`]; everything
/// else is read-only and meant for the driving UI (which piece sits on
/// a clicked cell, whose turn it is).
///
/// # Examples
///
/// ```
/// use skirmish::{Color, Game, Square};
///
/// let mut game = Game::new();
/// assert!(game.attempt_move(Square::E2, Square::E4).applied);
/// assert_eq!(game.turn(), Color::Black);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Starts a game from the standard starting position, white to move.
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// Starts a game from an arbitrary position.
    pub fn from_position(board: Board, turn: Color) -> Game {
        Game { board, turn }
    }

    /// The current piece placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side currently permitted to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Attempts to move the piece on `from` to `to` for the side to
    /// move, flipping the turn if the move is applied.
    ///
    /// Occupancy of `from` is looked up fresh, so a caller holding a
    /// stale square (the piece already moved away) gets a rejection,
    /// never a panic. A piece of the wrong color is likewise rejected
    /// with the position and turn untouched.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => return MoveOutcome::rejected(),
        };
        if piece.color != self.turn {
            return MoveOutcome::rejected();
        }

        let outcome = self.board.move_piece(from, to);
        if outcome.applied {
            self.turn = !self.turn;
        }
        outcome
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{role::Role, types::Piece};

    #[test]
    fn test_wrong_color_is_rejected_without_state_change() {
        let mut game = Game::new();
        let outcome = game.attempt_move(Square::E7, Square::E5);
        assert!(!outcome.applied);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(
            game.board().piece_at(Square::E7),
            Some(Role::Pawn.of(Color::Black))
        );
    }

    #[test]
    fn test_empty_origin_is_rejected() {
        let mut game = Game::new();
        assert!(!game.attempt_move(Square::E4, Square::E5).applied);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_applied_move_flips_turn_once() {
        let mut game = Game::new();
        assert!(game.attempt_move(Square::G1, Square::F3).applied);
        assert_eq!(game.turn(), Color::Black);
        assert!(game.attempt_move(Square::B8, Square::C6).applied);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_illegal_move_leaves_turn() {
        let mut game = Game::new();
        assert!(!game.attempt_move(Square::E1, Square::E3).applied);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_from_position() {
        let mut board = Board::empty();
        board.place(Role::Rook.of(Color::Black), Square::H8);
        let mut game = Game::from_position(board, Color::Black);

        let outcome = game.attempt_move(Square::H8, Square::H1);
        assert!(outcome.applied);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(
            game.board().piece_at(Square::H1),
            Some(Piece {
                color: Color::Black,
                role: Role::Rook
            })
        );
    }
}
