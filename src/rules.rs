use arrayvec::ArrayVec;

use crate::{board::Board, role::Role, square::Square, types::Piece};

/// Destinations of a single piece, stored inline on the stack.
///
/// 27 is the most squares a queen can reach from one square.
pub type SquareList = ArrayVec<Square, 27>;

/// Checks whether moving `piece` from `from` to `to` is legal.
///
/// Only geometry and occupancy are consulted: staying put and landing
/// on a friendly piece are always illegal, sliding pieces need an
/// empty path, pawns move by color direction. Whether it is `piece`'s
/// turn is the caller's business (see [`Game::attempt_move`]).
///
/// [`Game::attempt_move`]: crate::Game::attempt_move
///
/// # Examples
///
/// ```
/// use skirmish::{check_legal, Board, Color, Role, Square};
///
/// let board = Board::new();
/// let knight = Role::Knight.of(Color::White);
/// assert!(check_legal(knight, Square::G1, Square::F3, &board));
/// assert!(!check_legal(knight, Square::G1, Square::G3, &board));
/// ```
pub fn check_legal(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if to == from {
        return false;
    }
    if board
        .piece_at(to)
        .map_or(false, |dest| dest.color == piece.color)
    {
        return false;
    }

    let file_distance = from.file_distance(to);
    let rank_distance = from.rank_distance(to);

    match piece.role {
        Role::King => file_distance <= 1 && rank_distance <= 1,
        Role::Queen => {
            (file_distance == 0 || rank_distance == 0 || file_distance == rank_distance)
                && path_clear(board, from, to)
        }
        Role::Rook => (file_distance == 0 || rank_distance == 0) && path_clear(board, from, to),
        Role::Bishop => file_distance == rank_distance && path_clear(board, from, to),
        Role::Knight => {
            file_distance > 0 && rank_distance > 0 && file_distance + rank_distance == 3
        }
        Role::Pawn => pawn_legal(piece, from, to, board),
    }
}

/// Walks from `from` towards `to` by unit steps and requires every
/// strictly intermediate square to be empty. The destination itself is
/// not tested, so a capture there stays legal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let file_step = (to.file() - from.file()).signum();
    let rank_step = (to.rank() - from.rank()).signum();

    let mut square = from;
    loop {
        square = match square.offset_by(file_step, rank_step) {
            Some(next) => next,
            None => return false,
        };
        if square == to {
            return true;
        }
        if board.piece_at(square).is_some() {
            return false;
        }
    }
}

fn pawn_legal(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    let file_distance = from.file_distance(to);
    let advance = to.rank() - from.rank();
    let (forward, start_rank) = piece.color.fold((1, 1), (-1, 6));

    // Double step from the starting rank. Only the square passed
    // through must be empty; the destination was already constrained
    // by the friendly-piece check above.
    if file_distance == 0 && from.rank() == start_rank && advance == 2 * forward {
        return match from.offset_by(0, forward) {
            Some(passed) => board.piece_at(passed).is_none(),
            None => false,
        };
    }

    if advance != forward || file_distance > 1 {
        return false;
    }

    if file_distance == 0 {
        // Straight ahead only onto an empty square.
        board.piece_at(to).is_none()
    } else {
        // Diagonal only as a capture.
        board.piece_at(to).is_some()
    }
}

/// All legal destinations of the piece on `from`, or an empty list if
/// the square is empty.
///
/// # Examples
///
/// ```
/// use skirmish::{legal_targets, Board, Square};
///
/// let board = Board::new();
/// let targets = legal_targets(&board, Square::B1);
/// assert_eq!(targets.as_slice(), [Square::A3, Square::C3]);
/// ```
pub fn legal_targets(board: &Board, from: Square) -> SquareList {
    let mut targets = SquareList::new();
    let Some(piece) = board.piece_at(from) else {
        return targets;
    };
    for to in Square::ALL {
        if check_legal(piece, from, to, board) {
            targets.push(to);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_no_piece_may_stay_put() {
        let mut board = Board::empty();
        for role in Role::ALL {
            let piece = role.of(Color::White);
            board.place(piece, Square::D4);
            assert!(!check_legal(piece, Square::D4, Square::D4, &board));
        }
    }

    #[test]
    fn test_no_piece_may_capture_a_friend() {
        let mut board = Board::empty();
        board.place(Role::Pawn.of(Color::White), Square::D5);
        for role in Role::ALL {
            let piece = role.of(Color::White);
            board.place(piece, Square::D4);
            assert!(!check_legal(piece, Square::D4, Square::D5, &board));
        }
    }

    #[test]
    fn test_king_moves_one_step_any_direction() {
        let mut board = Board::empty();
        let king = Role::King.of(Color::White);
        board.place(king, Square::D4);
        for to in Square::ALL {
            let expected = Square::D4.distance(to) == 1;
            assert_eq!(check_legal(king, Square::D4, to, &board), expected, "{to}");
        }
    }

    #[test]
    fn test_knight_moves_are_exactly_the_l_shapes() {
        let mut board = Board::empty();
        let knight = Role::Knight.of(Color::White);
        board.place(knight, Square::D4);
        for to in Square::ALL {
            let fd = Square::D4.file_distance(to);
            let rd = Square::D4.rank_distance(to);
            let expected = (fd == 1 && rd == 2) || (fd == 2 && rd == 1);
            assert_eq!(check_legal(knight, Square::D4, to, &board), expected, "{to}");
        }
    }

    #[test]
    fn test_rook_and_bishop_lines() {
        let mut board = Board::empty();
        let rook = Role::Rook.of(Color::White);
        let bishop = Role::Bishop.of(Color::White);
        board.place(rook, Square::D4);
        assert!(check_legal(rook, Square::D4, Square::D8, &board));
        assert!(check_legal(rook, Square::D4, Square::A4, &board));
        assert!(!check_legal(rook, Square::D4, Square::E5, &board));

        board.place(bishop, Square::D4);
        assert!(check_legal(bishop, Square::D4, Square::H8, &board));
        assert!(check_legal(bishop, Square::D4, Square::A1, &board));
        assert!(!check_legal(bishop, Square::D4, Square::D5, &board));
    }

    #[test]
    fn test_sliders_are_blocked_by_any_intermediate_piece() {
        for blocker_color in Color::ALL {
            let mut board = Board::empty();
            let queen = Role::Queen.of(Color::White);
            board.place(queen, Square::A1);
            board.place(Role::Pawn.of(blocker_color), Square::D4);

            assert!(!check_legal(queen, Square::A1, Square::H8, &board));
            assert!(check_legal(queen, Square::A1, Square::C3, &board));
        }
    }

    #[test]
    fn test_slider_may_capture_on_destination() {
        let mut board = Board::empty();
        let rook = Role::Rook.of(Color::White);
        board.place(rook, Square::A1);
        board.place(Role::Rook.of(Color::Black), Square::A8);

        assert!(check_legal(rook, Square::A1, Square::A8, &board));
    }

    #[test]
    fn test_pawn_double_step_needs_empty_transit() {
        let mut board = Board::empty();
        let pawn = Role::Pawn.of(Color::White);
        board.place(pawn, Square::E2);
        assert!(check_legal(pawn, Square::E2, Square::E4, &board));

        board.place(Role::Knight.of(Color::Black), Square::E3);
        assert!(!check_legal(pawn, Square::E2, Square::E4, &board));
    }

    #[test]
    fn test_pawn_double_step_only_from_start_rank() {
        let mut board = Board::empty();
        let pawn = Role::Pawn.of(Color::White);
        board.place(pawn, Square::E3);
        assert!(!check_legal(pawn, Square::E3, Square::E5, &board));

        let black_pawn = Role::Pawn.of(Color::Black);
        board.place(black_pawn, Square::D7);
        assert!(check_legal(black_pawn, Square::D7, Square::D5, &board));
    }

    // The transit square alone is tested for emptiness, so an enemy
    // sitting on the double-step destination is capturable. Matches
    // the original engine's behavior.
    #[test]
    fn test_pawn_double_step_may_capture_on_destination() {
        let mut board = Board::empty();
        let pawn = Role::Pawn.of(Color::White);
        board.place(pawn, Square::E2);
        board.place(Role::Rook.of(Color::Black), Square::E4);

        assert!(check_legal(pawn, Square::E2, Square::E4, &board));
    }

    #[test]
    fn test_pawn_push_blocked_by_any_piece() {
        let mut board = Board::empty();
        let pawn = Role::Pawn.of(Color::White);
        board.place(pawn, Square::E4);
        assert!(check_legal(pawn, Square::E4, Square::E5, &board));

        board.place(Role::Pawn.of(Color::Black), Square::E5);
        assert!(!check_legal(pawn, Square::E4, Square::E5, &board));
    }

    #[test]
    fn test_pawn_diagonal_only_as_capture() {
        let mut board = Board::empty();
        let pawn = Role::Pawn.of(Color::White);
        board.place(pawn, Square::E4);
        assert!(!check_legal(pawn, Square::E4, Square::D5, &board));

        board.place(Role::Knight.of(Color::Black), Square::D5);
        assert!(check_legal(pawn, Square::E4, Square::D5, &board));
    }

    #[test]
    fn test_pawn_never_moves_backwards_or_sideways() {
        let mut board = Board::empty();
        let pawn = Role::Pawn.of(Color::White);
        board.place(pawn, Square::E4);
        assert!(!check_legal(pawn, Square::E4, Square::E3, &board));
        assert!(!check_legal(pawn, Square::E4, Square::F4, &board));
        assert!(!check_legal(pawn, Square::E4, Square::G5, &board));
    }

    #[test]
    fn test_legal_targets_in_starting_position() {
        let board = Board::new();
        assert_eq!(
            legal_targets(&board, Square::E2).as_slice(),
            [Square::E3, Square::E4]
        );
        // Everything behind the pawn wall is stuck.
        assert!(legal_targets(&board, Square::D1).is_empty());
        assert!(legal_targets(&board, Square::E5).is_empty());
    }
}
