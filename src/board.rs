use std::fmt::{self, Write};

use crate::{
    color::{ByColor, Color},
    role::Role,
    rules,
    square::Square,
    types::{MoveOutcome, Piece},
};

/// Piece placement for one game.
///
/// Each square holds at most one piece. The set of live pieces is the
/// set of occupied squares, so the two views cannot disagree.
///
/// # Examples
///
/// ```
/// use skirmish::{Board, Color, Role, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Role::King.of(Color::White)));
/// assert_eq!(board.pieces().count(), 32);
/// ```
#[derive(Clone)]
pub struct Board {
    grid: [Option<Piece>; 64],
    kings: ByColor<Option<Square>>,
}

impl Board {
    /// An empty board.
    pub fn empty() -> Board {
        Board {
            grid: [None; 64],
            kings: ByColor::default(),
        }
    }

    /// The standard chess starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();

        const BACKRANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        for color in Color::ALL {
            let (backrank, pawn_rank) = color.fold((0, 1), (7, 6));
            for (file, role) in (0..8).zip(BACKRANK) {
                board.place(role.of(color), Square::new(file, backrank));
                board.place(Role::Pawn.of(color), Square::new(file, pawn_rank));
            }
        }

        board
    }

    /// Puts `piece` on `square` unconditionally, replacing whatever was
    /// there. Kings are additionally recorded as their color's king.
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.grid[square.index()] = Some(piece);
        if piece.role == Role::King {
            *self.kings.by_color_mut(piece.color) = Some(square);
        }
    }

    /// The piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    /// Removes and returns the piece on `square`, if any.
    pub fn remove_piece_at(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.index()].take()
    }

    /// All live pieces with the squares they stand on.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().filter_map(|(index, piece)| {
            let square = Square::from_index(index as i8)?;
            let piece = (*piece)?;
            Some((square, piece))
        })
    }

    /// The recorded square of the given side's king.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        *self.kings.by_color(color)
    }

    /// Validates and applies a move of the piece on `from` to `to`.
    ///
    /// An illegal move (no-op destination, friendly piece on `to`, bad
    /// geometry, blocked path) is reported as a rejected outcome with
    /// the position untouched. An applied move captures any piece on
    /// `to` and replaces a pawn reaching either far rank with a queen
    /// of its color.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on `from`. Callers that may hold a
    /// stale square should go through [`Game::attempt_move`], which
    /// re-checks occupancy first.
    ///
    /// [`Game::attempt_move`]: crate::Game::attempt_move
    pub fn move_piece(&mut self, from: Square, to: Square) -> MoveOutcome {
        let piece = self.piece_at(from).expect("no piece on origin square");

        if to == from {
            return MoveOutcome::rejected();
        }
        if !rules::check_legal(piece, from, to, self) {
            return MoveOutcome::rejected();
        }

        let captured = self.remove_piece_at(to);
        self.remove_piece_at(from);
        self.place(piece, to);

        // Relocation hook: a pawn reaching either far rank becomes a
        // queen of its own color.
        let promoted = if piece.role == Role::Pawn && (to.rank() == 0 || to.rank() == 7) {
            let queen = Role::Queen.of(piece.color);
            self.place(queen, to);
            Some(queen)
        } else {
            None
        };

        MoveOutcome {
            applied: true,
            captured,
            promoted,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                f.write_char(
                    self.piece_at(Square::new(file, rank))
                        .map(|piece| piece.char())
                        .unwrap_or('.'),
                )?;

                if file < 7 {
                    f.write_char(' ')?;
                } else {
                    f.write_char('\n')?;
                }
            }
        }

        Ok(())
    }
}
