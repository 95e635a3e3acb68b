//! A library for two-player chess move legality and game state.
//!
//! Validates moves under the per-piece movement rules, applies them, and
//! tracks captures, automatic queen promotion and the side to move. The
//! intended driver is a UI layer that lets two people move pieces freely:
//! check detection, castling, en passant, draw rules and notation are out
//! of scope, as is anything resembling an opponent.
//!
//! Rule violations are not errors. Every way a move can be wrong (staying
//! put, grabbing a friendly piece, bad geometry, a blocked path, moving
//! out of turn) comes back as a rejected [`MoveOutcome`] with the position
//! untouched.
//!
//! # Examples
//!
//! Play the first moves of a game:
//!
//! ```
//! use skirmish::{Color, Game, Square};
//!
//! let mut game = Game::new();
//!
//! // 1. e4
//! let outcome = game.attempt_move(Square::E2, Square::E4);
//! assert!(outcome.applied);
//! assert_eq!(game.turn(), Color::Black);
//!
//! // White may not move again out of turn.
//! assert!(!game.attempt_move(Square::D2, Square::D4).applied);
//! ```
//!
//! Query the board, for example to render it:
//!
//! ```
//! use skirmish::{Board, Color, Role, Square};
//!
//! let board = Board::new();
//! assert_eq!(board.piece_at(Square::E1), Some(Role::King.of(Color::White)));
//! assert_eq!(board.pieces().count(), 32);
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for the
//!   vocabulary types.

#![warn(missing_debug_implementations)]

mod board;
mod color;
mod game;
mod role;
mod rules;
mod square;
mod types;

pub use crate::{
    board::Board,
    color::{ByColor, Color, ParseColorError},
    game::Game,
    role::Role,
    rules::{check_legal, legal_targets, SquareList},
    square::{ParseSquareError, Square},
    types::{MoveOutcome, Piece},
};
