//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board transition rules and the per-cell animation
//! clock. It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: the random source and the frame delta are explicit
//!   parameters, so a fixed seed and input sequence reproduce a game exactly
//! - **Testable**: every rule is a plain function over a [`Board`]
//! - **Allocation-free**: boards are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`board`]: NxN grid of cells with structural queries and lane iteration
//! - [`cell`]: tile exponent plus animation bookkeeping
//! - [`moves`]: slide and merge toward an edge, one merge per tile per move
//! - [`spawn`]: row-major coin-flip spawn policy and initial tile seeding
//! - [`anim`]: settled / interpolating animation state machine
//! - [`palette`]: tile colors (unclamped gray-to-red interpolation)
//! - [`snapshot`]: renderer-facing view of the board
//! - [`game_state`]: the game loop's state: move, spawn, tick
//! - [`rng`]: coin-flip source trait and a seeded LCG
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge and merges equal neighbours
//! - A tile produced by a merge does not merge again in the same move
//! - A move that changes nothing is invalid and never spawns a tile
//! - After a valid move, empty cells are scanned row-major and each gets one
//!   coin flip; the first success receives a new `2` tile
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Game;
//! use tui_2048_core::types::{Direction, GameAction};
//!
//! let mut game = Game::with_seed(12345);
//! assert_eq!(game.board().tile_count(), 2);
//!
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.tick(1.0 / 30.0);
//!
//! let snap = game.snapshot();
//! assert!(snap.tiles >= 1);
//! ```

pub mod anim;
pub mod board;
pub mod cell;
pub mod config;
pub mod game_state;
pub mod moves;
pub mod palette;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use anim::Animation;
pub use board::Board;
pub use cell::{tile_value, Cell};
pub use config::{ConfigError, GameConfig};
pub use game_state::{Game, GameState};
pub use moves::{apply_move, select_direction, MoveOutcome};
pub use palette::{blend, tile_color};
pub use rng::{draw_below, CoinSource, SimpleRng};
pub use snapshot::{CellView, GameSnapshot, TileView};
pub use spawn::{maybe_spawn, seed_initial_tiles};
