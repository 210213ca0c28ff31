//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and buffers the
//! presses of one input step so that at most one move is applied per step.

pub mod map;
pub mod pending;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use pending::PendingInput;
