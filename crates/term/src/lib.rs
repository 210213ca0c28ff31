//! Terminal renderer for the 2048 board.
//!
//! Renders into a plain framebuffer rather than a widget tree, then flushes
//! it to the terminal with crossterm. Each grid square spans several terminal
//! cells so tiles can slide across intermediate positions while animating.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{fit_label, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
