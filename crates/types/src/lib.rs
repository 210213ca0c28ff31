//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! The reference board is a 4x4 grid. Coordinates are `(row, col)` with
//! row 0 at the top and col 0 at the left.
//!
//! # Tile Encoding
//!
//! Tiles are stored as exponents: exponent `e` displays as `2^(e+1)`, so
//! exponent 0 is the "2" tile. An empty cell is a distinct state and is never
//! represented by an exponent value.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ANIMATION_RATE` | 10.0 | Animation progress per second of frame time |
//! | `TARGET_FPS` | 30 | Default frame rate of the terminal runner |
//! | `SPAWN_COOLDOWN_MS` | 150 | Default minimum frame time between spawns in the runner |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_SIZE};
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Direction::PRECEDENCE[0], Direction::Down);
//!
//! let action = GameAction::from_str("restart").unwrap();
//! assert_eq!(action, GameAction::Restart);
//! ```

/// Board dimension (4x4)
pub const BOARD_SIZE: usize = 4;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Exponent of newly spawned tiles (displays as 2)
pub const MIN_EXPONENT: u8 = 0;

/// Largest exponent whose displayed value `2^(e+1)` fits in a `u64`
pub const MAX_EXPONENT: u8 = 62;

/// Animation clock rate: progress gained per second of frame time
pub const ANIMATION_RATE: f32 = 10.0;

/// Default frame rate of the terminal runner
pub const TARGET_FPS: u32 = 30;

/// Default minimum accumulated frame time between two spawns in the terminal runner
pub const SPAWN_COOLDOWN_MS: u32 = 150;


/// A move toward one of the four board edges
///
/// - **Down**: tiles slide toward the bottom row
/// - **Up**: tiles slide toward the top row
/// - **Left**: tiles slide toward column 0
/// - **Right**: tiles slide toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    /// Order in which simultaneously pressed directions are considered.
    ///
    /// Only the first pressed direction in this order is applied per input step.
    pub const PRECEDENCE: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" | "d" => Some(Direction::Down),
            "up" | "u" => Some(Direction::Up),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge all tiles toward an edge
    Move(Direction),
    /// Clear the board and place fresh starting tiles
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Directions parse as moves; "restart" parses as [`GameAction::Restart`].
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Grid coordinates of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of the smallest tile; tile colors interpolate from here toward [`RED`]
pub const GRAY: Rgb = Rgb::new(130, 130, 130);

/// Color reached at exponent 1; higher exponents extrapolate past it
pub const RED: Rgb = Rgb::new(230, 41, 55);

/// Color of an empty cell
pub const LIGHT_GRAY: Rgb = Rgb::new(200, 200, 200);

/// Board background
pub const RAY_WHITE: Rgb = Rgb::new(245, 245, 245);

/// Opacity of the square drawn behind each cell
pub const CELL_ALPHA: f32 = 0.3;
