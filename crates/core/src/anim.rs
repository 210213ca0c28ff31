//! Per-cell animation clock.
//!
//! Purely cosmetic: the clock interpolates a tile's drawn position from the
//! coordinates it occupied before its last move to its current coordinates.
//! It is driven by frame time only and never consulted by move or spawn logic.
//!
//! ```
//! use tui_2048_core::anim::Animation;
//! use tui_2048_core::types::Position;
//!
//! let mut anim = Animation::start(Position::new(0, 0));
//! anim.advance(0.05, 10.0);
//! assert_eq!(anim.draw_position(0, 2), (0.0, 1.0));
//!
//! anim.advance(0.06, 10.0);
//! assert!(anim.is_settled());
//! assert_eq!(anim.draw_position(0, 2), (0.0, 2.0));
//! ```

use crate::types::Position;

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Animation state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Animation {
    /// Drawn at its own grid coordinates.
    #[default]
    Settled,
    /// Moving from `origin` toward the cell's coordinates; `progress` in `[0, 1]`.
    Interpolating {
        origin_row: f32,
        origin_col: f32,
        progress: f32,
    },
}

impl Animation {
    /// A tile that just arrived from `origin`.
    pub fn start(origin: Position) -> Self {
        Animation::Interpolating {
            origin_row: origin.row as f32,
            origin_col: origin.col as f32,
            progress: 0.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Animation::Settled)
    }

    /// Interpolation fraction, 0 when settled.
    pub fn progress(&self) -> f32 {
        match self {
            Animation::Settled => 0.0,
            Animation::Interpolating { progress, .. } => *progress,
        }
    }

    /// Advance the clock by `delta_secs * rate`.
    ///
    /// Once the fraction passes 1 the origin collapses onto the current
    /// coordinates and the cell settles. Safe to call every frame.
    pub fn advance(&mut self, delta_secs: f32, rate: f32) {
        let Animation::Interpolating { progress, .. } = self else {
            return;
        };

        let step = delta_secs * rate;
        // NaN and negative deltas do not move the clock.
        if step > 0.0 {
            *progress += step;
        }
        if *progress > 1.0 {
            *self = Animation::Settled;
        }
    }

    /// Drawn position in grid units for a cell at `(row, col)`.
    pub fn draw_position(&self, row: usize, col: usize) -> (f32, f32) {
        let (row, col) = (row as f32, col as f32);
        match *self {
            Animation::Settled => (row, col),
            Animation::Interpolating {
                origin_row,
                origin_col,
                progress,
            } => (
                lerp(origin_row, row, progress),
                lerp(origin_col, col, progress),
            ),
        }
    }
}
