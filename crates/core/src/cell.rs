//! Cell module - the atomic unit of board state

use crate::anim::Animation;
use crate::types::MAX_EXPONENT;

/// One square of the board: an optional tile plus its animation clock.
///
/// The tile is stored as an exponent `e`, displayed as `2^(e+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub exponent: Option<u8>,
    pub anim: Animation,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        exponent: None,
        anim: Animation::Settled,
    };

    /// A settled tile with the given exponent, clamped to [`MAX_EXPONENT`].
    pub fn tile(exponent: u8) -> Self {
        Self {
            exponent: Some(clamp_exponent(exponent)),
            anim: Animation::Settled,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exponent.is_none()
    }

    pub fn exponent(&self) -> Option<u8> {
        self.exponent
    }

    /// Displayed value, `None` for an empty cell.
    pub fn value(&self) -> Option<u64> {
        self.exponent.map(tile_value)
    }
}

/// Largest storable exponent; its value `2^63` still fits a `u64`.
#[inline]
pub fn clamp_exponent(exponent: u8) -> u8 {
    exponent.min(MAX_EXPONENT)
}

/// Displayed value of a tile with exponent `e`: `2^(e+1)`.
///
/// Saturates at `u64::MAX` past the largest representable exponent.
#[inline]
pub fn tile_value(exponent: u8) -> u64 {
    2u64.checked_shl(u32::from(exponent))
        .filter(|&v| v != 0)
        .unwrap_or(u64::MAX)
}
