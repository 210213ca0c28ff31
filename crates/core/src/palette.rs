//! Tile colors.
//!
//! A tile's color interpolates from [`GRAY`] to [`RED`] using its exponent as
//! the interpolation amount. The amount is not clamped: exponents above 1
//! extrapolate beyond red, and the channels then saturate at 0 or 255 when
//! converted back to bytes.

use crate::types::{Rgb, GRAY, LIGHT_GRAY, RED};

/// Componentwise `a + (b - a) * amount`, unclamped, saturating per channel.
pub fn color_lerp(a: Rgb, b: Rgb, amount: f32) -> Rgb {
    let channel = |x: u8, y: u8| {
        let (x, y) = (f32::from(x), f32::from(y));
        // `as` saturates out-of-range floats and maps NaN to 0.
        (x + (y - x) * amount) as u8
    };
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Color of a tile with the given exponent.
pub fn tile_color(exponent: u8) -> Rgb {
    color_lerp(GRAY, RED, f32::from(exponent))
}

/// Color of an empty cell.
pub fn empty_color() -> Rgb {
    LIGHT_GRAY
}

/// Draw `over` with opacity `alpha` on top of `base`.
pub fn blend(base: Rgb, over: Rgb, alpha: f32) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    color_lerp(base, over, alpha)
}
