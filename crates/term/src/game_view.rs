//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{blend, CellView, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CELL_ALPHA, LIGHT_GRAY, RAY_WHITE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const STATUS_FG: Rgb = Rgb::new(200, 200, 200);

/// Tile value suffixes, one per factor of 1000.
const SUFFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

/// Terminal renderer for the 2048 board.
///
/// Each grid square spans `cell_w` x `cell_h` terminal cells, including a
/// one-cell gutter on its right and bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x4 is roughly square with typical glyph proportions.
        Self {
            cell_w: 8,
            cell_h: 4,
        }
    }
}

/// Top-left corner of the board frame and its size, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    /// Squares smaller than 2x2 leave no room for a tile and are bumped up.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Frame size (border included) for an `n`x`n` board.
    pub fn frame_size(&self, n: usize) -> (u16, u16) {
        let n = u16::try_from(n).unwrap_or(u16::MAX);
        let w = n.saturating_mul(self.cell_w).saturating_add(3);
        let h = n.saturating_mul(self.cell_h).saturating_add(3);
        (w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into<const N: usize>(
        &self,
        snap: &GameSnapshot<N>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::new(STATUS_FG, SCREEN_BG)));

        let (frame_w, frame_h) = self.frame_size(N);
        // Leave a row for the status line when the board is centered.
        let layout = Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2,
            w: frame_w,
            h: frame_h,
        };

        let board_style = CellStyle::new(BORDER_FG, RAY_WHITE);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            board_style,
        );
        self.draw_border(fb, layout, CellStyle::new(BORDER_FG, SCREEN_BG));

        // Empty squares first, so a sliding tile is never painted over by a
        // square that comes later in row-major order.
        let square = blend(RAY_WHITE, LIGHT_GRAY, CELL_ALPHA);
        for cell in snap.iter() {
            let (x, y) = self.square_origin(layout, cell.row as f32, cell.col as f32);
            fb.fill_rect(
                x,
                y,
                self.cell_w - 1,
                self.cell_h - 1,
                ' ',
                CellStyle::new(square, square),
            );
        }

        for cell in snap.iter().filter(|c| c.occupied()) {
            self.draw_tile(fb, layout, cell);
        }

        self.draw_status(fb, snap, layout, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<const N: usize>(&self, snap: &GameSnapshot<N>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal cell of a square's top-left corner for a (fractional) grid
    /// position.
    fn square_origin(&self, layout: Layout, row: f32, col: f32) -> (u16, u16) {
        let dx = to_cells(col * f32::from(self.cell_w));
        let dy = to_cells(row * f32::from(self.cell_h));
        (
            layout.x.saturating_add(2).saturating_add(dx),
            layout.y.saturating_add(2).saturating_add(dy),
        )
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: Layout, cell: &CellView) {
        let Some(tile) = cell.tile else {
            return;
        };
        let (x, y) = self.square_origin(layout, cell.draw_row, cell.draw_col);
        let w = self.cell_w - 1;
        let h = self.cell_h - 1;

        let bg = blend(RAY_WHITE, cell.color, CELL_ALPHA);
        fb.fill_rect(x, y, w, h, ' ', CellStyle::new(cell.color, bg));

        let label = fit_label(tile.value, usize::from(w));
        let label_w = label.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(label_w) / 2);
        let ty = y.saturating_add(h.saturating_sub(1) / 2);
        fb.put_str(tx, ty, &label, CellStyle::new(cell.color, bg).bold());
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout { x, y, w, h } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_status<const N: usize>(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<N>,
        layout: Layout,
        viewport: Viewport,
    ) {
        let y = layout.y.saturating_add(layout.h);
        if y >= viewport.height {
            return;
        }
        let style = CellStyle::new(STATUS_FG, SCREEN_BG);
        let status = format!("moves {}  tiles {}", snap.moves, snap.tiles);
        let written = fb.put_str(layout.x, y, &status, style);

        let help = "r reset  q quit";
        let help_w = help.len() as u16;
        let right = layout.x.saturating_add(layout.w);
        if right >= layout.x + written + help_w + 2 {
            fb.put_str(right - help_w, y, help, style);
        }
    }
}

fn to_cells(v: f32) -> u16 {
    if v.is_finite() && v > 0.0 {
        v.round().min(f32::from(u16::MAX)) as u16
    } else {
        0
    }
}

/// Decimal label for `value` that fits in `width` columns.
///
/// Values too wide are scaled by powers of 1000 and suffixed (`131072` in five
/// columns becomes `131k`). If even the largest suffix does not fit, the label
/// is cut to `width`.
pub fn fit_label(value: u64, width: usize) -> String {
    let mut label = value.to_string();
    let mut scaled = value;
    for suffix in SUFFIXES {
        if label.len() <= width {
            return label;
        }
        scaled /= 1000;
        label = format!("{scaled}{suffix}");
    }
    label.truncate(width);
    label
}
