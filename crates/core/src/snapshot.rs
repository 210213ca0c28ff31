use crate::board::Board;
use crate::cell::tile_value;
use crate::palette::{empty_color, tile_color};
use crate::types::{Position, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileView {
    pub exponent: u8,
    pub value: u64,
}

/// Everything the renderer needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub tile: Option<TileView>,
    pub color: Rgb,
    /// Interpolated position in grid units
    pub draw_row: f32,
    pub draw_col: f32,
}

impl CellView {
    pub fn occupied(&self) -> bool {
        self.tile.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.draw_row != self.row as f32 || self.draw_col != self.col as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot<const N: usize> {
    pub cells: [[CellView; N]; N],
    pub seed: u32,
    pub moves: u32,
    pub spawns: u32,
    pub tiles: u32,
    pub last_spawn: Option<Position>,
}

impl<const N: usize> GameSnapshot<N> {
    pub fn clear(&mut self) {
        for (row, line) in self.cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = CellView {
                    row,
                    col,
                    tile: None,
                    color: empty_color(),
                    draw_row: row as f32,
                    draw_col: col as f32,
                };
            }
        }
        self.seed = 0;
        self.moves = 0;
        self.spawns = 0;
        self.tiles = 0;
        self.last_spawn = None;
    }

    /// Overwrite the cell views from `board`
    pub fn fill_board(&mut self, board: &Board<N>) {
        let mut tiles = 0u32;
        for (row, line) in board.rows().iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let (draw_row, draw_col) = cell.anim.draw_position(row, col);
                let tile = cell.exponent.map(|exponent| TileView {
                    exponent,
                    value: tile_value(exponent),
                });
                tiles += u32::from(tile.is_some());
                self.cells[row][col] = CellView {
                    row,
                    col,
                    tile,
                    color: cell.exponent.map(tile_color).unwrap_or_else(empty_color),
                    draw_row,
                    draw_col,
                };
            }
        }
        self.tiles = tiles;
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellView> {
        self.cells.iter().flatten()
    }

    /// No tile is mid-animation
    pub fn is_static(&self) -> bool {
        self.iter().all(|cell| !cell.is_animating())
    }
}

impl<const N: usize> Default for GameSnapshot<N> {
    fn default() -> Self {
        let mut s = Self {
            cells: [[CellView::default(); N]; N],
            seed: 0,
            moves: 0,
            spawns: 0,
            tiles: 0,
            last_spawn: None,
        };
        s.clear();
        s
    }
}
