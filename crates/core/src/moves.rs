//! Move engine - slides and merges tiles toward one edge
//!
//! A move is decomposed into N independent lanes (columns for vertical moves,
//! rows for horizontal ones). Each lane is scanned from the leading edge
//! outward, so a tile that already reached its final slot this move is never
//! revisited by a trailing tile.
//!
//! Every tile merges at most once per move. Slots produced by a merge are
//! recorded in a per-lane `merged` marker and refuse a second merge, which is
//! what turns `[2, 2, 2, 2]` into `[4, 4]` rather than `[8]`.

use log::debug;

use crate::anim::Animation;
use crate::board::Board;
use crate::cell::Cell;
use crate::types::{Direction, MAX_EXPONENT};

/// Result of one move pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one cell changed occupancy or exponent
    pub valid: bool,
    /// Number of merges performed
    pub merges: u32,
}

/// Slide and merge every tile on `board` toward `direction`, in place.
///
/// Moved and merged tiles restart their animation from the coordinates they
/// occupied before the move. A move that changes nothing leaves the board
/// untouched (animations included) and reports `valid = false`.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{apply_move, Board};
/// use tui_2048_core::types::Direction;
///
/// // Top row [2, 2] moved right becomes [_, 4]
/// let mut board = Board::from_exponents([[Some(0), Some(0)], [None, None]]);
/// let outcome = apply_move(&mut board, Direction::Right);
/// assert!(outcome.valid);
/// assert_eq!(outcome.merges, 1);
/// assert_eq!(board.exponents(), [[None, Some(1)], [None, None]]);
///
/// // Nothing left to slide or merge
/// assert!(!apply_move(&mut board, Direction::Right).valid);
/// ```
pub fn apply_move<const N: usize>(board: &mut Board<N>, direction: Direction) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    for index in 0..N {
        let lane = compact_lane(board, direction, index);
        outcome.valid |= lane.valid;
        outcome.merges += lane.merges;
    }

    if outcome.valid {
        debug!(
            "move {}: {} merge(s), {} tile(s) left",
            direction.as_str(),
            outcome.merges,
            board.tile_count()
        );
    }
    outcome
}

fn compact_lane<const N: usize>(
    board: &mut Board<N>,
    direction: Direction,
    index: usize,
) -> MoveOutcome {
    let lane = Board::<N>::lane(direction, index);
    // Slots that already absorbed a merge this pass.
    let mut merged = [false; N];
    let mut outcome = MoveOutcome::default();
    // Next free slot, counted from the leading edge.
    let mut write = 0usize;

    for read in 0..N {
        let src = lane[read];
        let Some(exp) = board.rows()[src.row][src.col].exponent else {
            continue;
        };

        // Two MAX_EXPONENT tiles would sum past u64 and stay apart.
        if write > 0 && !merged[write - 1] && exp < MAX_EXPONENT {
            let dst = lane[write - 1];
            if board.rows()[dst.row][dst.col].exponent == Some(exp) {
                set_cell(board, src.row, src.col, Cell::EMPTY);
                set_cell(
                    board,
                    dst.row,
                    dst.col,
                    Cell {
                        exponent: Some(exp + 1),
                        anim: Animation::start(src),
                    },
                );
                merged[write - 1] = true;
                outcome.valid = true;
                outcome.merges += 1;
                continue;
            }
        }

        if read != write {
            let dst = lane[write];
            set_cell(board, src.row, src.col, Cell::EMPTY);
            set_cell(
                board,
                dst.row,
                dst.col,
                Cell {
                    exponent: Some(exp),
                    anim: Animation::start(src),
                },
            );
            outcome.valid = true;
        }
        write += 1;
    }

    outcome
}

#[inline]
fn set_cell<const N: usize>(board: &mut Board<N>, row: usize, col: usize, cell: Cell) {
    if let Some(slot) = board.get_mut(row, col) {
        *slot = cell;
    }
}

/// Pick the single direction to apply when several were pressed in one step.
///
/// Precedence is fixed: down, up, left, right. Only the first match is used.
pub fn select_direction(pressed: &[Direction]) -> Option<Direction> {
    Direction::PRECEDENCE
        .into_iter()
        .find(|dir| pressed.contains(dir))
}
