//! Spawn policy - introduces new tiles
//!
//! After a valid move, empty cells are scanned in row-major order and each one
//! is offered a single coin flip; the first success receives a new tile and
//! the scan stops. If every flip fails nothing spawns, which is a normal
//! outcome.
//!
//! The policy is deliberately order-biased: earlier empty cells are more
//! likely to receive the tile than later ones. Uniform placement would be a
//! different policy, not a fix of this one.

use log::{debug, trace};

use crate::board::Board;
use crate::cell::Cell;
use crate::rng::{draw_below, CoinSource};
use crate::types::Position;

/// Offer each empty cell one coin flip; place a tile on the first success.
///
/// Returns where the tile was placed, or `None` when the board is full or no
/// flip succeeded.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{maybe_spawn, Board};
/// use tui_2048_core::types::Position;
///
/// let mut board = Board::<4>::new();
/// let mut flips = [false, false, false, true].into_iter();
/// let mut coin = move || flips.next().unwrap_or(false);
///
/// let placed = maybe_spawn(&mut board, &mut coin, 0);
/// assert_eq!(placed, Some(Position::new(0, 3)));
/// assert_eq!(board.tile_count(), 1);
/// ```
pub fn maybe_spawn<const N: usize, C: CoinSource + ?Sized>(
    board: &mut Board<N>,
    coins: &mut C,
    exponent: u8,
) -> Option<Position> {
    let target = board.empty_cells().find(|_| coins.flip());

    match target {
        Some(pos) => {
            place_tile(board, pos, exponent);
            debug!("spawned exponent {} at ({}, {})", exponent, pos.row, pos.col);
            Some(pos)
        }
        None => {
            trace!("no spawn this move");
            None
        }
    }
}

/// Place `count` tiles at distinct, uniformly chosen empty cells.
///
/// Returns the number of tiles placed, which is less than `count` only when
/// the board runs out of empty cells.
pub fn seed_initial_tiles<const N: usize, C: CoinSource + ?Sized>(
    board: &mut Board<N>,
    coins: &mut C,
    count: usize,
    exponent: u8,
) -> usize {
    let mut placed = 0;
    while placed < count {
        let empty = board.empty_cells().count();
        if empty == 0 {
            break;
        }
        let pick = draw_below(coins, empty);
        let Some(pos) = board.empty_cells().nth(pick) else {
            break;
        };
        place_tile(board, pos, exponent);
        placed += 1;
    }
    placed
}

/// New tiles appear settled at their own coordinates.
fn place_tile<const N: usize>(board: &mut Board<N>, pos: Position, exponent: u8) {
    if let Some(cell) = board.get_mut(pos.row, pos.col) {
        *cell = Cell::tile(exponent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_first_success_wins_and_scan_stops() {
        let mut board = Board::<4>::new();
        let mut flips = 0;
        let mut coin = || {
            flips += 1;
            flips == 2
        };
        assert_eq!(maybe_spawn(&mut board, &mut coin, 0), Some(Position::new(0, 1)));
        assert_eq!(flips, 2);
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn test_all_failures_spawn_nothing() {
        let mut board = Board::<4>::new();
        let mut never = || false;
        assert_eq!(maybe_spawn(&mut board, &mut never, 0), None);
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_occupied_cells_get_no_flip() {
        let mut grid = [[None; 4]; 4];
        grid[0][0] = Some(3);
        grid[0][1] = Some(3);
        let mut board = Board::from_exponents(grid);
        let mut always = || true;
        assert_eq!(maybe_spawn(&mut board, &mut always, 0), Some(Position::new(0, 2)));
        assert_eq!(board.get_exponent(0, 2), Some(Some(0)));
    }

    #[test]
    fn test_full_board_draws_no_flip() {
        let mut board = Board::from_exponents([[Some(0); 4]; 4]);
        let mut flips = 0;
        let mut coin = || {
            flips += 1;
            true
        };
        assert_eq!(maybe_spawn(&mut board, &mut coin, 0), None);
        assert_eq!(flips, 0);
    }

    #[test]
    fn test_spawn_is_order_biased() {
        // The first empty cell wins about half the time.
        let mut rng = SimpleRng::new(5);
        let mut first = 0;
        for _ in 0..2_000 {
            let mut board = Board::<4>::new();
            if maybe_spawn(&mut board, &mut rng, 0) == Some(Position::new(0, 0)) {
                first += 1;
            }
        }
        assert!((800..1_200).contains(&first), "first = {}", first);
    }

    #[test]
    fn test_spawned_tile_is_settled() {
        let mut board = Board::<4>::new();
        let mut always = || true;
        maybe_spawn(&mut board, &mut always, 2);
        let cell = board.get(0, 0).copied().unwrap_or_default();
        assert_eq!(cell.exponent, Some(2));
        assert!(cell.anim.is_settled());
    }

    #[test]
    fn test_seed_places_distinct_tiles() {
        for seed in 1..50 {
            let mut rng = SimpleRng::new(seed);
            let mut board = Board::<4>::new();
            assert_eq!(seed_initial_tiles(&mut board, &mut rng, 2, 0), 2);
            assert_eq!(board.tile_count(), 2);
        }
    }

    #[test]
    fn test_seed_stops_when_full() {
        let mut rng = SimpleRng::new(3);
        let mut board = Board::<2>::new();
        assert_eq!(seed_initial_tiles(&mut board, &mut rng, 10, 0), 4);
        assert!(board.is_full());
    }

    #[test]
    fn test_seed_is_deterministic() {
        let mut a = Board::<4>::new();
        let mut b = Board::<4>::new();
        seed_initial_tiles(&mut a, &mut SimpleRng::new(77), 2, 0);
        seed_initial_tiles(&mut b, &mut SimpleRng::new(77), 2, 0);
        assert_eq!(a, b);
    }
}
