//! Move engine tests - slide/merge scenarios and seeded property loops

use tui_2048::core::anim::Animation;
use tui_2048::core::{apply_move, select_direction, Board, SimpleRng};
use tui_2048::types::{Direction, Position};

const E: Option<u8> = None;

fn t(exponent: u8) -> Option<u8> {
    Some(exponent)
}

/// Random board: roughly one third empty, small exponents so merges are common.
fn random_board(rng: &mut SimpleRng) -> Board<4> {
    let mut grid = [[None; 4]; 4];
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            if rng.next_range(3) != 0 {
                *cell = Some(rng.next_range(4) as u8);
            }
        }
    }
    Board::from_exponents(grid)
}

/// Straightforward lane reduction: drop gaps, then merge equal neighbours
/// pairwise from the leading edge, each tile at most once.
fn reduce_lane(values: &[Option<u8>]) -> Vec<u8> {
    let tiles: Vec<u8> = values.iter().flatten().copied().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            out.push(tiles[i] + 1);
            i += 2;
        } else {
            out.push(tiles[i]);
            i += 1;
        }
    }
    out
}

fn lane_values(board: &Board<4>, direction: Direction, index: usize) -> Vec<Option<u8>> {
    Board::<4>::lane(direction, index)
        .iter()
        .map(|p| board.get_exponent(p.row, p.col).flatten())
        .collect()
}

#[test]
fn test_row_pair_moves_right() {
    // [2, 2, _, _] -> [_, _, _, 4]
    let mut board = Board::from_exponents([
        [t(0), t(0), E, E],
        [E; 4],
        [E; 4],
        [E; 4],
    ]);
    let outcome = apply_move(&mut board, Direction::Right);
    assert!(outcome.valid);
    assert_eq!(outcome.merges, 1);
    assert_eq!(board.exponents()[0], [E, E, E, t(1)]);
}

#[test]
fn test_row_of_four_equal() {
    // [2, 2, 2, 2] -> [_, _, 4, 4]
    let mut board = Board::from_exponents([[t(0); 4], [E; 4], [E; 4], [E; 4]]);
    let outcome = apply_move(&mut board, Direction::Right);
    assert_eq!(outcome.merges, 2);
    assert_eq!(board.exponents()[0], [E, E, t(1), t(1)]);
}

#[test]
fn test_mixed_row() {
    // [4, 4, 2, _] -> [_, _, 8, 2]: the 2 reaches the edge first
    let mut board = Board::from_exponents([[t(1), t(1), t(0), E], [E; 4], [E; 4], [E; 4]]);
    apply_move(&mut board, Direction::Right);
    assert_eq!(board.exponents()[0], [E, E, t(2), t(0)]);
}

#[test]
fn test_column_moves_down() {
    let mut board = Board::from_exponents([
        [t(0), E, E, E],
        [E, E, E, E],
        [t(0), E, E, E],
        [t(1), E, E, E],
    ]);
    let outcome = apply_move(&mut board, Direction::Down);
    assert!(outcome.valid);
    // Leading edge is the bottom: 4 stays, the two 2s merge above it.
    assert_eq!(board.get_exponent(3, 0), Some(t(1)));
    assert_eq!(board.get_exponent(2, 0), Some(t(1)));
    assert_eq!(board.get_exponent(1, 0), Some(E));
    assert_eq!(board.get_exponent(0, 0), Some(E));
}

#[test]
fn test_blocked_move_is_noop_including_animations() {
    let mut board = Board::from_exponents([
        [E, E, t(0), t(1)],
        [E, E, E, t(2)],
        [E; 4],
        [E; 4],
    ]);
    // Mark an in-flight animation to check it is left alone.
    if let Some(cell) = board.get_mut(0, 3) {
        cell.anim = Animation::start(Position::new(0, 0));
    }
    let before = board.clone();
    let outcome = apply_move(&mut board, Direction::Right);
    assert!(!outcome.valid);
    assert_eq!(outcome.merges, 0);
    assert_eq!(board, before);
}

#[test]
fn test_merge_animation_origin_is_source() {
    let mut board = Board::from_exponents([[t(0), E, E, t(0)], [E; 4], [E; 4], [E; 4]]);
    apply_move(&mut board, Direction::Right);

    let cell = board.get(0, 3).copied().unwrap_or_default();
    assert_eq!(cell.exponent, t(1));
    assert_eq!(cell.anim.draw_position(0, 3), (0.0, 0.0));
}

#[test]
fn test_precedence_order() {
    use Direction::*;
    assert_eq!(select_direction(&[Right, Left, Up, Down]), Some(Down));
    assert_eq!(select_direction(&[Right, Up]), Some(Up));
    assert_eq!(select_direction(&[Right, Left]), Some(Left));
    assert_eq!(select_direction(&[]), None);
}

#[test]
fn test_property_matches_lane_reduction() {
    let mut rng = SimpleRng::new(2048);
    for _ in 0..500 {
        let before = random_board(&mut rng);
        for direction in Direction::PRECEDENCE {
            let mut after = before.clone();
            apply_move(&mut after, direction);
            for index in 0..4 {
                let expected = reduce_lane(&lane_values(&before, direction, index));
                let got = lane_values(&after, direction, index);
                // Compacted toward the leading edge, gaps only behind.
                let mut want: Vec<Option<u8>> = expected.into_iter().map(Some).collect();
                want.resize(4, None);
                assert_eq!(got, want, "{:?} lane {} of {:?}", direction, index, before);
            }
        }
    }
}

#[test]
fn test_property_sum_and_count() {
    let mut rng = SimpleRng::new(7);
    for _ in 0..500 {
        let before = random_board(&mut rng);
        for direction in Direction::PRECEDENCE {
            let mut after = before.clone();
            let outcome = apply_move(&mut after, direction);

            assert_eq!(after.value_sum(), before.value_sum());
            assert_eq!(
                after.tile_count(),
                before.tile_count() - outcome.merges as usize
            );
            assert!(outcome.merges as usize <= before.tile_count() / 2);
            if !outcome.valid {
                assert_eq!(after, before);
            } else {
                assert_ne!(after.exponents(), before.exponents());
            }
        }
    }
}

#[test]
fn test_property_origins_stay_in_lane() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..300 {
        let before = random_board(&mut rng);
        for direction in Direction::PRECEDENCE {
            let mut after = before.clone();
            apply_move(&mut after, direction);

            for pos in after.positions() {
                let Some(cell) = after.get(pos.row, pos.col) else {
                    continue;
                };
                if let Animation::Interpolating {
                    origin_row,
                    origin_col,
                    progress,
                } = cell.anim
                {
                    assert_eq!(progress, 0.0);
                    let (r, c) = (pos.row as f32, pos.col as f32);
                    match direction {
                        Direction::Down => assert!(origin_col == c && origin_row < r),
                        Direction::Up => assert!(origin_col == c && origin_row > r),
                        Direction::Left => assert!(origin_row == r && origin_col > c),
                        Direction::Right => assert!(origin_row == r && origin_col < c),
                    }
                }
            }
        }
    }
}

#[test]
fn test_property_second_move_only_merges() {
    // After one move every lane is compacted; repeating it can only merge.
    let mut rng = SimpleRng::new(31337);
    for _ in 0..300 {
        let mut board = random_board(&mut rng);
        for direction in Direction::PRECEDENCE {
            apply_move(&mut board, direction);
            let mut again = board.clone();
            let outcome = apply_move(&mut again, direction);
            assert_eq!(outcome.valid, outcome.merges > 0);
        }
    }
}
