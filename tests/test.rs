use lifegrid::{ca_formats::rle::Rle, Board, Cell, Generation, StopReason, World};
use proptest::prelude::*;

fn generation(cells: &[(i64, i64)]) -> Generation {
    cells.iter().map(|&c| Cell::from(c)).collect()
}

/// Plain dense implementation: every cell of the grid, every step.
fn dense_step(width: i64, height: i64, current: &Generation) -> Generation {
    let mut next = Generation::new();
    for x in 0..width {
        for y in 0..height {
            let mut count = 0;
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let (nx, ny) = (x + dx, y + dy);
                    if (dx, dy) != (0, 0)
                        && (0..width).contains(&nx)
                        && (0..height).contains(&ny)
                        && current.contains(Cell::new(nx, ny))
                    {
                        count += 1;
                    }
                }
            }
            let alive = current.contains(Cell::new(x, y));
            if count == 3 || (alive && count == 2) {
                next.insert(Cell::new(x, y));
            }
        }
    }
    next
}

#[test]
fn blinker() {
    let horizontal = generation(&[(1, 2), (2, 2), (3, 2)]);
    let vertical = generation(&[(2, 1), (2, 2), (2, 3)]);
    let mut world = World::new(5, 5, horizontal.iter()).unwrap();
    assert_eq!(world.step(), &vertical);
    assert_eq!(world.step(), &horizontal);
    assert_eq!(world.history(), &[horizontal.clone(), vertical][..]);
}

#[test]
fn extinction() {
    let mut world = World::new(5, 5, vec![(0, 0)]).unwrap();
    assert!(world.step().is_empty());
    assert_eq!(world.stop_reason(None), Some(StopReason::Extinct));
}

#[test]
fn block() {
    let block = generation(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
    let mut world = World::new(5, 5, block.iter()).unwrap();
    assert_eq!(world.step(), &block);
    assert_eq!(world.stop_reason(None), Some(StopReason::Stable));
}

#[test]
fn glider_settles_in_corner() {
    let rle = Rle::new("x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!").unwrap();
    let mut world = World::from_rle_with_size(8, 8, rle).unwrap();
    assert_eq!(world.run(Some(100)), StopReason::Stable);
    let boards: Vec<Board> = world.render_history().collect();
    assert_eq!(boards.len(), world.get_generation());
    assert_eq!(world.population(), 4);
    assert_eq!(
        world.render_current().to_string(),
        "........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ......##\n\
         ......##\n"
    );
}

#[test]
fn sample_pattern() {
    let mut world = World::new(5, 5, vec![(2, 3), (3, 2), (1, 1), (2, 1), (3, 1)]).unwrap();
    for _ in 0..5 {
        world.step();
    }
    let boards: Vec<String> = world.render_history().map(|b| b.to_string()).collect();
    assert_eq!(boards[0], ".....\n..#..\n...#.\n.###.\n.....\n");
    assert_eq!(boards[1], ".....\n.....\n.#.#.\n..##.\n..#..\n");
}

fn arb_world() -> impl Strategy<Value = World> {
    (1i64..12, 1i64..12).prop_flat_map(|(width, height)| {
        prop::collection::vec((0..width, 0..height), 1..40)
            .prop_map(move |cells| World::new(width, height, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn step_matches_dense(mut world in arb_world(), steps in 0usize..8) {
        for _ in 0..steps {
            let expected = dense_step(world.width(), world.height(), world.current());
            prop_assert_eq!(world.step(), &expected);
        }
        prop_assert_eq!(world.history().len(), steps);
    }

    #[test]
    fn cells_stay_in_bounds(mut world in arb_world()) {
        for _ in 0..4 {
            world.step();
        }
        let (width, height) = (world.width(), world.height());
        for cell in world.current().iter() {
            prop_assert!((0..width).contains(&cell.x) && (0..height).contains(&cell.y));
        }
    }

    #[test]
    fn board_matches_generation(world in arb_world()) {
        let board = world.render_current();
        let height = world.height();
        prop_assert_eq!(board.height() as i64, height);
        prop_assert_eq!(board.width() as i64, world.width());
        for (r, row) in board.rows().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                prop_assert_eq!(alive, world.get_cell(c as i64, height - 1 - r as i64));
            }
        }
        prop_assert_eq!(board.population(), world.population());
    }
}
