use std::collections::{HashMap, VecDeque};

use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_maze::maze::builder::build_row;
use rusty_maze::maze::closure::close_row;
use rusty_maze::maze::horizontal::carve_right_walls;
use rusty_maze::maze::vertical::carve_bottom_walls;
use rusty_maze::{generate_maze_seeded, generate_maze_with, FixedCoin, Maze, RandomCoin, Row};

const SIZES: &[(usize, usize)] = &[(1, 1), (1, 5), (5, 1), (2, 3), (7, 7), (15, 4), (4, 30), (20, 20)];

/// Parcours en largeur depuis (0, 0) en suivant les passages ouverts.
fn reachable_cells(maze: &Maze) -> usize {
    let (height, width) = (maze.height(), maze.width());
    let mut seen = vec![vec![false; width]; height];
    let mut queue = VecDeque::from([(0usize, 0usize)]);
    seen[0][0] = true;
    let mut count = 0;

    while let Some((r, c)) = queue.pop_front() {
        count += 1;
        let cell = maze.cell(r, c).unwrap();
        let mut neighbours = Vec::new();
        if c + 1 < width && !cell.right_wall {
            neighbours.push((r, c + 1));
        }
        if r + 1 < height && !cell.bottom_wall {
            neighbours.push((r + 1, c));
        }
        if c > 0 && !maze.cell(r, c - 1).unwrap().right_wall {
            neighbours.push((r, c - 1));
        }
        if r > 0 && !maze.cell(r - 1, c).unwrap().bottom_wall {
            neighbours.push((r - 1, c));
        }
        for (nr, nc) in neighbours {
            if !seen[nr][nc] {
                seen[nr][nc] = true;
                queue.push_back((nr, nc));
            }
        }
    }
    count
}

fn open_bottoms_per_set(row: &Row) -> HashMap<u32, usize> {
    let mut sets = HashMap::new();
    for cell in row {
        let open = sets.entry(cell.label).or_insert(0);
        if !cell.bottom_wall {
            *open += 1;
        }
    }
    sets
}

#[test]
fn test_every_maze_is_one_component() {
    for &(rows, columns) in SIZES {
        for seed in 0..10 {
            let maze = generate_maze_seeded(rows, columns, seed).unwrap();
            assert_eq!(
                reachable_cells(&maze),
                rows * columns,
                "{rows}x{columns} seed {seed}"
            );
        }
    }
}

#[test]
fn test_every_maze_is_a_spanning_tree() {
    for &(rows, columns) in SIZES {
        for seed in 0..10 {
            let maze = generate_maze_seeded(rows, columns, seed).unwrap();
            assert_eq!(
                maze.passage_count(),
                rows * columns - 1,
                "{rows}x{columns} seed {seed}"
            );
        }
    }
}

#[test]
fn test_every_set_keeps_an_opening_below() {
    for seed in 0..20 {
        let maze = generate_maze_seeded(12, 10, seed).unwrap();
        let (last, upper) = maze.rows().split_last().unwrap();
        for row in upper {
            for (label, open) in open_bottoms_per_set(row) {
                assert!(open >= 1, "set {label} closed off (seed {seed})");
            }
        }
        assert!(last.all_cells_in_same_set());
    }
}

#[test]
fn test_labels_stay_transitive_between_passes() {
    // Une union ne laisse jamais un membre de l'ensemble absorbé derrière elle.
    let mut coin = RandomCoin::new(StdRng::seed_from_u64(99));
    let columns = 16;
    let mut previous: Option<Row> = None;
    let mut next_label = 1;

    for row_index in 0..30 {
        let (mut row, label) = build_row(previous.as_ref(), row_index, columns, next_label);
        next_label = label;
        assert!(row.iter().all(|c| c.label != 0 && c.label < next_label));

        let before = row.labels();
        carve_right_walls(&mut row, &mut coin);
        let after = row.labels();
        for i in 0..columns {
            for j in 0..columns {
                if before[i] == before[j] {
                    assert_eq!(after[i], after[j], "row {row_index}: {i} and {j} split");
                }
            }
        }

        let labels = row.labels();
        carve_bottom_walls(&mut row, &mut coin);
        assert_eq!(row.labels(), labels);
        for (_, open) in open_bottoms_per_set(&row) {
            assert!(open >= 1);
        }

        previous = Some(row);
    }
}

#[test]
fn test_closure_is_idempotent_on_generated_rows() {
    for seed in 0..10 {
        let maze = generate_maze_seeded(6, 12, seed).unwrap();
        let mut last = maze.row(5).unwrap().clone();
        let snapshot = last.clone();
        assert_eq!(close_row(&mut last), 0);
        assert_eq!(last, snapshot);
    }
}

#[test]
fn test_always_wall_row_zero_keeps_three_sets() {
    let maze = generate_maze_with(2, 3, &mut FixedCoin::AlwaysWall).unwrap();
    let first = maze.row(0).unwrap();
    assert_eq!(first.distinct_sets(), 3);
    assert!(first[0].right_wall && first[1].right_wall);
    assert!(first.iter().all(|c| !c.bottom_wall));

    // Ligne 1 avant sa propre passe horizontale : trois ensembles hérités
    let (inherited, _) = build_row(Some(first), 1, 3, 4);
    assert_eq!(inherited.labels(), first.labels());
}

#[test]
fn test_always_merge_makes_closure_a_no_op() {
    for columns in [1, 2, 9, 40] {
        let maze = generate_maze_with(1, columns, &mut FixedCoin::AlwaysMerge).unwrap();
        let mut row = maze.row(0).unwrap().clone();
        assert_eq!(row.distinct_sets(), 1);
        assert!(row.iter().all(|c| !c.right_wall));
        assert_eq!(close_row(&mut row), 0);
    }
}

#[test]
fn test_fixed_coins_still_produce_perfect_mazes() {
    for coin in [FixedCoin::AlwaysWall, FixedCoin::AlwaysMerge] {
        let mut coin = coin;
        let maze = generate_maze_with(8, 8, &mut coin).unwrap();
        assert_eq!(reachable_cells(&maze), 64);
        assert_eq!(maze.passage_count(), 63);
    }
}
