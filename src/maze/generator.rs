use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{MazeError, Result};
use crate::maze::builder::build_row;
use crate::maze::cell::SetLabel;
use crate::maze::closure::close_row;
use crate::maze::coin::{Coin, RandomCoin};
use crate::maze::grid::Maze;
use crate::maze::horizontal::carve_right_walls;
use crate::maze::vertical::carve_bottom_walls;

/// Première étiquette distribuée par le compteur.
pub const FIRST_LABEL: SetLabel = 1;

/// Génère un labyrinthe parfait de `rows` x `columns` avec le générateur
/// aléatoire du thread courant.
pub fn generate_maze(rows: usize, columns: usize) -> Result<Maze> {
    generate_maze_with(rows, columns, &mut RandomCoin::new(rand::rng()))
}

/// Comme [`generate_maze`], mais reproductible : même graine, même labyrinthe.
pub fn generate_maze_seeded(rows: usize, columns: usize, seed: u64) -> Result<Maze> {
    generate_maze_with(rows, columns, &mut RandomCoin::new(StdRng::seed_from_u64(seed)))
}

/// Génère un labyrinthe parfait (algorithme d'Eller) en tirant chaque
/// décision dans `coin`.
///
/// Pour chaque ligne : construction à partir de la ligne précédente, passe
/// horizontale, passe verticale, puis fermeture pour la dernière ligne.
/// Les dimensions nulles sont refusées.
pub fn generate_maze_with<C: Coin + ?Sized>(
    rows: usize,
    columns: usize,
    coin: &mut C,
) -> Result<Maze> {
    if rows == 0 || columns == 0 {
        return Err(MazeError::InvalidDimensions { rows, columns });
    }

    let mut maze = Maze::with_capacity(rows, columns);
    let mut next_label = FIRST_LABEL;

    for row_index in 0..rows {
        let (mut row, label) = build_row(maze.last_row(), row_index, columns, next_label);
        next_label = label;

        carve_right_walls(&mut row, coin);
        carve_bottom_walls(&mut row, coin);

        if row_index == rows - 1 {
            let sweeps = close_row(&mut row);
            debug!("row {row_index}: closed in {sweeps} sweep(s)");
        }

        debug!(
            "row {}: {} set(s), labels up to {}",
            row_index,
            row.distinct_sets(),
            next_label - 1
        );
        maze.push_row(row);
    }

    info!(
        "generated {}x{} maze with {} passages",
        rows,
        columns,
        maze.passage_count()
    );
    Ok(maze)
}
