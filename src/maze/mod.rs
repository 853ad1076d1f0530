/*!
 * # Génération de labyrinthes parfaits
 *
 * Implémentation de l'algorithme d'Eller : le labyrinthe est construit ligne
 * par ligne, chaque ligne ne dépendant que de l'état de la précédente
 * (étiquettes d'ensemble et murs du bas).
 *
 * - `builder` : construction d'une ligne à partir de la précédente.
 * - `horizontal` : murs de droite et fusions dans la ligne.
 * - `vertical` : murs du bas, chaque ensemble garde une ouverture.
 * - `closure` : fermeture de la dernière ligne.
 * - `generator` : enchaîne les passes sur toutes les lignes.
 */

pub mod builder;
pub mod cell;
pub mod closure;
pub mod coin;
pub mod generator;
pub mod grid;
pub mod horizontal;
pub mod row;
pub mod vertical;

pub use cell::{Cell, SetLabel, UNASSIGNED};
pub use coin::{Coin, FixedCoin, RandomCoin};
pub use generator::{generate_maze, generate_maze_seeded, generate_maze_with};
pub use grid::Maze;
pub use row::Row;
