pub mod ascii_utils;
pub mod config;
pub mod error;
pub mod json_utils;
pub mod maze;

pub use config::{GeneratorConfig, OutputFormat};
pub use error::{MazeError, Result};
pub use maze::{
    generate_maze, generate_maze_seeded, generate_maze_with, Cell, Coin, FixedCoin, Maze,
    RandomCoin, Row, SetLabel,
};
