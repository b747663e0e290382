//! Labyrinthe rectangulaire validé et certification de chemins.
//!
//! Un `Maze` est vérifié une fois pour toutes à sa construction ; une
//! `Solution` est assemblée librement puis certifiée par `Solution::validate`.

pub mod check;
pub mod models;

pub use models::{
    validate_solution, Border, Direction, InvalidMaze, InvalidSolution, Maze, Policy, Role,
    Solution, Square,
};
