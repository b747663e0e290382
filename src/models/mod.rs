pub mod border;
pub mod direction;
pub mod error;
pub mod maze;
pub mod role;
pub mod solution;
pub mod square;

pub use border::Border;
pub use direction::Direction;
pub use error::{InvalidMaze, InvalidSolution};
pub use maze::{Maze, Policy, RawMaze};
pub use role::Role;
pub use solution::{validate_solution, Solution};
pub use square::Square;
