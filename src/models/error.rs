use thiserror::Error;

use crate::models::direction::Direction;

/// Erreurs levées à la construction d'un `Maze`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMaze {
    #[error("Maze has no squares")]
    Empty,
    #[error("Square indices are incorrectly mapped: position {position} holds index {index}")]
    IncorrectIndices { position: usize, index: usize },
    #[error("Maze is not rectangular: {found} squares, max row {max_row}, max column {max_column}")]
    NotRectangular {
        max_row: usize,
        max_column: usize,
        found: usize,
    },
    #[error("Square's row is not correct: position {position} expects {expected}, found {found}")]
    IncorrectRow {
        position: usize,
        expected: usize,
        found: usize,
    },
    #[error("Square's column is incorrect: position {position} expects {expected}, found {found}")]
    IncorrectColumn {
        position: usize,
        expected: usize,
        found: usize,
    },
    #[error("Maze does not have exactly one entrance (found {0})")]
    EntranceCount(usize),
    #[error("Maze does not have exactly one exit (found {0})")]
    ExitCount(usize),
    #[error("Square index {index} is out of range for a maze of {len} squares")]
    OutOfRange { index: usize, len: usize },
}

/// Erreurs levées par la validation d'une `Solution`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSolution {
    #[error("Solution has no squares")]
    Empty,
    #[error("Solution does not start at the entrance (first square {found})")]
    MissingEntrance { found: usize },
    #[error("Solution does not end at the exit (last square {found})")]
    MissingExit { found: usize },
    #[error("Two squares next to each other are not a valid corridor: {from} -> {to}")]
    InvalidCorridor { from: usize, to: usize },
    #[error("Squares {from} and {to} are not adjacent")]
    NotAdjacent { from: usize, to: usize },
    #[error("Passage from square {from} to square {to} heading {direction:?} is walled")]
    Walled {
        from: usize,
        to: usize,
        direction: Direction,
    },
    #[error("Square {index} does not belong to the maze")]
    NotInMaze { index: usize },
}
