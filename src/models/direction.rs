use serde::{Deserialize, Serialize};

use crate::models::border::Border;

/// Les quatre directions cardinales d'une case.
///
/// Les lignes croissent vers le Sud et les colonnes vers l'Est.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Tourne à gauche (par ex. North -> West)
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Tourne à droite (par ex. North -> East)
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Direction opposée (par ex. North -> South)
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Le drapeau de `Border` correspondant à ce côté.
    pub fn border(self) -> Border {
        match self {
            Direction::North => Border::NORTH,
            Direction::East => Border::EAST,
            Direction::South => Border::SOUTH,
            Direction::West => Border::WEST,
        }
    }

    /// Déplacement (ligne, colonne) d'un pas dans cette direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Direction d'un pas unique de `from` vers `to`, s'il existe.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let (from_row, from_column) = from;
        let (to_row, to_column) = to;
        Direction::ALL.into_iter().find(|direction| {
            let (dr, dc) = direction.offset();
            from_row.checked_add_signed(dr) == Some(to_row)
                && from_column.checked_add_signed(dc) == Some(to_column)
        })
    }
}
