use serde::{Deserialize, Serialize};

use crate::models::border::Border;
use crate::models::direction::Direction;
use crate::models::role::Role;

/// Représente une case du labyrinthe.
///
/// Une case connaît sa position dans le stockage à plat (`index`), ses
/// coordonnées dans la grille, son rôle et ses côtés ouverts. Elle ne sait
/// rien du labyrinthe qui la contient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub border: Border,
}

impl Square {
    /// Crée une case neutre (`Role::Empty`).
    pub fn new(index: usize, row: usize, column: usize, border: Border) -> Self {
        Self {
            index,
            row,
            column,
            role: Role::Empty,
            border,
        }
    }

    /// Copie de la case avec un autre rôle.
    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        self.border.is_open(direction)
    }

    /// Même ligne ou même colonne que `other`.
    pub fn is_aligned_with(&self, other: &Square) -> bool {
        self.row == other.row || self.column == other.column
    }
}
