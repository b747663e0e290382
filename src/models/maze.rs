use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::models::direction::Direction;
use crate::models::error::InvalidMaze;
use crate::models::role::Role;
use crate::models::square::Square;

/// Niveau de validation appliqué à la construction d'un `Maze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Grille cohérente, une seule entrée et une seule sortie.
    #[default]
    Strict,
    /// Grille cohérente uniquement (sous-labyrinthes, structures partielles).
    GridOnly,
}

/// Forme sérialisée d'un labyrinthe, avant validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaze {
    #[serde(default)]
    pub policy: Policy,
    pub squares: Vec<Square>,
}

/// Labyrinthe rectangulaire, stocké à plat ligne par ligne.
///
/// Toutes les vérifications sont faites une seule fois dans `Maze::with_policy` ;
/// une instance existante est toujours une grille correcte et ne change plus.
/// Largeur, hauteur, entrée et sortie sont calculées à la construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMaze", into = "RawMaze")]
pub struct Maze {
    squares: Vec<Square>,
    policy: Policy,
    width: usize,
    height: usize,
    entrance: Option<usize>,
    exit: Option<usize>,
}

impl Maze {
    /// Construit un labyrinthe strict (une entrée, une sortie).
    pub fn new(squares: Vec<Square>) -> Result<Self, InvalidMaze> {
        Self::with_policy(squares, Policy::Strict)
    }

    /// Construit un labyrinthe en vérifiant, dans l'ordre : les index, la
    /// grille ligne/colonne, puis (en `Policy::Strict`) l'entrée et la sortie.
    /// S'arrête à la première erreur.
    pub fn with_policy(squares: Vec<Square>, policy: Policy) -> Result<Self, InvalidMaze> {
        if squares.is_empty() {
            log::warn!("Rejected maze: {}", InvalidMaze::Empty);
            return Err(InvalidMaze::Empty);
        }

        let (width, height) = match validate(&squares, policy) {
            Ok(size) => size,
            Err(err) => {
                log::warn!("Rejected maze ({:?}): {}", policy, err);
                return Err(err);
            }
        };

        let entrance = find_unique(&squares, Role::Entrance);
        let exit = find_unique(&squares, Role::Exit);
        log::debug!(
            "Built {}x{} maze ({} squares, {:?})",
            width,
            height,
            squares.len(),
            policy
        );

        Ok(Self {
            squares,
            policy,
            width,
            height,
            entrance,
            exit,
        })
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Toujours faux : un labyrinthe vide est refusé à la construction.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Parcourt les cases dans l'ordre des index. Chaque appel repart du début.
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Comme `get`, mais avec une erreur explicite hors limites.
    pub fn square(&self, index: usize) -> Result<&Square, InvalidMaze> {
        self.squares.get(index).ok_or(InvalidMaze::OutOfRange {
            index,
            len: self.squares.len(),
        })
    }

    /// Case aux coordonnées (ligne, colonne), si elle est dans la grille.
    pub fn square_at(&self, row: usize, column: usize) -> Option<&Square> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.squares.get(row * self.width + column)
    }

    /// Case voisine de `square` dans la direction donnée.
    pub fn neighbor(&self, square: &Square, direction: Direction) -> Option<&Square> {
        let (dr, dc) = direction.offset();
        let row = square.row.checked_add_signed(dr)?;
        let column = square.column.checked_add_signed(dc)?;
        self.square_at(row, column)
    }

    /// Vrai si `from` et `to` sont voisines et que les deux côtés qui se font
    /// face sont ouverts.
    pub fn has_passage(&self, from: &Square, to: &Square) -> bool {
        match Direction::between(from.position(), to.position()) {
            Some(direction) => from.is_open(direction) && to.is_open(direction.opposite()),
            None => false,
        }
    }

    /// L'unique entrée du labyrinthe.
    ///
    /// Toujours `Ok` en `Policy::Strict`. En `Policy::GridOnly`, renvoie
    /// `InvalidMaze::EntranceCount` s'il n'y a pas exactement une entrée.
    pub fn entrance(&self) -> Result<&Square, InvalidMaze> {
        match self.entrance {
            Some(index) => Ok(&self.squares[index]),
            None => Err(InvalidMaze::EntranceCount(count_role(&self.squares, Role::Entrance))),
        }
    }

    /// L'unique sortie du labyrinthe, voir `Maze::entrance`.
    pub fn exit(&self) -> Result<&Square, InvalidMaze> {
        match self.exit {
            Some(index) => Ok(&self.squares[index]),
            None => Err(InvalidMaze::ExitCount(count_role(&self.squares, Role::Exit))),
        }
    }
}

impl Index<usize> for Maze {
    type Output = Square;

    fn index(&self, index: usize) -> &Square {
        &self.squares[index]
    }
}

impl<'a> IntoIterator for &'a Maze {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl TryFrom<RawMaze> for Maze {
    type Error = InvalidMaze;

    fn try_from(raw: RawMaze) -> Result<Self, Self::Error> {
        Maze::with_policy(raw.squares, raw.policy)
    }
}

impl From<Maze> for RawMaze {
    fn from(maze: Maze) -> Self {
        RawMaze {
            policy: maze.policy,
            squares: maze.squares,
        }
    }
}

fn validate(squares: &[Square], policy: Policy) -> Result<(usize, usize), InvalidMaze> {
    validate_indices(squares)?;
    let (width, height) = grid_size(squares)?;
    validate_rows_columns(squares, width)?;
    if policy == Policy::Strict {
        validate_entrance(squares)?;
        validate_exit(squares)?;
    }
    Ok((width, height))
}

fn validate_indices(squares: &[Square]) -> Result<(), InvalidMaze> {
    match squares
        .iter()
        .enumerate()
        .find(|(position, square)| square.index != *position)
    {
        Some((position, square)) => Err(InvalidMaze::IncorrectIndices {
            position,
            index: square.index,
        }),
        None => Ok(()),
    }
}

/// Largeur et hauteur de la grille, si les cases la remplissent exactement.
fn grid_size(squares: &[Square]) -> Result<(usize, usize), InvalidMaze> {
    let found = squares.len();
    let max_row = squares.iter().map(|square| square.row).max().unwrap_or(0);
    let max_column = squares.iter().map(|square| square.column).max().unwrap_or(0);
    let not_rectangular = InvalidMaze::NotRectangular {
        max_row,
        max_column,
        found,
    };

    // `found` cases ne couvrent jamais plus de `found` lignes ou colonnes.
    if max_row >= found || max_column >= found {
        return Err(not_rectangular);
    }
    let (width, height) = (max_column + 1, max_row + 1);
    match width.checked_mul(height) {
        Some(area) if area == found => Ok((width, height)),
        _ => Err(not_rectangular),
    }
}

fn validate_rows_columns(squares: &[Square], width: usize) -> Result<(), InvalidMaze> {
    for (position, square) in squares.iter().enumerate() {
        let (y, x) = (position / width, position % width);
        if square.row != y {
            return Err(InvalidMaze::IncorrectRow {
                position,
                expected: y,
                found: square.row,
            });
        }
        if square.column != x {
            return Err(InvalidMaze::IncorrectColumn {
                position,
                expected: x,
                found: square.column,
            });
        }
    }
    Ok(())
}

fn validate_entrance(squares: &[Square]) -> Result<(), InvalidMaze> {
    match count_role(squares, Role::Entrance) {
        1 => Ok(()),
        count => Err(InvalidMaze::EntranceCount(count)),
    }
}

fn validate_exit(squares: &[Square]) -> Result<(), InvalidMaze> {
    match count_role(squares, Role::Exit) {
        1 => Ok(()),
        count => Err(InvalidMaze::ExitCount(count)),
    }
}

fn count_role(squares: &[Square], role: Role) -> usize {
    squares.iter().filter(|square| square.role == role).count()
}

fn find_unique(squares: &[Square], role: Role) -> Option<usize> {
    let mut matches = squares.iter().filter(|square| square.role == role);
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first.index),
    }
}
