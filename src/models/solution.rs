use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::models::direction::Direction;
use crate::models::error::InvalidSolution;
use crate::models::maze::Maze;
use crate::models::role::Role;
use crate::models::square::Square;

/// Chemin proposé à travers un labyrinthe, case par case.
///
/// La construction ne vérifie rien : un algorithme de recherche peut assembler
/// des chemins partiels puis appeler `Solution::validate` sur le candidat final.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    squares: Vec<Square>,
}

impl Solution {
    pub fn new(squares: Vec<Square>) -> Self {
        Self { squares }
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Vérifie que le chemin part de l'entrée, finit à la sortie et que deux
    /// cases consécutives partagent une ligne ou une colonne.
    ///
    /// La distance entre deux cases consécutives n'est pas contrôlée, ni les
    /// murs : voir `Solution::validate_against` pour cela.
    pub fn validate(&self) -> Result<(), InvalidSolution> {
        let result = self.check_endpoints().and_then(|_| self.check_corridors());
        match &result {
            Ok(()) => log::debug!("Solution of {} squares is valid", self.len()),
            Err(err) => log::warn!("Rejected solution: {}", err),
        }
        result
    }

    /// `Solution::validate`, puis vérifie le chemin contre `maze` : chaque case
    /// appartient au labyrinthe, chaque pas est d'exactement une case et le
    /// passage entre deux cases n'est pas muré.
    pub fn validate_against(&self, maze: &Maze) -> Result<(), InvalidSolution> {
        self.validate()?;
        let result = self.check_membership(maze).and_then(|_| self.check_steps());
        match &result {
            Ok(()) => log::debug!("Solution of {} squares walks through the maze", self.len()),
            Err(err) => log::warn!("Rejected solution against maze: {}", err),
        }
        result
    }

    fn check_endpoints(&self) -> Result<(), InvalidSolution> {
        let (first, last) = match (self.squares.first(), self.squares.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(InvalidSolution::Empty),
        };
        if first.role != Role::Entrance {
            return Err(InvalidSolution::MissingEntrance { found: first.index });
        }
        if last.role != Role::Exit {
            return Err(InvalidSolution::MissingExit { found: last.index });
        }
        Ok(())
    }

    fn check_corridors(&self) -> Result<(), InvalidSolution> {
        for pair in self.squares.windows(2) {
            let (current, following) = (&pair[0], &pair[1]);
            if !current.is_aligned_with(following) {
                return Err(InvalidSolution::InvalidCorridor {
                    from: current.index,
                    to: following.index,
                });
            }
        }
        Ok(())
    }

    fn check_membership(&self, maze: &Maze) -> Result<(), InvalidSolution> {
        match self
            .squares
            .iter()
            .find(|square| maze.get(square.index) != Some(*square))
        {
            Some(square) => Err(InvalidSolution::NotInMaze { index: square.index }),
            None => Ok(()),
        }
    }

    fn check_steps(&self) -> Result<(), InvalidSolution> {
        for pair in self.squares.windows(2) {
            let (current, following) = (&pair[0], &pair[1]);
            let direction = Direction::between(current.position(), following.position()).ok_or(
                InvalidSolution::NotAdjacent {
                    from: current.index,
                    to: following.index,
                },
            )?;
            if !current.is_open(direction) || !following.is_open(direction.opposite()) {
                return Err(InvalidSolution::Walled {
                    from: current.index,
                    to: following.index,
                    direction,
                });
            }
        }
        Ok(())
    }
}

/// Équivalent libre de `Solution::validate`.
pub fn validate_solution(solution: &Solution) -> Result<(), InvalidSolution> {
    solution.validate()
}

impl From<Vec<Square>> for Solution {
    fn from(squares: Vec<Square>) -> Self {
        Self::new(squares)
    }
}

impl FromIterator<Square> for Solution {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Solution {
    type Output = Square;

    fn index(&self, index: usize) -> &Square {
        &self.squares[index]
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::border::Border;

    fn square(index: usize, row: usize, column: usize, role: Role) -> Square {
        Square::new(index, row, column, Border::ALL).with_role(role)
    }

    #[test]
    fn test_straight_line() {
        let solution = Solution::new(vec![
            square(0, 0, 0, Role::Entrance),
            square(1, 0, 1, Role::Empty),
            square(2, 0, 2, Role::Exit),
        ]);
        assert_eq!(solution.validate(), Ok(()));
        assert_eq!(validate_solution(&solution), Ok(()));
    }

    #[test]
    fn test_exit_first() {
        let solution = Solution::new(vec![
            square(2, 0, 2, Role::Exit),
            square(1, 0, 1, Role::Empty),
            square(0, 0, 0, Role::Entrance),
        ]);
        assert_eq!(solution.validate(), Err(InvalidSolution::MissingEntrance { found: 2 }));
    }

    #[test]
    fn test_not_ending_at_exit() {
        let solution = Solution::new(vec![
            square(0, 0, 0, Role::Entrance),
            square(1, 0, 1, Role::Empty),
        ]);
        assert_eq!(solution.validate(), Err(InvalidSolution::MissingExit { found: 1 }));
    }

    #[test]
    fn test_empty() {
        assert_eq!(Solution::default().validate(), Err(InvalidSolution::Empty));
    }

    #[test]
    fn test_diagonal_step() {
        let solution = Solution::new(vec![
            square(0, 0, 0, Role::Entrance),
            square(3, 1, 1, Role::Exit),
        ]);
        let err = solution.validate().unwrap_err();
        assert_eq!(err, InvalidSolution::InvalidCorridor { from: 0, to: 3 });
        assert!(err
            .to_string()
            .starts_with("Two squares next to each other are not a valid corridor"));
    }

    #[test]
    fn test_first_bad_step_is_reported() {
        let solution = Solution::new(vec![
            square(0, 0, 0, Role::Entrance),
            square(1, 0, 1, Role::Empty),
            square(5, 1, 2, Role::Empty),
            square(9, 2, 3, Role::Exit),
        ]);
        assert_eq!(solution.validate(), Err(InvalidSolution::InvalidCorridor { from: 1, to: 5 }));
    }

    #[test]
    fn test_roles_checked_before_corridors() {
        let solution = Solution::new(vec![
            square(0, 0, 0, Role::Empty),
            square(3, 1, 1, Role::Exit),
        ]);
        assert_eq!(solution.validate(), Err(InvalidSolution::MissingEntrance { found: 0 }));
    }

    #[test]
    fn test_long_jump_is_axis_aligned() {
        let solution = Solution::new(vec![
            square(0, 0, 0, Role::Entrance),
            square(4, 0, 4, Role::Exit),
        ]);
        assert_eq!(solution.validate(), Ok(()));
    }

    #[test]
    fn test_single_square_needs_both_roles() {
        let solution = Solution::new(vec![square(0, 0, 0, Role::Entrance)]);
        assert_eq!(solution.validate(), Err(InvalidSolution::MissingExit { found: 0 }));
    }

    #[test]
    fn test_access_and_iteration() {
        let squares = vec![square(0, 0, 0, Role::Entrance), square(1, 0, 1, Role::Exit)];
        let solution: Solution = squares.iter().copied().collect();
        assert_eq!(solution.len(), 2);
        assert!(!solution.is_empty());
        assert_eq!(solution[1].index, 1);
        assert_eq!(solution.get(2), None);
        let first: Vec<&Square> = solution.iter().collect();
        let second: Vec<&Square> = (&solution).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(solution.squares(), squares.as_slice());
    }

    #[test]
    fn test_serde_is_a_plain_list() {
        let solution = Solution::from(vec![square(0, 0, 0, Role::Entrance)]);
        let json = serde_json::to_value(&solution).unwrap();
        assert!(json.is_array());
        let back: Solution = serde_json::from_value(json).unwrap();
        assert_eq!(back, solution);
    }
}
