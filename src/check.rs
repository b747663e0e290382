//! Vérification d'un labyrinthe (et d'un chemin) décrit en JSON.

use std::io::{self, Read};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{InvalidMaze, InvalidSolution, Maze, Policy, Solution, Square};

/// Document d'entrée : les cases du labyrinthe et, en option, un chemin
/// donné par les index de ses cases.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub policy: Policy,
    pub squares: Vec<Square>,
    #[serde(default)]
    pub solution: Option<Vec<usize>>,
    /// Vérifie aussi les pas unitaires et les murs du chemin.
    #[serde(default)]
    pub strict_solution: bool,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid maze: {0}")]
    Maze(#[from] InvalidMaze),
    #[error("invalid solution: {0}")]
    Solution(#[from] InvalidSolution),
}

/// Résultat renvoyé sur une ligne par le binaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Code de sortie du binaire quand le document est accepté.
pub const EXIT_VALID: u8 = 0;
/// Code de sortie du binaire quand le labyrinthe ou le chemin est refusé.
pub const EXIT_REJECTED: u8 = 1;

impl Verdict {
    pub fn exit_status(&self) -> u8 {
        if self.valid {
            EXIT_VALID
        } else {
            EXIT_REJECTED
        }
    }
}

pub fn parse_request(msg: &str) -> Result<CheckRequest, serde_json::Error> {
    serde_json::from_str(msg)
}

/// Construit le labyrinthe puis, si demandé, valide le chemin.
pub fn run(request: CheckRequest) -> Result<(Maze, Option<Solution>), CheckError> {
    let maze = Maze::with_policy(request.squares, request.policy)?;

    let solution = match request.solution {
        Some(indices) => {
            let squares = indices
                .into_iter()
                .map(|index| {
                    maze.get(index)
                        .copied()
                        .ok_or(InvalidSolution::NotInMaze { index })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let solution = Solution::new(squares);
            if request.strict_solution {
                solution.validate_against(&maze)?;
            } else {
                solution.validate()?;
            }
            Some(solution)
        }
        None => None,
    };

    Ok((maze, solution))
}

pub fn check(request: CheckRequest) -> Verdict {
    match run(request) {
        Ok((maze, solution)) => Verdict {
            valid: true,
            width: Some(maze.width()),
            height: Some(maze.height()),
            solution_length: solution.map(|solution| solution.len()),
            error: None,
        },
        Err(err) => Verdict {
            valid: false,
            width: None,
            height: None,
            solution_length: None,
            error: Some(err.to_string()),
        },
    }
}

/// Lit le document depuis `path`, ou depuis l'entrée standard sans chemin.
pub fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read standard input")?;
            Ok(buffer)
        }
    }
}

/// Analyse et vérifie un document, renvoie le verdict et le code de sortie.
pub fn verify(input: &str) -> anyhow::Result<(Verdict, u8)> {
    let request = parse_request(input).context("malformed maze document")?;
    log::debug!("Checking maze of {} squares", request.squares.len());
    let verdict = check(request);
    let status = verdict.exit_status();
    Ok((verdict, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = r#"{
        "squares": [
            {"index": 0, "row": 0, "column": 0, "role": "entrance", "border": "EAST"},
            {"index": 1, "row": 0, "column": 1, "border": "EAST | WEST"},
            {"index": 2, "row": 0, "column": 2, "role": "exit", "border": "WEST"}
        ],
        "solution": [0, 1, 2]
    }"#;

    #[test]
    fn test_parse_request() {
        let request = parse_request(CORRIDOR).unwrap();
        assert_eq!(request.policy, Policy::Strict);
        assert_eq!(request.squares.len(), 3);
        assert_eq!(request.solution, Some(vec![0, 1, 2]));
        assert!(!request.strict_solution);
    }

    #[test]
    fn test_check_valid() {
        let mut request = parse_request(CORRIDOR).unwrap();
        request.strict_solution = true;
        let verdict = check(request);
        assert_eq!(
            verdict,
            Verdict {
                valid: true,
                width: Some(3),
                height: Some(1),
                solution_length: Some(3),
                error: None,
            }
        );
    }

    #[test]
    fn test_check_exit_first() {
        let mut request = parse_request(CORRIDOR).unwrap();
        request.solution = Some(vec![2, 1, 0]);
        let verdict = check(request);
        assert!(!verdict.valid);
        assert!(verdict.error.unwrap().starts_with("invalid solution"));
    }

    #[test]
    fn test_check_unknown_square() {
        let mut request = parse_request(CORRIDOR).unwrap();
        request.solution = Some(vec![0, 7]);
        let err = run(request.clone()).unwrap_err();
        assert!(matches!(err, CheckError::Solution(InvalidSolution::NotInMaze { index: 7 })));
        let verdict = check(request);
        assert!(verdict.error.unwrap().starts_with("invalid solution"));
    }

    #[test]
    fn test_huge_coordinate_gives_a_verdict() {
        let huge = r#"{"policy": "grid_only", "squares": [
            {"index": 0, "row": 0, "column": 18446744073709551615}
        ]}"#;
        let request = parse_request(huge).unwrap();
        let verdict = check(request);
        assert!(!verdict.valid);
        assert!(verdict.error.unwrap().contains("not rectangular"));
    }

    #[test]
    fn test_verify_exit_status() {
        let (verdict, status) = verify(CORRIDOR).unwrap();
        assert!(verdict.valid);
        assert_eq!(status, EXIT_VALID);

        let rejected = CORRIDOR.replace("[0, 1, 2]", "[2, 1, 0]");
        let (verdict, status) = verify(&rejected).unwrap();
        assert!(!verdict.valid);
        assert_eq!(status, EXIT_REJECTED);
    }

    #[test]
    fn test_verify_malformed_document() {
        let err = verify("{ not json").unwrap_err();
        assert_eq!(err.to_string(), "malformed maze document");
    }

    #[test]
    fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!("rusty-maze-{}.json", std::process::id()));
        std::fs::write(&path, CORRIDOR).unwrap();
        let input = read_input(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(input, CORRIDOR);
        assert!(read_input(Some("/nonexistent/rusty-maze.json")).is_err());
    }

    #[test]
    fn test_check_invalid_maze() {
        let request =
            parse_request(r#"{"squares": [{"index": 0, "row": 0, "column": 0}]}"#).unwrap();
        let verdict = check(request);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.error.as_deref(),
            Some("invalid maze: Maze does not have exactly one entrance (found 0)")
        );
    }

    #[test]
    fn test_grid_only_without_solution() {
        let request = parse_request(
            r#"{"policy": "grid_only", "squares": [{"index": 0, "row": 0, "column": 0}]}"#,
        )
        .unwrap();
        let verdict = check(request);
        assert!(verdict.valid);
        assert_eq!(verdict.solution_length, None);
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"{"valid":true,"width":1,"height":1}"#);
    }
}
