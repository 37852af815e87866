//! Path finding on a rectangular grid with walls.

use crate::search::{
    heuristics::{GridCoordinate, GridHeuristicName, Heuristic},
    HeuristicValue, Problem, Reversible, Successor,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, convert::Infallible};
use strum_macros::Display;
use thiserror::Error;

/// A step to a neighbouring cell. Rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Move {
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::UpLeft => (-1, -1),
            Move::UpRight => (-1, 1),
            Move::DownLeft => (1, -1),
            Move::DownRight => (1, 1),
        }
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Move::UpLeft | Move::UpRight | Move::DownLeft | Move::DownRight
        )
    }

    pub fn apply(&self, cell: GridCoordinate) -> GridCoordinate {
        let (d_row, d_col) = self.delta();
        (cell.0 + d_row, cell.1 + d_col)
    }

    pub fn undo(&self, cell: GridCoordinate) -> GridCoordinate {
        let (d_row, d_col) = self.delta();
        (cell.0 - d_row, cell.1 - d_col)
    }
}

const ORTHOGONAL_MOVES: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
const ALL_MOVES: [Move; 8] = [
    Move::Up,
    Move::Down,
    Move::Left,
    Move::Right,
    Move::UpLeft,
    Move::UpRight,
    Move::DownLeft,
    Move::DownRight,
];

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Connectivity {
    #[clap(help = "Up, down, left and right.")]
    Four,
    #[clap(help = "The four orthogonal moves followed by the four diagonals.")]
    Eight,
}

impl Connectivity {
    /// The moves in the order successors are generated.
    pub fn moves(&self) -> &'static [Move] {
        match self {
            Connectivity::Four => &ORTHOGONAL_MOVES,
            Connectivity::Eight => &ALL_MOVES,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeParseError {
    #[error("maze has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unexpected character {character:?} at row {row}, column {col}")]
    UnexpectedCharacter { character: char, row: usize, col: usize },
    #[error("maze must contain exactly one {0:?}")]
    Marker(char),
}

/// A rectangular maze. Cells outside the grid and cells holding a wall
/// cannot be entered; every other move costs one, or `diagonal_cost` for the
/// diagonal moves of an 8-connected maze.
#[derive(Debug)]
pub struct GridMaze {
    rows: i64,
    cols: i64,
    walls: HashSet<GridCoordinate>,
    start: GridCoordinate,
    goal: GridCoordinate,
    connectivity: Connectivity,
    diagonal_cost: f64,
    heuristic: Box<dyn Heuristic<GridCoordinate>>,
}

impl GridMaze {
    pub fn new(rows: i64, cols: i64, start: GridCoordinate, goal: GridCoordinate) -> Self {
        Self {
            rows,
            cols,
            walls: HashSet::new(),
            start,
            goal,
            connectivity: Connectivity::Four,
            diagonal_cost: std::f64::consts::SQRT_2,
            heuristic: GridHeuristicName::Manhattan.create(goal),
        }
    }

    pub fn with_walls(mut self, walls: impl IntoIterator<Item = GridCoordinate>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_diagonal_cost(mut self, diagonal_cost: f64) -> Self {
        self.diagonal_cost = diagonal_cost;
        self
    }

    pub fn with_heuristic(mut self, heuristic: GridHeuristicName) -> Self {
        self.heuristic = heuristic.create(self.goal);
        self
    }

    /// Parse a maze drawn as text, one line per row: `#` is a wall, `.` a
    /// free cell, `S` the start and `G` the goal. Blank lines and leading or
    /// trailing whitespace are ignored.
    pub fn from_text(text: &str) -> Result<Self, MazeParseError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(MazeParseError::Empty);
        };
        let width = first.chars().count();

        let mut walls = HashSet::new();
        let mut starts = vec![];
        let mut goals = vec![];
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeParseError::RaggedRow {
                    row,
                    found,
                    expected: width,
                });
            }
            for (col, character) in line.chars().enumerate() {
                let cell = (row as i64, col as i64);
                match character {
                    '#' => {
                        walls.insert(cell);
                    }
                    '.' => {}
                    'S' => starts.push(cell),
                    'G' => goals.push(cell),
                    _ => {
                        return Err(MazeParseError::UnexpectedCharacter {
                            character,
                            row,
                            col,
                        })
                    }
                }
            }
        }
        let [start] = starts[..] else {
            return Err(MazeParseError::Marker('S'));
        };
        let [goal] = goals[..] else {
            return Err(MazeParseError::Marker('G'));
        };

        Ok(Self::new(lines.len() as i64, width as i64, start, goal).with_walls(walls))
    }

    pub fn rows(&self) -> i64 {
        self.rows
    }

    pub fn cols(&self) -> i64 {
        self.cols
    }

    pub fn goal(&self) -> GridCoordinate {
        self.goal
    }

    pub fn is_free(&self, cell: GridCoordinate) -> bool {
        (0..self.rows).contains(&cell.0)
            && (0..self.cols).contains(&cell.1)
            && !self.walls.contains(&cell)
    }

    fn move_cost(&self, mv: Move) -> f64 {
        if mv.is_diagonal() {
            self.diagonal_cost
        } else {
            1.
        }
    }

    /// Draw the maze in the format accepted by [`GridMaze::from_text`], with
    /// the cells of `path` other than the start and goal marked `*`.
    pub fn render(&self, path: &[GridCoordinate]) -> String {
        let on_path: HashSet<&GridCoordinate> = path.iter().collect();
        let mut text = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = (row, col);
                let character = if cell == self.start {
                    'S'
                } else if cell == self.goal {
                    'G'
                } else if self.walls.contains(&cell) {
                    '#'
                } else if on_path.contains(&cell) {
                    '*'
                } else {
                    '.'
                };
                text.push(character);
            }
            text.push('\n');
        }
        text
    }
}

impl Problem for GridMaze {
    type State = GridCoordinate;
    type Action = Move;
    type Error = Infallible;

    fn initial_state(&self) -> &GridCoordinate {
        &self.start
    }

    fn is_goal(&self, state: &GridCoordinate) -> bool {
        *state == self.goal
    }

    fn successors(
        &self,
        state: &GridCoordinate,
    ) -> Result<Vec<Successor<GridCoordinate, Move>>, Infallible> {
        Ok(self
            .connectivity
            .moves()
            .iter()
            .map(|mv| (*mv, mv.apply(*state)))
            .filter(|(_, next)| self.is_free(*next))
            .map(|(mv, next)| Successor::new(mv, next, self.move_cost(mv)))
            .collect())
    }

    fn heuristic(&self, state: &GridCoordinate) -> HeuristicValue {
        self.heuristic.evaluate(state)
    }

    fn reversible(&self) -> Option<&dyn Reversible<GridCoordinate, Move, Infallible>> {
        Some(self)
    }
}

impl Reversible<GridCoordinate, Move, Infallible> for GridMaze {
    fn goal_states(&self) -> Vec<GridCoordinate> {
        vec![self.goal]
    }

    fn predecessors(
        &self,
        state: &GridCoordinate,
    ) -> Result<Vec<Successor<GridCoordinate, Move>>, Infallible> {
        Ok(self
            .connectivity
            .moves()
            .iter()
            .map(|mv| (*mv, mv.undo(*state)))
            .filter(|(_, previous)| self.is_free(*previous))
            .map(|(mv, previous)| Successor::new(mv, previous, self.move_cost(mv)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn successors_in_move_order_skip_walls() {
        let maze = seed_maze();
        let successors = maze.successors(&(1, 0)).unwrap();
        let moves: Vec<Move> = successors.iter().map(|s| s.action).collect();
        // Right of (1, 0) is the wall at (1, 1).
        assert_eq!(moves, vec![Move::Up, Move::Down]);
        assert_eq!(successors[0].state, (0, 0));
    }

    #[test]
    fn eight_connected_diagonal_cost() {
        let maze = GridMaze::new(3, 3, (1, 1), (0, 0))
            .with_connectivity(Connectivity::Eight)
            .with_diagonal_cost(1.4);
        let successors = maze.successors(&(1, 1)).unwrap();
        assert_eq!(successors.len(), 8);
        assert_eq!(successors[4].action, Move::UpLeft);
        assert_approx_eq!(successors[4].cost.into_inner(), 1.4);
        assert_approx_eq!(successors[0].cost.into_inner(), 1.0);
    }

    #[test]
    fn predecessors_mirror_successors() {
        let maze = seed_maze();
        for cell in [(0, 0), (2, 2), (3, 3), (3, 0)] {
            for predecessor in maze.predecessors(&cell).unwrap() {
                let forward = maze.successors(&predecessor.state).unwrap();
                assert!(forward
                    .iter()
                    .any(|s| s.action == predecessor.action && s.state == cell));
            }
        }
    }

    #[test]
    fn parses_and_renders_text() {
        let text = "S#..\n.#..\n.#..\n...G\n";
        let maze = GridMaze::from_text(text).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (4, 4));
        assert_eq!(maze.initial_state(), &(0, 0));
        assert_eq!(maze.goal(), (3, 3));
        assert!(!maze.is_free((2, 1)));
        assert_eq!(maze.render(&[]), text);
        assert_eq!(
            maze.render(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (3, 3)]),
            "S#..\n*#..\n*#..\n***G\n"
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(GridMaze::from_text(" \n"), Err(MazeParseError::Empty)));
        assert!(matches!(
            GridMaze::from_text("S..\n.G"),
            Err(MazeParseError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        ));
        assert!(matches!(
            GridMaze::from_text("S.x\n..G"),
            Err(MazeParseError::UnexpectedCharacter {
                character: 'x',
                row: 0,
                col: 2
            })
        ));
        assert!(matches!(GridMaze::from_text("S.S\n..G"), Err(MazeParseError::Marker('S'))));
        assert!(matches!(GridMaze::from_text("S..\n..."), Err(MazeParseError::Marker('G'))));
    }

    #[test]
    fn heuristic_follows_selected_metric() {
        let maze = seed_maze().with_heuristic(GridHeuristicName::Chebyshev);
        assert_eq!(maze.heuristic(&(0, 0)), HeuristicValue::from(3.0));
        let maze = maze.with_heuristic(GridHeuristicName::ZeroHeuristic);
        assert_eq!(maze.heuristic(&(0, 0)), HeuristicValue::from(0.0));
    }
}
