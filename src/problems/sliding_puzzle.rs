//! The n×n sliding tile puzzle.

use crate::problems::Move;
use crate::search::{HeuristicValue, Problem, Reversible, Successor};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use thiserror::Error;

/// Tiles in row-major order, `0` being the blank.
pub type Board = Vec<u8>;

const BLANK: u8 = 0;
const BLANK_MOVES: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("a {size}x{size} puzzle has {expected} tiles, got {found}")]
    WrongTileCount {
        size: usize,
        expected: usize,
        found: usize,
    },
    #[error("tiles must be a permutation of 0..{0}")]
    NotAPermutation(usize),
    #[error("puzzle size must be between 2 and 15, got {0}")]
    UnsupportedSize(usize),
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleHeuristicName {
    #[clap(help = "The zero heuristic.")]
    Zero,
    #[clap(help = "Number of tiles not in their goal position.")]
    MisplacedTiles,
    #[clap(help = "Sum of the Manhattan distances of the tiles to their goal positions.")]
    Manhattan,
}

/// The blank moves Up, Down, Left or Right at cost one, swapping places with
/// the tile there. The goal has the tiles in ascending order with the blank
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingPuzzle {
    size: usize,
    initial: Board,
    goal: Board,
    heuristic: PuzzleHeuristicName,
}

impl SlidingPuzzle {
    pub fn new(size: usize, tiles: Board) -> Result<Self, PuzzleError> {
        if !(2..=15).contains(&size) {
            return Err(PuzzleError::UnsupportedSize(size));
        }
        let expected = size * size;
        if tiles.len() != expected {
            return Err(PuzzleError::WrongTileCount {
                size,
                expected,
                found: tiles.len(),
            });
        }
        if !tiles.iter().sorted().enumerate().all(|(i, tile)| *tile as usize == i) {
            return Err(PuzzleError::NotAPermutation(expected));
        }
        let goal = (1..expected as u8).chain([BLANK]).collect();
        Ok(Self {
            size,
            initial: tiles,
            goal,
            heuristic: PuzzleHeuristicName::Zero,
        })
    }

    pub fn eight_puzzle(tiles: [u8; 9]) -> Result<Self, PuzzleError> {
        Self::new(3, tiles.to_vec())
    }

    pub fn with_heuristic(mut self, heuristic: PuzzleHeuristicName) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Half of all boards cannot reach the goal. For odd sizes the number of
    /// inversions must be even; for even sizes the number of inversions plus
    /// the row of the blank must be odd.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self
            .initial
            .iter()
            .copied()
            .filter(|tile| *tile != BLANK)
            .collect();
        let inversions = tiles
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank_position(&self.initial).0) % 2 == 1
        }
    }

    fn blank_position(&self, board: &Board) -> (usize, usize) {
        let index = board.iter().position(|tile| *tile == BLANK).unwrap_or(0);
        (index / self.size, index % self.size)
    }

    fn neighbour(&self, (row, col): (usize, usize), mv: Move) -> Option<usize> {
        let (d_row, d_col) = mv.delta();
        let row = row.checked_add_signed(d_row as isize)?;
        let col = col.checked_add_signed(d_col as isize)?;
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }

    fn slide(&self, board: &Board, mv: Move) -> Option<Board> {
        let blank = self.blank_position(board);
        let target = self.neighbour(blank, mv)?;
        let mut next = board.clone();
        next.swap(blank.0 * self.size + blank.1, target);
        Some(next)
    }

    fn misplaced_tiles(&self, board: &Board) -> usize {
        board
            .iter()
            .zip(&self.goal)
            .filter(|(tile, goal_tile)| **tile != BLANK && tile != goal_tile)
            .count()
    }

    fn manhattan(&self, board: &Board) -> usize {
        board
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile != BLANK)
            .map(|(index, tile)| {
                let goal_index = *tile as usize - 1;
                (index / self.size).abs_diff(goal_index / self.size)
                    + (index % self.size).abs_diff(goal_index % self.size)
            })
            .sum()
    }

    pub fn to_pretty_string(&self, board: &Board) -> String {
        board
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|tile| match *tile {
                        BLANK => " .".to_string(),
                        tile => format!("{:2}", tile),
                    })
                    .join(" ")
            })
            .join("\n")
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;
    type Action = Move;
    type Error = Infallible;

    fn initial_state(&self) -> &Board {
        &self.initial
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Board) -> Result<Vec<Successor<Board, Move>>, Infallible> {
        Ok(BLANK_MOVES
            .iter()
            .filter_map(|mv| self.slide(state, *mv).map(|next| Successor::new(*mv, next, 1.)))
            .collect())
    }

    fn heuristic(&self, state: &Board) -> HeuristicValue {
        let estimate = match self.heuristic {
            PuzzleHeuristicName::Zero => 0,
            PuzzleHeuristicName::MisplacedTiles => self.misplaced_tiles(state),
            PuzzleHeuristicName::Manhattan => self.manhattan(state),
        };
        HeuristicValue::from(estimate as f64)
    }

    fn reversible(&self) -> Option<&dyn Reversible<Board, Move, Infallible>> {
        Some(self)
    }
}

impl Reversible<Board, Move, Infallible> for SlidingPuzzle {
    fn goal_states(&self) -> Vec<Board> {
        vec![self.goal.clone()]
    }

    /// Moving the blank by `mv` from the predecessor leads back here, so the
    /// predecessor is found by sliding the blank the opposite way.
    fn predecessors(&self, state: &Board) -> Result<Vec<Successor<Board, Move>>, Infallible> {
        let blank = self.blank_position(state);
        Ok(BLANK_MOVES
            .iter()
            .filter_map(|mv| {
                let (d_row, d_col) = mv.delta();
                let row = blank.0.checked_add_signed(-d_row as isize)?;
                let col = blank.1.checked_add_signed(-d_col as isize)?;
                if row >= self.size || col >= self.size {
                    return None;
                }
                let mut previous = state.clone();
                previous.swap(blank.0 * self.size + blank.1, row * self.size + col);
                Some(Successor::new(*mv, previous, 1.))
            })
            .collect())
    }
}
