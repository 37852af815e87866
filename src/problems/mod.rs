//! Concrete search problems for running and testing the search engines.

mod grid;
mod route_map;
mod sliding_puzzle;

pub use grid::{Connectivity, GridMaze, MazeParseError, Move};
pub use route_map::{Road, RouteMap, RouteMapConfig, RouteMapError};
pub use sliding_puzzle::{Board, PuzzleError, PuzzleHeuristicName, SlidingPuzzle};
