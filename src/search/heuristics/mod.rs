mod chebyshev;
mod euclidean;
mod grid_heuristic;
mod heuristic;
mod manhattan;
mod straight_line;
mod zero_heuristic;

pub use chebyshev::chebyshev_distance;
pub use euclidean::euclidean_distance;
pub use grid_heuristic::GridHeuristic;
pub use heuristic::{GridCoordinate, GridHeuristicName, Heuristic, HeuristicValue};
pub use manhattan::manhattan_distance;
pub use straight_line::StraightLineTable;
pub use zero_heuristic::ZeroHeuristic;
