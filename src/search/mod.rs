mod config;
mod error;
mod frontier;
pub mod heuristics;
mod path;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use config::{ConfigError, SearchConfig};
pub use error::{FrontierError, SearchError};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use heuristics::{Heuristic, HeuristicValue};
pub use path::Path;
pub use problem::{Cost, Problem, Reversible, Successor};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::SearchStatistics;
pub use validate::validate_path;
pub use verbosity::Verbosity;
