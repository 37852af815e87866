mod astar;
mod best_first;
mod bfs;
mod bidirectional_bfs;
mod dfs;
mod gbfs;
mod idastar;
mod iddfs;
mod search_engine;
mod termination_condition;
mod ucs;


pub use astar::{search_astar, AStar};
pub use bfs::{search_bfs, Bfs};
pub use bidirectional_bfs::{search_bidirectional_bfs, BidirectionalBfs};
pub use dfs::{search_dfs, search_dls, Dfs, Dls};
pub use gbfs::{search_greedy, Gbfs};
pub use idastar::{search_idastar, IdaStar};
pub use iddfs::{search_iddfs, Iddfs};
pub use search_engine::{SearchEngine, SearchEngineName, SearchOutcome, SearchOutput, SearchResult};
pub use termination_condition::TerminationCondition;
pub use ucs::{search_ucs, Ucs};
