use crate::search::{
    search_engines::{
        AStar, BidirectionalBfs, Bfs, Dfs, Dls, Gbfs, IdaStar, Iddfs, TerminationCondition, Ucs,
    },
    Path, Problem, SearchError, SearchStatistics,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIs, EnumIter};

#[derive(Debug, Clone, PartialEq, EnumIs)]
pub enum SearchResult<S, A> {
    /// The search found a path to a goal
    Success(Path<S, A>),
    /// The frontier was exhausted without reaching a goal
    NoSolution,
    /// A depth-limited search hit its limit before exhausting the space
    Cutoff,
    /// The search expanded as many nodes as it was allowed to
    NodeBudgetExhausted,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

impl<S, A> SearchResult<S, A> {
    pub fn path(&self) -> Option<&Path<S, A>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<S, A>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }
}

pub type SearchOutput<P> = Result<
    (
        SearchResult<<P as Problem>::State, <P as Problem>::Action>,
        SearchStatistics,
    ),
    SearchError<<P as Problem>::Error>,
>;

pub type SearchOutcome<P> = Result<
    SearchResult<<P as Problem>::State, <P as Problem>::Action>,
    SearchError<<P as Problem>::Error>,
>;

pub trait SearchEngine<P: Problem> {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P>;
}

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search, optimal in the number of actions.")]
    Bfs,
    #[clap(help = "Uniform cost search, optimal in path cost.")]
    Ucs,
    #[clap(help = "Depth-first search without a depth limit.")]
    Dfs,
    #[clap(help = "Depth-limited search, requires a depth limit.")]
    Dls,
    #[clap(help = "Iterative deepening depth-first search.")]
    Iddfs,
    #[clap(help = "Greedy best-first search on the heuristic alone.")]
    Gbfs,
    #[clap(name = "astar", help = "A* search, optimal with an admissible heuristic.")]
    #[serde(rename = "astar")]
    #[strum(serialize = "astar")]
    AStar,
    #[clap(name = "idastar", help = "Iterative deepening A*.")]
    #[serde(rename = "idastar")]
    #[strum(serialize = "idastar")]
    IdaStar,
    #[clap(help = "Bidirectional breadth-first search, requires a reversible problem.")]
    BidirectionalBfs,
}

impl SearchEngineName {
    /// Create the named engine. `depth_limit` is only used by depth-limited
    /// search, where it defaults to zero, and by iterative deepening, where
    /// it caps the deepest iteration.
    pub fn create<P: Problem>(&self, depth_limit: Option<usize>) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::Bfs => Box::new(Bfs::new()),
            SearchEngineName::Ucs => Box::new(Ucs::new()),
            SearchEngineName::Dfs => Box::new(Dfs::new()),
            SearchEngineName::Dls => Box::new(Dls::new(depth_limit.unwrap_or(0))),
            SearchEngineName::Iddfs => Box::new(Iddfs::new(depth_limit)),
            SearchEngineName::Gbfs => Box::new(Gbfs::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
            SearchEngineName::IdaStar => Box::new(IdaStar::new()),
            SearchEngineName::BidirectionalBfs => Box::new(BidirectionalBfs::new()),
        }
    }

    /// Whether the engine returns minimum-cost paths, given an admissible
    /// heuristic where one is used.
    pub fn is_cost_optimal(&self) -> bool {
        matches!(
            self,
            SearchEngineName::Ucs | SearchEngineName::AStar | SearchEngineName::IdaStar
        )
    }

    /// Whether the engine returns paths with the fewest actions.
    pub fn is_depth_optimal(&self) -> bool {
        matches!(
            self,
            SearchEngineName::Bfs | SearchEngineName::Iddfs | SearchEngineName::BidirectionalBfs
        )
    }
}
