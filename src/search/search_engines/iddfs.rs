//! Iterative deepening depth-first search

use crate::search::{
    search_engines::{
        dfs::depth_limited_search, SearchEngine, SearchOutcome, SearchOutput, SearchResult,
        TerminationCondition,
    },
    Problem, SearchStatistics,
};
use tracing::debug;

/// Runs depth-limited search with limits 0, 1, 2, ... until a path is found
/// or an iteration exhausts the space without cutting anything off. If
/// `max_limit` is set and the iteration with that limit is still cut off, the
/// search gives up with [`SearchResult::NoSolution`].
#[derive(Debug, Default)]
pub struct Iddfs {
    max_limit: Option<usize>,
}

impl Iddfs {
    pub fn new(max_limit: Option<usize>) -> Self {
        Self { max_limit }
    }
}

impl<P: Problem> SearchEngine<P> for Iddfs {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        let mut statistics = SearchStatistics::new();
        let mut limit = 0;
        let result = loop {
            debug!(limit, "starting depth-limited iteration");
            statistics.increment_iterations();
            match depth_limited_search(problem, Some(limit), termination, &mut statistics)? {
                SearchResult::Cutoff => {
                    if self.max_limit.is_some_and(|max_limit| limit >= max_limit) {
                        debug!(limit, "maximum depth limit reached, giving up");
                        break SearchResult::NoSolution;
                    }
                    limit += 1;
                }
                result => break result,
            }
        };
        statistics.finalise_search();
        Ok((result, statistics))
    }
}

pub fn search_iddfs<P: Problem>(problem: &P, max_limit: Option<usize>) -> SearchOutcome<P> {
    Iddfs::new(max_limit)
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::SlidingPuzzle;
    use crate::search::{search_engines::search_bfs, Cost};
    use crate::test_utils::*;

    #[test]
    fn seed_maze_matches_bfs_length() {
        let maze = seed_maze();
        let path = search_iddfs(&maze, None).unwrap().into_path().unwrap();
        let bfs_path = search_bfs(&maze).unwrap().into_path().unwrap();
        assert_eq!(path.len(), bfs_path.len());
        assert_eq!(path.cost, Cost::from(6.0));
    }

    #[test]
    fn iterations_count_limits_tried() {
        let (result, statistics) = Iddfs::new(None)
            .search(&seed_maze(), &mut TerminationCondition::unlimited())
            .unwrap();
        assert!(result.is_success());
        // Limits 0 through 6.
        assert_eq!(statistics.iterations(), 7);
    }

    #[test]
    fn max_limit_reached_is_no_solution() {
        let (result, statistics) = Iddfs::new(Some(3))
            .search(&seed_maze(), &mut TerminationCondition::unlimited())
            .unwrap();
        assert_eq!(result, SearchResult::NoSolution);
        // Limits 0 through 3.
        assert_eq!(statistics.iterations(), 4);
    }

    #[test]
    fn max_limit_at_goal_depth_finds_path() {
        let path = search_iddfs(&seed_maze(), Some(6))
            .unwrap()
            .into_path()
            .unwrap();
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn exhausted_space_stops_deepening() {
        let result = search_iddfs(&disconnected_problem(), None).unwrap();
        assert_eq!(result, SearchResult::NoSolution);
    }

    #[test]
    fn eight_puzzle_two_moves() {
        let puzzle = SlidingPuzzle::eight_puzzle([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        let path = search_iddfs(&puzzle, None).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 2);
    }
}
