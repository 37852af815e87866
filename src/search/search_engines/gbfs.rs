//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{
        best_first::{best_first_search, Evaluation},
        SearchEngine, SearchOutcome, SearchOutput, TerminationCondition,
    },
    Problem,
};

/// Greedy best-first search orders the frontier by the heuristic alone. Every
/// state is inserted once and never reopened, so paths are not optimal.
#[derive(Debug, Default)]
pub struct Gbfs {}

impl Gbfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: Problem> SearchEngine<P> for Gbfs {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        best_first_search(problem, Evaluation::Heuristic, termination)
    }
}

pub fn search_greedy<P: Problem>(problem: &P) -> SearchOutcome<P> {
    Gbfs::new()
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Cost;
    use crate::test_utils::*;

    #[test]
    fn follows_heuristic_into_expensive_route() {
        // The straight-line table pulls greedy search straight towards D.
        let problem = route_problem_with_table(
            &[("A", "B", 1.0), ("A", "C", 4.0), ("B", "C", 2.0), ("B", "D", 5.0), ("C", "D", 1.0)],
            "A",
            "D",
            &[("A", 3.0), ("B", 1.0), ("C", 2.0), ("D", 0.0)],
        );
        let path = search_greedy(&problem).unwrap().into_path().unwrap();
        assert_eq!(problem.names_of(&path.states), vec!["A", "B", "D"]);
        assert_eq!(path.cost, Cost::from(6.0));
    }

    #[test]
    fn never_reopens() {
        let problem = inconsistent_heuristic_problem();
        let (result, statistics) = Gbfs::new()
            .search(&problem, &mut TerminationCondition::unlimited())
            .unwrap();
        assert!(result.is_success());
        assert_eq!(statistics.reopened_nodes(), 0);
    }

    #[test]
    fn seed_maze_reaches_goal() {
        let maze = seed_maze();
        let path = search_greedy(&maze).unwrap().into_path().unwrap();
        assert_eq!(path.end(), &(3, 3));
    }
}
