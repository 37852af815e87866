//! Uniform cost search

use crate::search::{
    search_engines::{
        best_first::{best_first_search, Evaluation},
        SearchEngine, SearchOutcome, SearchOutput, TerminationCondition,
    },
    Problem,
};

/// Uniform cost search orders the frontier by path cost and ignores the
/// heuristic of the problem. Returns minimum-cost paths for non-negative step
/// costs.
#[derive(Debug, Default)]
pub struct Ucs {}

impl Ucs {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: Problem> SearchEngine<P> for Ucs {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        best_first_search(problem, Evaluation::PathCost, termination)
    }
}

pub fn search_ucs<P: Problem>(problem: &P) -> SearchOutcome<P> {
    Ucs::new()
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::SearchResult, Cost};
    use crate::test_utils::*;

    #[test]
    fn romania_takes_the_cheap_detour() {
        let problem = romania_problem();
        let path = search_ucs(&problem).unwrap().into_path().unwrap();
        assert_eq!(path.cost, Cost::from(4.0));
        assert_eq!(problem.names_of(&path.states), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn zero_cost_edge_is_used() {
        let problem = zero_cost_problem();
        let path = search_ucs(&problem).unwrap().into_path().unwrap();
        assert_eq!(path.cost, Cost::from(1.0));
        assert_eq!(problem.names_of(&path.states), vec!["S", "A", "G"]);
    }

    #[test]
    fn zero_cost_cycle_terminates() {
        let problem = zero_cost_cycle_problem();
        let result = search_ucs(&problem).unwrap();
        assert_eq!(result, SearchResult::NoSolution);
    }

    #[test]
    fn seed_maze_costs_six() {
        let path = search_ucs(&seed_maze()).unwrap().into_path().unwrap();
        assert_eq!(path.cost, Cost::from(6.0));
        assert_eq!(path.states.len(), 7);
    }

    #[test]
    fn cheaper_path_reopens_nothing_but_updates_parent() {
        // A-C is discovered first at cost 10 and later improved via B.
        let problem = route_problem(
            &[("A", "C", 10.0), ("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)],
            "A",
            "D",
        );
        let (result, statistics) = Ucs::new()
            .search(&problem, &mut TerminationCondition::unlimited())
            .unwrap();
        let path = result.into_path().unwrap();
        assert_eq!(path.cost, Cost::from(3.0));
        assert_eq!(problem.names_of(&path.states), vec!["A", "B", "C", "D"]);
        assert_eq!(statistics.reopened_nodes(), 0);
    }
}
