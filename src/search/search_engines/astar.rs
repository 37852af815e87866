//! A* search

use crate::search::{
    search_engines::{
        best_first::{best_first_search, Evaluation},
        SearchEngine, SearchOutcome, SearchOutput, TerminationCondition,
    },
    Problem,
};

/// A* orders the frontier by `g + h`. With an admissible heuristic the
/// returned path has minimum cost; states are reopened whenever a strictly
/// cheaper path to them is found, so consistency is not required.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: Problem> SearchEngine<P> for AStar {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        best_first_search(problem, Evaluation::PathCostPlusHeuristic, termination)
    }
}

pub fn search_astar<P: Problem>(problem: &P) -> SearchOutcome<P> {
    AStar::new()
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::{PuzzleHeuristicName, SlidingPuzzle};
    use crate::search::{
        search_engines::{search_ucs, Ucs},
        Cost,
    };
    use crate::test_utils::*;

    #[test]
    fn eight_puzzle_two_moves() {
        let puzzle = SlidingPuzzle::eight_puzzle([1, 2, 3, 4, 5, 6, 0, 7, 8])
            .unwrap()
            .with_heuristic(PuzzleHeuristicName::Manhattan);
        let path = search_astar(&puzzle).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.cost, Cost::from(2.0));
        assert!(puzzle.is_goal(path.end()));
    }

    #[test]
    fn seed_maze_costs_six() {
        let path = search_astar(&seed_maze()).unwrap().into_path().unwrap();
        assert_eq!(path.cost, Cost::from(6.0));
        assert_eq!(path.states.len(), 7);
    }

    #[test]
    fn straight_line_heuristic_finds_cheapest_route() {
        let problem = romania_problem_with_straight_line();
        let path = search_astar(&problem).unwrap().into_path().unwrap();
        assert_eq!(path.cost, search_ucs(&problem).unwrap().into_path().unwrap().cost);
        assert_eq!(problem.names_of(&path.states), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn inconsistent_heuristic_reopens_closed_states() {
        let problem = inconsistent_heuristic_problem();
        let (result, statistics) = AStar::new()
            .search(&problem, &mut TerminationCondition::unlimited())
            .unwrap();
        let path = result.into_path().unwrap();
        assert_eq!(path.cost, Cost::from(4.0));
        assert_eq!(problem.names_of(&path.states), vec!["S", "A", "C", "G"]);
        assert!(statistics.reopened_nodes() >= 1);
    }

    #[test]
    fn heuristic_saves_expansions() {
        let problem = decoy_problem();
        let (_, astar_statistics) = AStar::new()
            .search(&problem, &mut TerminationCondition::unlimited())
            .unwrap();
        let (_, ucs_statistics) = Ucs::new()
            .search(&problem, &mut TerminationCondition::unlimited())
            .unwrap();
        assert!(astar_statistics.expanded_nodes() < ucs_statistics.expanded_nodes());
    }
}
