//! Breadth first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchOutcome, SearchOutput, SearchResult, TerminationCondition,
    },
    Cost, FifoFrontier, Frontier, Path, Problem, SearchError, SearchNodeStatus, SearchSpace,
    SearchStatistics,
};

/// Breadth-first search. States are inserted once and never reopened, and the
/// goal test happens when a state is generated, so the returned path has the
/// fewest actions regardless of step costs.
#[derive(Debug, Default)]
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: Problem> SearchEngine<P> for Bfs {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        let mut statistics = SearchStatistics::new();
        let initial_state = problem.initial_state();
        if problem.is_goal(initial_state) {
            statistics.finalise_search();
            return Ok((
                SearchResult::Success(Path::trivial(initial_state.clone())),
                statistics,
            ));
        }

        let mut queue = FifoFrontier::new();
        let mut search_space: SearchSpace<P::State, P::Action> =
            SearchSpace::new(initial_state.clone());
        let root_id = search_space.get_root_node_ids()[0];
        search_space
            .get_node_mut(root_id)
            .open(Cost::from(0.), Cost::from(0.), 0);
        queue.push(root_id, Cost::from(0.));

        while let Some(node_id) = queue.pop() {
            if let Some(result) = termination.should_terminate(&statistics) {
                statistics.finalise_search();
                return Ok((result, statistics));
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            let depth = node.get_depth();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(node_id).clone();
            let successors = problem.successors(&state).map_err(SearchError::Problem)?;
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if !SearchError::<P::Error>::check_step_cost(&state, successor.cost)? {
                    continue;
                }
                let is_goal = problem.is_goal(&successor.state);
                let child_node = search_space.insert_or_get_node(
                    successor.state,
                    successor.action,
                    successor.cost,
                    node_id,
                );
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                child_node.open(g_value + successor.cost, Cost::from(0.), depth + 1);
                let child_id = child_node.get_node_id();
                if is_goal {
                    statistics.finalise_search();
                    return Ok((
                        SearchResult::Success(search_space.extract_path(child_id)),
                        statistics,
                    ));
                }
                queue.push(child_id, Cost::from(0.));
            }
        }

        statistics.finalise_search();
        Ok((SearchResult::NoSolution, statistics))
    }
}

pub fn search_bfs<P: Problem>(problem: &P) -> SearchOutcome<P> {
    Bfs::new()
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}
