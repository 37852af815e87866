//! The loop shared by uniform cost search, greedy best-first search and A*.
//! The three differ only in the key nodes are ordered by and in whether a
//! cheaper path to an already reached state is taken into account.

use crate::search::{
    search_engines::{SearchOutput, SearchResult, TerminationCondition},
    Cost, Frontier, HeuristicValue, PriorityFrontier, Problem, SearchError, SearchNodeStatus,
    SearchSpace, SearchStatistics,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Evaluation {
    /// f = g, uniform cost search
    PathCost,
    /// f = h, greedy best-first search
    Heuristic,
    /// f = g + h, A*
    PathCostPlusHeuristic,
}

impl Evaluation {
    fn key(&self, g: Cost, h: HeuristicValue) -> HeuristicValue {
        match self {
            Evaluation::PathCost => g,
            Evaluation::Heuristic => h,
            Evaluation::PathCostPlusHeuristic => g + h,
        }
    }

    fn uses_heuristic(&self) -> bool {
        !matches!(self, Evaluation::PathCost)
    }

    /// Greedy search keeps the first path it finds to every state. The other
    /// evaluations update a state whenever a strictly cheaper path shows up,
    /// reopening it if it was already expanded.
    fn updates_on_cheaper_path(&self) -> bool {
        !matches!(self, Evaluation::Heuristic)
    }
}

pub(super) fn best_first_search<P: Problem>(
    problem: &P,
    evaluation: Evaluation,
    termination: &mut TerminationCondition,
) -> SearchOutput<P> {
    let mut statistics = SearchStatistics::new();
    let mut frontier = PriorityFrontier::new();
    let mut search_space: SearchSpace<P::State, P::Action> =
        SearchSpace::new(problem.initial_state().clone());

    let root_id = search_space.get_root_node_ids()[0];
    let root_h = evaluate(problem, problem.initial_state(), evaluation, &mut statistics);
    let root_node = search_space.get_node_mut(root_id);
    root_node.open(Cost::from(0.), root_h, 0);
    frontier.push(root_id, evaluation.key(root_node.get_g(), root_h));

    while let Some(node_id) = frontier.pop() {
        if let Some(result) = termination.should_terminate(&statistics) {
            statistics.finalise_search();
            return Ok((result, statistics));
        }

        let node = search_space.get_node_mut(node_id);
        if node.get_status() != SearchNodeStatus::Open {
            continue;
        }
        node.close();
        let g_value = node.get_g();
        let h_value = node.get_h();
        let depth = node.get_depth();
        statistics.increment_expanded_nodes();
        if evaluation.uses_heuristic() {
            statistics.register_heuristic_value(h_value);
        }

        let state = search_space.get_state(node_id).clone();
        if problem.is_goal(&state) {
            statistics.finalise_search();
            return Ok((
                SearchResult::Success(search_space.extract_path(node_id)),
                statistics,
            ));
        }

        let successors = problem.successors(&state).map_err(SearchError::Problem)?;
        statistics.increment_generated_nodes(successors.len());
        for successor in successors {
            if !SearchError::<P::Error>::check_step_cost(&state, successor.cost)? {
                continue;
            }
            let child_g = g_value + successor.cost;

            let Some(child_id) = search_space.get_node_id(&successor.state) else {
                let child_h = evaluate(problem, &successor.state, evaluation, &mut statistics);
                let child_node = search_space.insert_or_get_node(
                    successor.state,
                    successor.action,
                    successor.cost,
                    node_id,
                );
                child_node.open(child_g, child_h, depth + 1);
                frontier.push(child_node.get_node_id(), evaluation.key(child_g, child_h));
                continue;
            };

            if !evaluation.updates_on_cheaper_path() {
                continue;
            }
            let child_node = search_space.get_node_mut(child_id);
            if child_g >= child_node.get_g() {
                continue;
            }
            let previous_status = child_node.get_status();
            child_node.reparent(node_id, successor.action, successor.cost, child_g, depth + 1);
            let key = evaluation.key(child_g, child_node.get_h());
            match previous_status {
                SearchNodeStatus::Open => {
                    if !frontier.lower_key(&child_id, key) {
                        frontier.push(child_id, key);
                    }
                }
                _ => {
                    debug!(node = child_id.id(), "reopening node");
                    statistics.increment_reopened_nodes();
                    frontier.push(child_id, key);
                }
            }
        }
    }

    statistics.finalise_search();
    Ok((SearchResult::NoSolution, statistics))
}

fn evaluate<P: Problem>(
    problem: &P,
    state: &P::State,
    evaluation: Evaluation,
    statistics: &mut SearchStatistics,
) -> HeuristicValue {
    if !evaluation.uses_heuristic() {
        return HeuristicValue::from(0.);
    }
    statistics.increment_evaluated_nodes();
    problem.heuristic(state)
}
