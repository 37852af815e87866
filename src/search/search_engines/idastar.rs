//! Iterative deepening A*

use crate::search::{
    search_engines::{
        dfs::TreeNode, SearchEngine, SearchOutcome, SearchOutput, SearchResult,
        TerminationCondition,
    },
    Cost, Frontier, HeuristicValue, LifoFrontier, Problem, SearchError, SearchStatistics,
};
use std::cmp::min;
use tracing::debug;

/// Repeated depth-first searches bounded by `f = g + h`. The first bound is
/// the heuristic value of the initial state; each following bound is the
/// smallest f-value that exceeded the previous one. Memory stays
/// proportional to the depth of the search, at the price of re-expanding
/// nodes in every iteration.
#[derive(Debug, Default)]
pub struct IdaStar {}

impl IdaStar {
    pub fn new() -> Self {
        Self {}
    }
}

/// Outcome of a single bounded iteration.
enum Iteration<S, A> {
    Done(SearchResult<S, A>),
    /// Nothing found within the bound; holds the smallest f-value that
    /// exceeded it, infinite if none did.
    Exceeded(HeuristicValue),
}

fn bounded_search<P: Problem>(
    problem: &P,
    bound: HeuristicValue,
    termination: &mut TerminationCondition,
    statistics: &mut SearchStatistics,
) -> Result<Iteration<P::State, P::Action>, SearchError<P::Error>> {
    let mut frontier = LifoFrontier::new();
    frontier.push(
        TreeNode::<P::State, P::Action>::root(problem.initial_state().clone()),
        Cost::from(0.),
    );
    let mut next_bound = HeuristicValue::from(f64::INFINITY);

    while let Some(node) = frontier.pop() {
        if let Some(result) = termination.should_terminate(statistics) {
            return Ok(Iteration::Done(result));
        }
        let h_value = problem.heuristic(&node.state);
        statistics.increment_evaluated_nodes();
        let f_value = node.g + h_value;
        if f_value > bound {
            next_bound = min(next_bound, f_value);
            continue;
        }
        if problem.is_goal(&node.state) {
            return Ok(Iteration::Done(SearchResult::Success(node.extract_path())));
        }

        statistics.increment_expanded_nodes();
        statistics.register_heuristic_value(h_value);
        let successors = problem
            .successors(&node.state)
            .map_err(SearchError::Problem)?;
        statistics.increment_generated_nodes(successors.len());
        let mut children = Vec::with_capacity(successors.len());
        for successor in successors {
            if !SearchError::<P::Error>::check_step_cost(&node.state, successor.cost)? {
                continue;
            }
            if node.is_on_branch(&successor.state) {
                continue;
            }
            children.push(TreeNode::child(
                &node,
                successor.state,
                successor.action,
                successor.cost,
            ));
        }
        for child in children.into_iter().rev() {
            frontier.push(child, Cost::from(0.));
        }
    }

    Ok(Iteration::Exceeded(next_bound))
}

impl<P: Problem> SearchEngine<P> for IdaStar {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        let mut statistics = SearchStatistics::new();
        let mut bound = problem.heuristic(problem.initial_state());
        let result = loop {
            debug!(bound = bound.into_inner(), "starting bounded iteration");
            statistics.increment_iterations();
            match bounded_search(problem, bound, termination, &mut statistics)? {
                Iteration::Done(result) => break result,
                Iteration::Exceeded(next_bound) if next_bound.is_infinite() => {
                    break SearchResult::NoSolution
                }
                Iteration::Exceeded(next_bound) => bound = next_bound,
            }
        };
        statistics.finalise_search();
        Ok((result, statistics))
    }
}

pub fn search_idastar<P: Problem>(problem: &P) -> SearchOutcome<P> {
    IdaStar::new()
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}
