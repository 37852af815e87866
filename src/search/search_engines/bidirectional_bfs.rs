//! Bidirectional breadth-first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchOutcome, SearchOutput, SearchResult, TerminationCondition,
    },
    Cost, FifoFrontier, Frontier, NodeId, Path, Problem, SearchError, SearchNodeStatus,
    SearchSpace, SearchStatistics, Successor,
};
use std::fmt::Debug;
use tracing::debug;

/// Breadth-first search from the initial state and, through the
/// predecessors of a [`Reversible`](crate::search::Reversible) problem, from
/// all goal states at once. The two searches take turns expanding a complete
/// layer, always the side with the smaller frontier, and stop as soon as one
/// of them generates a state the other has reached. Completing whole layers
/// keeps the spliced path as short as the one plain breadth-first search
/// finds.
#[derive(Debug, Default)]
pub struct BidirectionalBfs {}

impl BidirectionalBfs {
    pub fn new() -> Self {
        Self {}
    }
}

/// One direction of the search.
#[derive(Debug)]
struct Side<S: std::hash::Hash + Eq, A> {
    search_space: SearchSpace<S, A>,
    queue: FifoFrontier<NodeId>,
}

impl<S: std::hash::Hash + Eq + Clone + Debug, A: Clone + Debug> Side<S, A> {
    fn new(root_states: Vec<S>) -> Self {
        let mut search_space = SearchSpace::with_roots(root_states);
        let mut queue = FifoFrontier::new();
        for root_id in search_space.get_root_node_ids().to_vec() {
            search_space
                .get_node_mut(root_id)
                .open(Cost::from(0.), Cost::from(0.), 0);
            queue.push(root_id, Cost::from(0.));
        }
        Self {
            search_space,
            queue,
        }
    }

    /// Expand every node of the current layer, stopping at the first
    /// generated state that `other` has already reached.
    fn expand_layer<E, F>(
        &mut self,
        other: &Side<S, A>,
        neighbours: F,
        termination: &mut TerminationCondition,
        statistics: &mut SearchStatistics,
    ) -> Result<LayerOutcome<S, A>, SearchError<E>>
    where
        E: std::error::Error + 'static,
        F: Fn(&S) -> Result<Vec<Successor<S, A>>, E>,
    {
        for _ in 0..self.queue.len() {
            if let Some(result) = termination.should_terminate(statistics) {
                return Ok(LayerOutcome::Terminated(result));
            }
            let Some(node_id) = self.queue.pop() else {
                break;
            };
            let node = self.search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            let depth = node.get_depth();
            statistics.increment_expanded_nodes();

            let state = self.search_space.get_state(node_id).clone();
            let successors = neighbours(&state).map_err(SearchError::Problem)?;
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if !SearchError::<E>::check_step_cost(&state, successor.cost)? {
                    continue;
                }
                let child_node = self.search_space.insert_or_get_node(
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
                let child_state = self.search_space.get_state(child_id);
                if let Some(other_id) = other.search_space.get_node_id(child_state) {
                    return Ok(LayerOutcome::Met {
                        own_id: child_id,
                        other_id,
                    });
                }
                self.queue.push(child_id, Cost::from(0.));
            }
        }
        Ok(LayerOutcome::Continue)
    }
}

enum LayerOutcome<S, A> {
    Continue,
    /// Both sides reached the same state, as `own_id` on the side that was
    /// expanding and as `other_id` on the other side.
    Met { own_id: NodeId, other_id: NodeId },
    Terminated(SearchResult<S, A>),
}

impl<P: Problem> SearchEngine<P> for BidirectionalBfs {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        let reverse = problem
            .reversible()
            .ok_or(SearchError::<P::Error>::NotReversible)?;
        let goal_states = reverse.goal_states();
        if goal_states.is_empty() {
            return Err(SearchError::NotReversible);
        }

        let mut statistics = SearchStatistics::new();
        let initial_state = problem.initial_state();
        if problem.is_goal(initial_state) || goal_states.contains(initial_state) {
            statistics.finalise_search();
            return Ok((
                SearchResult::Success(Path::trivial(initial_state.clone())),
                statistics,
            ));
        }

        let mut forward: Side<P::State, P::Action> = Side::new(vec![initial_state.clone()]);
        let mut backward: Side<P::State, P::Action> = Side::new(goal_states);

        let result = loop {
            if forward.queue.is_empty() || backward.queue.is_empty() {
                break SearchResult::NoSolution;
            }
            let expand_forward = forward.queue.len() <= backward.queue.len();
            let outcome = if expand_forward {
                debug!(layer_size = forward.queue.len(), "expanding forward layer");
                forward.expand_layer(
                    &backward,
                    |state| problem.successors(state),
                    termination,
                    &mut statistics,
                )?
            } else {
                debug!(layer_size = backward.queue.len(), "expanding backward layer");
                backward.expand_layer(
                    &forward,
                    |state| reverse.predecessors(state),
                    termination,
                    &mut statistics,
                )?
            };
            match outcome {
                LayerOutcome::Continue => {}
                LayerOutcome::Terminated(result) => break result,
                LayerOutcome::Met { own_id, other_id } => {
                    let (forward_id, backward_id) = if expand_forward {
                        (own_id, other_id)
                    } else {
                        (other_id, own_id)
                    };
                    debug!(
                        forward_nodes = forward.search_space.len(),
                        backward_nodes = backward.search_space.len(),
                        "frontiers met"
                    );
                    let to_meeting = forward.search_space.extract_path(forward_id);
                    let from_meeting = backward.search_space.extract_path(backward_id).reversed();
                    break SearchResult::Success(to_meeting.concat(from_meeting));
                }
            }
        };

        statistics.finalise_search();
        Ok((result, statistics))
    }
}

pub fn search_bidirectional_bfs<P: Problem>(problem: &P) -> SearchOutcome<P> {
    BidirectionalBfs::new()
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}
