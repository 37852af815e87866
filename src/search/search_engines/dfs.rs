//! Depth-first and depth-limited search.
//!
//! Unlike the graph searches these do not keep a reached map. Each frontier
//! entry is a [`TreeNode`] that shares its ancestors with its siblings, so
//! memory is proportional to the depth of the search times the branching
//! factor, and cycles are only avoided along the current branch.

use crate::search::{
    search_engines::{
        SearchEngine, SearchOutcome, SearchOutput, SearchResult, TerminationCondition,
    },
    Cost, Frontier, LifoFrontier, Path, Problem, SearchError, SearchStatistics,
};
use std::{fmt::Debug, rc::Rc};

/// A node of the search tree explored by the depth-first searches.
#[derive(Debug)]
pub(super) struct TreeNode<S, A> {
    pub(super) state: S,
    parent: Option<Rc<TreeNode<S, A>>>,
    action: Option<A>,
    step_cost: Cost,
    pub(super) g: Cost,
    pub(super) depth: usize,
}

impl<S: Clone + PartialEq, A: Clone> TreeNode<S, A> {
    pub(super) fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            step_cost: Cost::from(0.),
            g: Cost::from(0.),
            depth: 0,
        })
    }

    pub(super) fn child(parent: &Rc<Self>, state: S, action: A, step_cost: Cost) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            step_cost,
            g: parent.g + step_cost,
            depth: parent.depth + 1,
        })
    }

    /// Whether `state` appears on the branch from the root to this node.
    pub(super) fn is_on_branch(&self, state: &S) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            if &node.state == state {
                return true;
            }
            current = node.parent.as_deref();
        }
        false
    }

    pub(super) fn extract_path(&self) -> Path<S, A> {
        let mut states = vec![];
        let mut actions = vec![];
        let mut step_costs = vec![];
        let mut current = Some(self);
        while let Some(node) = current {
            states.push(node.state.clone());
            if let Some(action) = &node.action {
                actions.push(action.clone());
                step_costs.push(node.step_cost);
            }
            current = node.parent.as_deref();
        }
        states.reverse();
        actions.reverse();
        let cost = step_costs
            .into_iter()
            .rev()
            .fold(Cost::from(0.), |total, step_cost| total + step_cost);
        Path::new(states, actions, cost)
    }
}

/// Depth-first search bounded by `limit`; `None` means unbounded. Nodes at
/// depth `limit` are goal tested but not expanded, and the outcome is
/// [`SearchResult::Cutoff`] if any non-goal node was left unexpanded for that
/// reason.
pub(super) fn depth_limited_search<P: Problem>(
    problem: &P,
    limit: Option<usize>,
    termination: &mut TerminationCondition,
    statistics: &mut SearchStatistics,
) -> Result<SearchResult<P::State, P::Action>, SearchError<P::Error>> {
    let mut frontier = LifoFrontier::new();
    frontier.push(
        TreeNode::<P::State, P::Action>::root(problem.initial_state().clone()),
        Cost::from(0.),
    );
    let mut cutoff = false;

    while let Some(node) = frontier.pop() {
        if let Some(result) = termination.should_terminate(statistics) {
            return Ok(result);
        }
        if problem.is_goal(&node.state) {
            return Ok(SearchResult::Success(node.extract_path()));
        }
        if limit.is_some_and(|limit| node.depth >= limit) {
            cutoff = true;
            continue;
        }

        statistics.increment_expanded_nodes();
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
        // Pushed in reverse so that the first successor is popped first.
        for child in children.into_iter().rev() {
            frontier.push(child, Cost::from(0.));
        }
    }

    if cutoff {
        Ok(SearchResult::Cutoff)
    } else {
        Ok(SearchResult::NoSolution)
    }
}

/// Depth-first search without a depth limit. Terminates on finite state
/// spaces thanks to the per-branch cycle check, but may take exponential time
/// and returns whichever path it stumbles on first.
#[derive(Debug, Default)]
pub struct Dfs {}

impl Dfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: Problem> SearchEngine<P> for Dfs {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        let mut statistics = SearchStatistics::new();
        let result = depth_limited_search(problem, None, termination, &mut statistics)?;
        statistics.finalise_search();
        Ok((result, statistics))
    }
}

/// Depth-limited search.
#[derive(Debug)]
pub struct Dls {
    limit: usize,
}

impl Dls {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl<P: Problem> SearchEngine<P> for Dls {
    fn search(&mut self, problem: &P, termination: &mut TerminationCondition) -> SearchOutput<P> {
        let mut statistics = SearchStatistics::new();
        statistics.increment_iterations();
        let result = depth_limited_search(problem, Some(self.limit), termination, &mut statistics)?;
        statistics.finalise_search();
        Ok((result, statistics))
    }
}

pub fn search_dfs<P: Problem>(problem: &P) -> SearchOutcome<P> {
    Dfs::new()
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}

pub fn search_dls<P: Problem>(problem: &P, limit: usize) -> SearchOutcome<P> {
    Dls::new(limit)
        .search(problem, &mut TerminationCondition::unlimited())
        .map(|(result, _)| result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn limit_too_small_is_cutoff() {
        let result = search_dls(&seed_maze(), 5).unwrap();
        assert_eq!(result, SearchResult::Cutoff);
    }

    #[test]
    fn limit_large_enough_finds_path() {
        let path = search_dls(&seed_maze(), 6).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.end(), &(3, 3));
    }

    #[test]
    fn exhausted_space_is_no_solution() {
        // Every branch from A dies out before reaching the limit.
        let result = search_dls(&disconnected_problem(), 10).unwrap();
        assert_eq!(result, SearchResult::NoSolution);
    }

    #[test]
    fn limit_zero_only_tests_start() {
        assert_eq!(
            search_dls(&romania_problem(), 0).unwrap(),
            SearchResult::Cutoff
        );
        let path = search_dls(&start_is_goal_problem(), 0)
            .unwrap()
            .into_path()
            .unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn dfs_follows_first_successor() {
        let problem = romania_problem();
        let path = search_dfs(&problem).unwrap().into_path().unwrap();
        // A -> B -> C -> D: B is A's first successor, and from B the first
        // successor that is not on the branch is C.
        assert_eq!(problem.names_of(&path.states), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn branch_check_detects_ancestors() {
        let root = TreeNode::<u8, char>::root(0);
        let child = TreeNode::child(&root, 1, 'a', 1.0.into());
        let grandchild = TreeNode::child(&child, 2, 'b', 2.0.into());
        assert!(grandchild.is_on_branch(&0));
        assert!(grandchild.is_on_branch(&2));
        assert!(!child.is_on_branch(&2));
        let path = grandchild.extract_path();
        assert_eq!(path.states, vec![0, 1, 2]);
        assert_eq!(path.cost, Cost::from(3.0));
        assert_eq!(grandchild.depth, 2);
    }
}
