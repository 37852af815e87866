//! The [`Problem`] trait is the only thing the search engines know about the
//! state space they explore. States and actions are opaque to the engines:
//! states only need to be hashable so that they can be registered in the
//! search space, and actions are only ever cloned into the returned path.

use crate::search::HeuristicValue;
use std::{fmt::Debug, hash::Hash};

/// Accumulated path cost. Costs are non-negative; `+inf` means unreachable.
pub type Cost = HeuristicValue;

/// One outgoing (or, for [`Reversible::predecessors`], incoming) transition
/// of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub action: A,
    pub state: S,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(action: A, state: S, cost: impl Into<Cost>) -> Self {
        Self {
            action,
            state,
            cost: cost.into(),
        }
    }
}

pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;
    /// Error raised by the problem callbacks. Problems that cannot fail
    /// should use [`std::convert::Infallible`].
    type Error: std::error::Error + 'static;

    fn initial_state(&self) -> &Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// The transitions out of `state`. The order of the returned successors
    /// is the tie-breaker used by every search engine, and calling this twice
    /// on the same state must return the same sequence.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<Successor<Self::State, Self::Action>>, Self::Error>;

    /// Estimate of the remaining cost from `state` to the closest goal. The
    /// default is the zero heuristic, which reduces A* to uniform cost search.
    fn heuristic(&self, _state: &Self::State) -> HeuristicValue {
        HeuristicValue::from(0.)
    }

    /// Problems whose transitions can be walked backwards return themselves
    /// here, which enables bidirectional search.
    fn reversible(&self) -> Option<&dyn Reversible<Self::State, Self::Action, Self::Error>> {
        None
    }
}

pub trait Reversible<S, A, E> {
    /// Every state that satisfies the goal test, used as the roots of the
    /// backward search.
    fn goal_states(&self) -> Vec<S>;

    /// The transitions into `state`. Each returned [`Successor`] holds the
    /// predecessor state, and the action that leads from it to `state`.
    fn predecessors(&self, state: &S) -> Result<Vec<Successor<S, A>>, E>;
}
