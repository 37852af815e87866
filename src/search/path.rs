//! A path is the answer of a successful search: the visited states, the
//! actions between them and the total cost. This module provides the
//! [`Path`] struct.

use crate::search::Cost;
use itertools::Itertools;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Path<S, A> {
    /// States from the initial state to the goal, inclusive.
    pub states: Vec<S>,
    /// `actions[i]` leads from `states[i]` to `states[i + 1]`.
    pub actions: Vec<A>,
    pub cost: Cost,
}

impl<S, A> Path<S, A> {
    pub fn new(states: Vec<S>, actions: Vec<A>, cost: Cost) -> Self {
        debug_assert_eq!(states.len(), actions.len() + 1);
        Self {
            states,
            actions,
            cost,
        }
    }

    /// The path consisting of the initial state alone.
    pub fn trivial(state: S) -> Self {
        Self::new(vec![state], vec![], Cost::from(0.))
    }

    /// Number of actions on the path.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn start(&self) -> &S {
        &self.states[0]
    }

    pub fn end(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    /// Append `other`, which must start at the state this path ends in.
    pub fn concat(mut self, other: Path<S, A>) -> Self
    where
        S: PartialEq,
    {
        debug_assert!(self.end() == other.start());
        self.states.extend(other.states.into_iter().skip(1));
        self.actions.extend(other.actions);
        self.cost = self.cost + other.cost;
        self
    }

    /// Reverse the direction of the path. Actions are kept as they are, so
    /// this is only meaningful for paths whose actions were recorded in the
    /// opposite direction, as in a backward search.
    pub fn reversed(mut self) -> Self {
        self.states.reverse();
        self.actions.reverse();
        self
    }
}

impl<S: Debug, A: Debug> Path<S, A> {
    /// Render the path one transition per line, followed by the cost.
    pub fn to_pretty_string(&self) -> String {
        let mut lines = vec![format!("{:?}", self.states[0])];
        lines.extend(
            self.actions
                .iter()
                .zip(self.states.iter().skip(1))
                .map(|(action, state)| format!("  --{:?}--> {:?}", action, state)),
        );
        lines.push(format!("cost = {}", self.cost));
        lines.into_iter().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_splices_at_shared_state() {
        let left = Path::new(vec![1, 2], vec!['a'], 1.0.into());
        let right = Path::new(vec![2, 3, 4], vec!['b', 'c'], 2.5.into());
        let path = left.concat(right);
        assert_eq!(path.states, vec![1, 2, 3, 4]);
        assert_eq!(path.actions, vec!['a', 'b', 'c']);
        assert_eq!(path.cost, Cost::from(3.5));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn trivial_path_has_no_actions() {
        let path: Path<u8, ()> = Path::trivial(7);
        assert!(path.is_empty());
        assert_eq!(path.start(), path.end());
        assert_eq!(path.cost, Cost::from(0.));
    }

    #[test]
    fn pretty_string_lists_transitions() {
        let path = Path::new(vec!["A", "B"], vec!["go"], 1.0.into());
        assert_eq!(
            path.to_pretty_string(),
            "\"A\"\n  --\"go\"--> \"B\"\ncost = 1"
        );
    }
}
