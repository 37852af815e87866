use crate::search::{Cost, Path, SearchNode};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// Index of a node in a [`SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchSpace`] is a data structure for managing the states and nodes
/// during a search. Each distinct state gets exactly one node, so the map
/// from states to nodes doubles as the reached map of the search: the node
/// always holds the best known g-value of its state.
#[derive(Debug)]
pub struct SearchSpace<S: Hash + Eq, A> {
    root_node_ids: Vec<NodeId>,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_states: HashMap<S, NodeId>,
}

impl<S: Hash + Eq + Clone, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        Self::with_roots(vec![initial_state])
    }

    /// Create a search space with several roots, e.g. all goal states for a
    /// backward search. Duplicate roots are registered once.
    pub fn with_roots(root_states: Vec<S>) -> Self {
        let mut search_space = Self {
            root_node_ids: Vec::new(),
            nodes: SegVec::new(),
            states: SegVec::new(),
            registered_states: HashMap::new(),
        };
        for state in root_states {
            if search_space.registered_states.contains_key(&state) {
                continue;
            }
            let node_id = NodeId(search_space.nodes.len());
            search_space.register(state, SearchNode::new_without_parent(node_id));
            search_space.root_node_ids.push(node_id);
        }
        search_space
    }

    fn register(&mut self, state: S, node: SearchNode<A>) {
        let node_id = node.get_node_id();
        self.registered_states.insert(state.clone(), node_id);
        self.states.push(state);
        self.nodes.push(node);
    }

    /// Return the node of `state`, creating a new (not yet opened) node with
    /// the given parent if the state has not been reached before. Callers
    /// distinguish the two cases by the status of the returned node.
    pub fn insert_or_get_node(
        &mut self,
        state: S,
        action: A,
        step_cost: Cost,
        parent_id: NodeId,
    ) -> &mut SearchNode<A> {
        match self.registered_states.get(&state) {
            Some(&node_id) => self.get_node_mut(node_id),
            None => {
                let node_id = NodeId(self.nodes.len());
                self.register(
                    state,
                    SearchNode::new_with_parent(node_id, parent_id, action, step_cost),
                );
                self.get_node_mut(node_id)
            }
        }
    }

    /// Walk the parent chain from `goal_id` back to a root. The cost of the
    /// path is the sum of the step costs along the chain.
    pub fn extract_path(&self, goal_id: NodeId) -> Path<S, A> {
        let mut states = vec![];
        let mut actions = vec![];
        let mut step_costs = vec![];
        let mut current_node = self.get_node(goal_id);
        states.push(self.get_state(goal_id).clone());
        while NO_NODE != current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                actions.push(action.clone());
            }
            step_costs.push(current_node.get_step_cost());
            let parent_id = current_node.get_parent_id();
            states.push(self.get_state(parent_id).clone());
            current_node = self.get_node(parent_id);
        }
        states.reverse();
        actions.reverse();
        let cost = step_costs
            .into_iter()
            .rev()
            .fold(Cost::from(0.), |total, step_cost| total + step_cost);
        Path::new(states, actions, cost)
    }

    #[inline(always)]
    pub fn get_root_node_ids(&self) -> &[NodeId] {
        &self.root_node_ids
    }

    #[inline(always)]
    pub fn get_node_id(&self, state: &S) -> Option<NodeId> {
        self.registered_states.get(state).copied()
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.registered_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_states.is_empty()
    }
}
