use crate::search::{Cost, HeuristicValue, NodeId, NO_NODE};
use ordered_float::Float;

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
}

/// A [`SearchNode`] is a node in the search space. It contains information
/// about the state specific to the search, such as path cost and parent node.
/// The state itself lives next to the node in the
/// [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Position of the node in the search space
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, different depending on the search algorithm.
    f: HeuristicValue,
    /// G-value of the node, i.e. the best known cost to reach this node.
    g: Cost,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. In search algorithms that only care about the g-value, this
    /// is zero.
    h: HeuristicValue,
    /// Number of actions from the root along the current parent chain
    depth: usize,
    /// Cost of the transition from the parent
    step_cost: Cost,
    /// Action that led to this node, `None` for roots
    action: Option<A>,
    /// Parent node
    parent_id: NodeId,
}

impl<A> SearchNode<A> {
    /// Create a new search node with no parent. This should only be used for
    /// the roots of the search space. For other nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: Cost::infinity(),
            h: HeuristicValue::infinity(),
            depth: 0,
            step_cost: Cost::from(0.),
            action: None,
            parent_id: NO_NODE,
        }
    }

    /// Create a new search node reached from `parent_id` via `action`. The
    /// node is not open until one of the `open` methods is called.
    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, action: A, step_cost: Cost) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: Cost::infinity(),
            h: HeuristicValue::infinity(),
            depth: 0,
            step_cost,
            action: Some(action),
            parent_id,
        }
    }

    pub fn open(&mut self, g: Cost, h: HeuristicValue, depth: usize) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.depth = depth;
    }

    /// Redirect the node to a strictly cheaper parent. The node keeps its
    /// heuristic value and is (re)opened.
    pub fn reparent(
        &mut self,
        parent_id: NodeId,
        action: A,
        step_cost: Cost,
        g: Cost,
        depth: usize,
    ) {
        debug_assert!(g < self.g, "Reparenting must improve the g-value");
        self.parent_id = parent_id;
        self.action = Some(action);
        self.step_cost = step_cost;
        self.open(g, self.h, depth);
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_step_cost(&self) -> Cost {
        self.step_cost
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }
}
