use crate::search::heuristics::{GridCoordinate, GridHeuristicName, Heuristic, HeuristicValue};

/// One of the grid metrics, measured to a fixed goal.
#[derive(Debug, Clone, Copy)]
pub struct GridHeuristic {
    name: GridHeuristicName,
    goal: GridCoordinate,
}

impl GridHeuristic {
    pub fn new(name: GridHeuristicName, goal: GridCoordinate) -> Self {
        Self { name, goal }
    }
}

impl Heuristic<GridCoordinate> for GridHeuristic {
    fn evaluate(&self, state: &GridCoordinate) -> HeuristicValue {
        self.name.distance(*state, self.goal)
    }
}
