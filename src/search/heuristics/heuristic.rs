use crate::search::heuristics::{
    chebyshev_distance, euclidean_distance, manhattan_distance, GridHeuristic, ZeroHeuristic,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// A (row, column) position on a grid.
pub type GridCoordinate = (i64, i64);

/// A heuristic estimates the remaining cost from a state to the goal. The
/// goal is fixed when the heuristic is built, so evaluation is a pure
/// function of the state.
pub trait Heuristic<S>: Debug {
    /// Evaluate the given state.
    fn evaluate(&self, state: &S) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GridHeuristicName {
    #[clap(help = "|drow| + |dcol|, admissible on 4-connected unit-cost grids.")]
    Manhattan,
    #[clap(help = "max(|drow|, |dcol|), admissible on 8-connected grids.")]
    Chebyshev,
    #[clap(help = "Straight-line distance, admissible on metric planar problems.")]
    Euclidean,
    #[clap(name = "zero", help = "The zero heuristic.")]
    #[serde(rename = "zero")]
    ZeroHeuristic,
}

impl GridHeuristicName {
    /// Distance between two grid coordinates under the named metric.
    pub fn distance(&self, from: GridCoordinate, to: GridCoordinate) -> HeuristicValue {
        match self {
            GridHeuristicName::Manhattan => manhattan_distance(from, to),
            GridHeuristicName::Chebyshev => chebyshev_distance(from, to),
            GridHeuristicName::Euclidean => euclidean_distance(from, to),
            GridHeuristicName::ZeroHeuristic => HeuristicValue::from(0.),
        }
    }

    pub fn create(&self, goal: GridCoordinate) -> Box<dyn Heuristic<GridCoordinate>> {
        match self {
            GridHeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
            name => Box::new(GridHeuristic::new(*name, goal)),
        }
    }
}
