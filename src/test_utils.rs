use crate::problems::{GridMaze, RouteMap};
use crate::search::{Problem, Reversible, Successor};
use std::{cell::RefCell, convert::Infallible};
use thiserror::Error;

pub use crate::problems::Move;

pub const SEED_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/seed_maze.txt"
));

pub const ROMANIA_MAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/romania.toml"
));

pub const SMALL_ROADS: &[(&str, &str, f64)] = &[
    ("A", "B", 1.0),
    ("A", "C", 4.0),
    ("B", "C", 2.0),
    ("B", "D", 5.0),
    ("C", "D", 1.0),
];

/// 4x4, start (0, 0), goal (3, 3), walls at (0, 1), (1, 1) and (2, 1).
pub fn seed_maze() -> GridMaze {
    GridMaze::from_text(SEED_MAZE_TEXT).unwrap()
}

pub fn route_problem(roads: &[(&str, &str, f64)], start: &str, goal: &str) -> RouteMap {
    RouteMap::from_roads(roads, start, goal).unwrap()
}

pub fn route_problem_with_table(
    roads: &[(&str, &str, f64)],
    start: &str,
    goal: &str,
    straight_line: &[(&str, f64)],
) -> RouteMap {
    route_problem(roads, start, goal)
        .with_straight_line(straight_line)
        .unwrap()
}

/// The four-city graph: UCS finds A-B-C-D at cost 4, BFS finds A-B-D.
pub fn romania_problem() -> RouteMap {
    route_problem(SMALL_ROADS, "A", "D")
}

/// [`romania_problem`] with a consistent table of lower bounds.
pub fn romania_problem_with_straight_line() -> RouteMap {
    route_problem_with_table(
        SMALL_ROADS,
        "A",
        "D",
        &[("A", 3.0), ("B", 2.0), ("C", 1.0), ("D", 0.0)],
    )
}

/// Arad to Bucharest.
pub fn full_romania_problem() -> RouteMap {
    RouteMap::from_text(ROMANIA_MAP_TEXT).unwrap()
}

/// The optimal path uses the free road from S to A.
pub fn zero_cost_problem() -> RouteMap {
    route_problem(&[("S", "A", 0.0), ("A", "G", 1.0), ("S", "G", 2.0)], "S", "G")
}

/// A free cycle X-Y-Z that cannot reach G.
pub fn zero_cost_cycle_problem() -> RouteMap {
    route_problem(
        &[("X", "Y", 0.0), ("Y", "Z", 0.0), ("Z", "X", 0.0), ("G", "H", 1.0)],
        "X",
        "G",
    )
}

/// h(A) = 3 is admissible but not consistent, so A* first closes C through
/// B at cost 3 and has to reopen it once A shows the path of cost 2.
pub fn inconsistent_heuristic_problem() -> RouteMap {
    route_problem_with_table(
        &[
            ("S", "A", 1.0),
            ("S", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "C", 2.0),
            ("C", "G", 2.0),
        ],
        "S",
        "G",
        &[("A", 3.0)],
    )
}

/// A chain of cheap roads leading away from the goal, which UCS explores
/// and A* skips.
pub fn decoy_problem() -> RouteMap {
    route_problem_with_table(
        &[
            ("S", "M", 5.0),
            ("M", "G", 5.0),
            ("S", "D1", 1.0),
            ("D1", "D2", 1.0),
            ("D2", "D3", 1.0),
            ("D3", "D4", 1.0),
        ],
        "S",
        "G",
        &[
            ("S", 10.0),
            ("M", 5.0),
            ("G", 0.0),
            ("D1", 11.0),
            ("D2", 12.0),
            ("D3", 13.0),
            ("D4", 14.0),
        ],
    )
}

/// Start in the A-B component, goal in the C-D component.
pub fn disconnected_problem() -> RouteMap {
    route_problem(&[("A", "B", 1.0), ("C", "D", 1.0)], "A", "D")
}

/// The only road into B has infinite cost.
pub fn infinite_cost_problem() -> RouteMap {
    route_problem(&[("A", "B", f64::INFINITY), ("A", "C", 1.0)], "A", "B")
}

/// The direct road from A to B has infinite cost, the detour through C costs 3.
pub fn infinite_cost_detour_problem() -> RouteMap {
    route_problem(
        &[("A", "B", f64::INFINITY), ("A", "C", 1.0), ("C", "B", 2.0)],
        "A",
        "B",
    )
}

pub fn start_is_goal_problem() -> RouteMap {
    route_problem(&[("A", "B", 1.0)], "A", "A")
}

/// The road from B to C has cost -2.
pub fn negative_cost_problem() -> RouteMap {
    route_problem(&[("A", "B", 1.0), ("B", "C", -2.0), ("C", "D", 1.0)], "A", "D")
}

/// Reach `target` from 1 by incrementing or doubling, never exceeding
/// `2 * target`. Has no predecessor function.
#[derive(Debug)]
pub struct DoublingProblem {
    start: u32,
    target: u32,
}

impl Problem for DoublingProblem {
    type State = u32;
    type Action = &'static str;
    type Error = Infallible;

    fn initial_state(&self) -> &u32 {
        &self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.target
    }

    fn successors(&self, state: &u32) -> Result<Vec<Successor<u32, &'static str>>, Infallible> {
        Ok([("increment", state + 1), ("double", state * 2)]
            .into_iter()
            .filter(|(_, next)| *next <= 2 * self.target)
            .map(|(action, next)| Successor::new(action, next, 1.))
            .collect())
    }
}

pub fn one_way_problem() -> DoublingProblem {
    DoublingProblem {
        start: 1,
        target: 10,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot expand state {0}")]
pub struct ExpansionError(pub u32);

/// Counts upwards from 0 towards 100, but fails to expand state 2.
#[derive(Debug)]
pub struct FailingProblem {
    start: u32,
}

impl Problem for FailingProblem {
    type State = u32;
    type Action = &'static str;
    type Error = ExpansionError;

    fn initial_state(&self) -> &u32 {
        &self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == 100
    }

    fn successors(&self, state: &u32) -> Result<Vec<Successor<u32, &'static str>>, ExpansionError> {
        if *state == 2 {
            return Err(ExpansionError(*state));
        }
        Ok(vec![Successor::new("step", state + 1, 1.)])
    }

    fn reversible(&self) -> Option<&dyn Reversible<u32, &'static str, ExpansionError>> {
        Some(self)
    }
}

impl Reversible<u32, &'static str, ExpansionError> for FailingProblem {
    fn goal_states(&self) -> Vec<u32> {
        vec![100]
    }

    fn predecessors(
        &self,
        state: &u32,
    ) -> Result<Vec<Successor<u32, &'static str>>, ExpansionError> {
        Ok(state
            .checked_sub(1)
            .map(|previous| Successor::new("step", previous, 1.))
            .into_iter()
            .collect())
    }
}

pub fn failing_problem() -> FailingProblem {
    FailingProblem { start: 0 }
}

/// Wraps a problem and records every state whose successors are requested.
#[derive(Debug)]
pub struct RecordingProblem<P: Problem> {
    inner: P,
    expanded: RefCell<Vec<P::State>>,
}

impl<P: Problem> RecordingProblem<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            expanded: RefCell::new(vec![]),
        }
    }

    pub fn take_expanded(&self) -> Vec<P::State> {
        self.expanded.take()
    }
}

impl<P: Problem> Problem for RecordingProblem<P> {
    type State = P::State;
    type Action = P::Action;
    type Error = P::Error;

    fn initial_state(&self) -> &P::State {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.inner.is_goal(state)
    }

    fn successors(
        &self,
        state: &P::State,
    ) -> Result<Vec<Successor<P::State, P::Action>>, P::Error> {
        self.expanded.borrow_mut().push(state.clone());
        self.inner.successors(state)
    }

    fn heuristic(&self, state: &P::State) -> crate::search::HeuristicValue {
        self.inner.heuristic(state)
    }

    fn reversible(&self) -> Option<&dyn Reversible<P::State, P::Action, P::Error>> {
        self.inner.reversible()
    }
}
