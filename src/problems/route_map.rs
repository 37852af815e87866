//! Route finding on a weighted road map.

use crate::search::{
    heuristics::StraightLineTable, Heuristic, HeuristicValue, Problem, Reversible, Successor,
};
use petgraph::{
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
    Direction,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    convert::Infallible,
    path::Path,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RouteMapError {
    #[error("failed to read route map {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse route map: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown city {0:?}")]
    UnknownCity(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// The on-disk form of a [`RouteMap`]:
///
/// ```toml
/// start = "Arad"
/// goal = "Bucharest"
///
/// [[roads]]
/// from = "Arad"
/// to = "Sibiu"
/// cost = 140
///
/// [straight-line]
/// Arad = 366
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RouteMapConfig {
    pub start: String,
    pub goal: String,
    /// One-way roads if set, otherwise every road can be driven both ways.
    #[serde(default)]
    pub directed: bool,
    pub roads: Vec<Road>,
    #[serde(default)]
    pub straight_line: BTreeMap<String, f64>,
}

/// Cities connected by roads with a cost each. An undirected road becomes a
/// pair of opposite edges, so the action of a transition is always the edge
/// it follows.
#[derive(Debug, Clone)]
pub struct RouteMap {
    graph: DiGraph<String, f64>,
    cities: HashMap<String, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
    straight_line: Option<StraightLineTable<NodeIndex>>,
}

impl RouteMap {
    pub fn from_config(config: &RouteMapConfig) -> Result<Self, RouteMapError> {
        let mut graph = DiGraph::new();
        let mut cities: HashMap<String, NodeIndex> = HashMap::new();
        let mut city = |graph: &mut DiGraph<String, f64>, name: &str| {
            *cities
                .entry(name.to_string())
                .or_insert_with(|| graph.add_node(name.to_string()))
        };
        for road in &config.roads {
            let from = city(&mut graph, &road.from);
            let to = city(&mut graph, &road.to);
            graph.add_edge(from, to, road.cost);
            if !config.directed {
                graph.add_edge(to, from, road.cost);
            }
        }

        let lookup = |name: &str| {
            cities
                .get(name)
                .copied()
                .ok_or_else(|| RouteMapError::UnknownCity(name.to_string()))
        };
        let start = lookup(&config.start)?;
        let goal = lookup(&config.goal)?;
        let straight_line = if config.straight_line.is_empty() {
            None
        } else {
            Some(
                config
                    .straight_line
                    .iter()
                    .map(|(name, distance)| Ok((lookup(name)?, *distance)))
                    .collect::<Result<StraightLineTable<_>, RouteMapError>>()?,
            )
        };

        Ok(Self {
            graph,
            cities,
            start,
            goal,
            straight_line,
        })
    }

    /// An undirected map without a straight-line table.
    pub fn from_roads(
        roads: &[(&str, &str, f64)],
        start: &str,
        goal: &str,
    ) -> Result<Self, RouteMapError> {
        Self::from_config(&RouteMapConfig {
            start: start.to_string(),
            goal: goal.to_string(),
            directed: false,
            roads: roads
                .iter()
                .map(|(from, to, cost)| Road {
                    from: from.to_string(),
                    to: to.to_string(),
                    cost: *cost,
                })
                .collect(),
            straight_line: BTreeMap::new(),
        })
    }

    pub fn from_text(text: &str) -> Result<Self, RouteMapError> {
        let config: RouteMapConfig = toml::from_str(text)?;
        Self::from_config(&config)
    }

    pub fn from_path(path: &Path) -> Result<Self, RouteMapError> {
        let text = std::fs::read_to_string(path).map_err(|source| RouteMapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let map = Self::from_text(&text)?;
        info!(
            cities = map.graph.node_count(),
            edges = map.graph.edge_count(),
            "loaded route map"
        );
        Ok(map)
    }

    /// Use `distances` as the heuristic. Cities not listed estimate zero.
    pub fn with_straight_line(mut self, distances: &[(&str, f64)]) -> Result<Self, RouteMapError> {
        let table = distances
            .iter()
            .map(|(name, distance)| Ok((self.city(name)?, *distance)))
            .collect::<Result<StraightLineTable<_>, RouteMapError>>()?;
        self.straight_line = Some(table);
        Ok(self)
    }

    pub fn city(&self, name: &str) -> Result<NodeIndex, RouteMapError> {
        self.cities
            .get(name)
            .copied()
            .ok_or_else(|| RouteMapError::UnknownCity(name.to_string()))
    }

    pub fn name_of(&self, city: NodeIndex) -> &str {
        &self.graph[city]
    }

    pub fn names_of(&self, cities: &[NodeIndex]) -> Vec<&str> {
        cities.iter().map(|city| self.name_of(*city)).collect()
    }

    /// Both ends of the road an action follows.
    pub fn endpoints(&self, road: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(road)
    }

    fn transitions(
        &self,
        city: NodeIndex,
        direction: Direction,
    ) -> Vec<Successor<NodeIndex, EdgeIndex>> {
        // petgraph walks adjacency lists newest edge first
        let mut edges: Vec<_> = self.graph.edges_directed(city, direction).collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                Successor::new(edge.id(), other, *edge.weight())
            })
            .collect()
    }
}

impl Problem for RouteMap {
    type State = NodeIndex;
    type Action = EdgeIndex;
    type Error = Infallible;

    fn initial_state(&self) -> &NodeIndex {
        &self.start
    }

    fn is_goal(&self, state: &NodeIndex) -> bool {
        *state == self.goal
    }

    fn successors(
        &self,
        state: &NodeIndex,
    ) -> Result<Vec<Successor<NodeIndex, EdgeIndex>>, Infallible> {
        Ok(self.transitions(*state, Direction::Outgoing))
    }

    fn heuristic(&self, state: &NodeIndex) -> HeuristicValue {
        self.straight_line
            .as_ref()
            .map_or(HeuristicValue::from(0.), |table| table.evaluate(state))
    }

    fn reversible(&self) -> Option<&dyn Reversible<NodeIndex, EdgeIndex, Infallible>> {
        Some(self)
    }
}

impl Reversible<NodeIndex, EdgeIndex, Infallible> for RouteMap {
    fn goal_states(&self) -> Vec<NodeIndex> {
        vec![self.goal]
    }

    fn predecessors(
        &self,
        state: &NodeIndex,
    ) -> Result<Vec<Successor<NodeIndex, EdgeIndex>>, Infallible> {
        Ok(self.transitions(*state, Direction::Incoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ONE_WAY_MAP: &str = r#"
        start = "A"
        goal = "C"
        directed = true

        [[roads]]
        from = "A"
        to = "B"
        cost = 2

        [[roads]]
        from = "B"
        to = "C"
        cost = 3.5

        [straight-line]
        A = 5
        B = 3.5
        "#;

    #[test]
    fn successors_follow_road_order() {
        let problem = romania_problem();
        let b = problem.city("B").unwrap();
        let successors = problem.successors(&b).unwrap();
        let targets: Vec<NodeIndex> = successors.iter().map(|s| s.state).collect();
        assert_eq!(problem.names_of(&targets), vec!["A", "C", "D"]);
        for successor in &successors {
            assert_eq!(problem.endpoints(successor.action), Some((b, successor.state)));
        }
    }

    #[test]
    fn predecessors_reach_back_along_same_edge() {
        let problem = romania_problem();
        let d = problem.city("D").unwrap();
        let predecessors = problem.predecessors(&d).unwrap();
        let sources: Vec<NodeIndex> = predecessors.iter().map(|s| s.state).collect();
        assert_eq!(problem.names_of(&sources), vec!["B", "C"]);
        for predecessor in &predecessors {
            assert_eq!(
                problem.endpoints(predecessor.action),
                Some((predecessor.state, d))
            );
        }
    }

    #[test]
    fn one_way_roads_from_toml() {
        let problem = RouteMap::from_text(ONE_WAY_MAP).unwrap();
        let a = problem.city("A").unwrap();
        let c = problem.city("C").unwrap();
        assert!(problem.successors(&c).unwrap().is_empty());
        assert_eq!(problem.successors(&a).unwrap().len(), 1);
        assert_eq!(problem.heuristic(&a), HeuristicValue::from(5.0));
        assert_eq!(problem.heuristic(&c), HeuristicValue::from(0.0));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", ONE_WAY_MAP).unwrap();
        let problem = RouteMap::from_path(file.path()).unwrap();
        assert_eq!(problem.name_of(*problem.initial_state()), "A");
    }

    #[test]
    fn unknown_cities_are_rejected() {
        assert!(matches!(
            RouteMap::from_roads(&[("A", "B", 1.0)], "A", "Z"),
            Err(RouteMapError::UnknownCity(name)) if name == "Z"
        ));
        assert!(matches!(
            romania_problem().with_straight_line(&[("Q", 1.0)]),
            Err(RouteMapError::UnknownCity(_))
        ));
        assert!(matches!(
            RouteMap::from_text("start = \"A\"\ngoal = \"B\"\nroads = []"),
            Err(RouteMapError::UnknownCity(_))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            RouteMap::from_text("start = \"A\""),
            Err(RouteMapError::Parse(_))
        ));
    }
}
