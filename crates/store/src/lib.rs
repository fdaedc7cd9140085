use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use protocol::StationId;
use std::collections::HashMap;
use tracing::debug;

pub mod longest;
pub use longest::{find_longest_path, LongestPath};

/// In-memory directed route network. Parallel routes between the same
/// ordered pair of stations are kept as distinct edges; self-loops are
/// storable but can never appear in a simple path.
#[derive(Debug)]
pub struct RouteGraph {
    graph: DiGraph<StationId, f64>,
    station_to_node: HashMap<StationId, NodeIndex>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            station_to_node: HashMap::new(),
        }
    }

    /// Registers a station, idempotently, and returns its node index.
    pub fn add_station(&mut self, station: StationId) -> NodeIndex {
        if let Some(&node) = self.station_to_node.get(&station) {
            return node;
        }

        let node = self.graph.add_node(station);
        self.station_to_node.insert(station, node);
        node
    }

    /// Appends a directed route. Both endpoints are registered as
    /// stations if not already known. Never fails; no duplicate or
    /// sign checks are performed.
    pub fn add_route(&mut self, origin: StationId, destination: StationId, distance: f64) {
        let from = self.add_station(origin);
        let to = self.add_station(destination);
        self.graph.add_edge(from, to, distance);
        debug!("added route {} -> {} ({}km)", origin, destination, distance);
    }

    /// Outgoing routes of `station` in insertion order. A station with
    /// no outgoing routes, or an id never seen at all, yields an empty
    /// vec rather than an error.
    pub fn outgoing(&self, station: StationId) -> Vec<(StationId, f64)> {
        let Some(&node) = self.station_to_node.get(&station) else {
            return Vec::new();
        };

        // petgraph walks a node's edge list newest-first; reverse to
        // recover insertion order.
        let mut routes: Vec<(StationId, f64)> = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (self.graph[edge.target()], *edge.weight()))
            .collect();
        routes.reverse();
        routes
    }

    /// Every station that appears as an origin or a destination, in
    /// first-appearance order.
    pub fn stations(&self) -> Vec<StationId> {
        self.graph.node_indices().map(|n| self.graph[n]).collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            station_count: self.graph.node_count(),
            route_count: self.graph.edge_count(),
            is_cyclic: petgraph::algo::is_cyclic_directed(&self.graph),
        }
    }
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GraphStats {
    pub station_count: usize,
    pub route_count: usize,
    pub is_cyclic: bool,
}
