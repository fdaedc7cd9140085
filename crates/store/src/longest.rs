//! Exhaustive longest-simple-path search.
//!
//! Longest simple path is NP-hard in general; this is a small-input
//! utility, so every simple path from every starting station is
//! explored and the exponential worst case is accepted.

use crate::RouteGraph;
use protocol::StationId;
use std::collections::HashSet;
use tracing::debug;

/// Best path found by the search: the station sequence and its total
/// distance. Empty with distance 0 only when the graph has no stations
/// at all.
#[derive(Debug, Clone, PartialEq)]
pub struct LongestPath {
    pub distance: f64,
    pub stations: Vec<StationId>,
}

/// Finds the maximum-distance simple path over the whole graph, with
/// no fixed start or end station.
///
/// Stations are tried as starting points in first-appearance order and
/// each station's outgoing routes are explored in insertion order, so
/// the result is deterministic: when several paths share the maximum
/// distance, the first one discovered wins and later ties never
/// replace it.
pub fn find_longest_path(graph: &RouteGraph) -> LongestPath {
    let mut best = LongestPath {
        distance: 0.0,
        stations: Vec::new(),
    };

    for start in graph.stations() {
        let mut visited = HashSet::from([start]);
        let mut path = vec![start];
        dfs(graph, start, &mut visited, &mut path, 0.0, &mut best);
    }

    debug!(
        "search finished: best distance {} over {} stations",
        best.distance,
        best.stations.len()
    );
    best
}

fn dfs(
    graph: &RouteGraph,
    current: StationId,
    visited: &mut HashSet<StationId>,
    path: &mut Vec<StationId>,
    travelled: f64,
    best: &mut LongestPath,
) {
    // A path may become the best at any prefix length, not only at a
    // dead end. Strictly-greater keeps the first path found among
    // ties; the empty-result check lets the very first visit claim the
    // slot so an edgeless graph still reports a single station.
    if travelled > best.distance || best.stations.is_empty() {
        best.distance = travelled;
        best.stations = path.clone();
    }

    for (next, distance) in graph.outgoing(current) {
        if visited.contains(&next) {
            continue;
        }

        visited.insert(next);
        path.push(next);
        dfs(graph, next, visited, path, travelled + distance, best);
        path.pop();
        visited.remove(&next);
    }
}
