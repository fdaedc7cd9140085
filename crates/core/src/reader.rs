use anyhow::{Context, Result};
use protocol::RouteRecord;
use std::io::BufRead;
use store::RouteGraph;
use tracing::info;

/// Reads route records line by line until end of input and feeds them
/// into the graph. Blank lines are skipped silently; the first
/// malformed line aborts the whole run, so no partial graph is ever
/// searched. Returns the number of routes loaded.
pub fn load_routes<R: BufRead>(input: R, graph: &mut RouteGraph) -> Result<usize> {
    let mut count = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let record: RouteRecord = line
            .parse()
            .with_context(|| format!("input error at line {}", index + 1))?;
        graph.add_route(record.origin, record.destination, record.distance);
        count += 1;
    }

    info!("loaded {} routes", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::StationId;

    fn load(input: &str) -> Result<(RouteGraph, usize)> {
        let mut graph = RouteGraph::new();
        let count = load_routes(input.as_bytes(), &mut graph)?;
        Ok((graph, count))
    }

    #[test]
    fn test_load_routes() {
        let (graph, count) = load("1,2,5\n2,3,5\n1,3,3\n").unwrap();

        assert_eq!(count, 3);
        let stats = graph.stats();
        assert_eq!(stats.station_count, 3);
        assert_eq!(stats.route_count, 3);
        assert_eq!(
            graph.outgoing(StationId(1)),
            vec![(StationId(2), 5.0), (StationId(3), 3.0)]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (graph, count) = load("\n1,2,5\n   \n\n2,3,5\n").unwrap();

        assert_eq!(count, 2);
        assert_eq!(graph.stats().route_count, 2);
    }

    #[test]
    fn test_empty_input() {
        let (graph, count) = load("").unwrap();

        assert_eq!(count, 0);
        assert_eq!(graph.stats().station_count, 0);
    }

    #[test]
    fn test_malformed_line_aborts() {
        let err = load("1,2,5\n1, two, 3.0\n2,3,5\n").unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("line 2"), "got: {message}");
        assert!(message.contains("two"), "got: {message}");
    }

    #[test]
    fn test_wrong_field_count_aborts() {
        assert!(load("1,2\n").is_err());
        assert!(load("1,2,3,4\n").is_err());
    }
}
