use std::io::{self, Write};
use store::LongestPath;

/// Writes the search result: a header, one station per line, and the
/// total distance. Station lines are terminated with CRLF regardless
/// of platform, matching the historical output format byte for byte.
pub fn write_result<W: Write>(mut out: W, result: &LongestPath) -> io::Result<()> {
    writeln!(out, "Longest path:")?;
    for station in &result.stations {
        write!(out, "{}\r\n", station)?;
    }
    writeln!(out, "Total distance: {}km", result.distance)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::StationId;

    fn render(result: &LongestPath) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_format() {
        let result = LongestPath {
            distance: 10.0,
            stations: vec![StationId(1), StationId(2), StationId(3)],
        };

        assert_eq!(
            render(&result),
            "Longest path:\n1\r\n2\r\n3\r\nTotal distance: 10km\n"
        );
    }

    #[test]
    fn test_fractional_distance() {
        let result = LongestPath {
            distance: 0.75,
            stations: vec![StationId(4), StationId(5)],
        };

        assert_eq!(
            render(&result),
            "Longest path:\n4\r\n5\r\nTotal distance: 0.75km\n"
        );
    }

    #[test]
    fn test_empty_result() {
        let result = LongestPath {
            distance: 0.0,
            stations: Vec::new(),
        };

        assert_eq!(render(&result), "Longest path:\nTotal distance: 0km\n");
    }
}
