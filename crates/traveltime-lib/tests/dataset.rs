use std::io::{self, Read};

use traveltime_lib::{load_connections, Graph};

fn load(data: &str) -> Graph {
    let mut graph = Graph::new();
    load_connections(&mut graph, data.as_bytes()).expect("in-memory load succeeds");
    graph
}

#[test]
fn loads_well_formed_records() {
    let graph = load("CP1;R11;84\nR11;R12;20\nR12;R13;9");

    assert_eq!(graph.location_count(), 4);
    assert_eq!(graph.connection_count(), 3);
    assert_eq!(graph.connections("CP1").unwrap()[0].target, "R11");
}

#[test]
fn reports_number_of_loaded_connections() {
    let mut graph = Graph::new();
    let loaded =
        load_connections(&mut graph, "A;B;1\nnot a record\nB;C;2".as_bytes()).expect("load");
    assert_eq!(loaded, 2);
}

#[test]
fn malformed_lines_are_dropped_not_fatal() {
    let graph = load("CP1;R11;84\nInvalidLine\nR11;R12;20");
    let clean = load("CP1;R11;84\nR11;R12;20");

    assert_eq!(graph.location_count(), clean.location_count());
    assert_eq!(graph.connection_count(), clean.connection_count());
}

#[test]
fn header_line_is_tolerated() {
    let graph = load("loc_start;loc_end;time\nA;B;10");

    // The header has three fields but its time does not parse, so it is
    // skipped like any other malformed record.
    assert!(!graph.contains("loc_start"));
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn non_integer_time_skips_record() {
    let graph = load("A;B;ten\nA;C;5");

    assert!(!graph.contains("B"));
    assert_eq!(graph.connections("A").unwrap().len(), 1);
}

#[test]
fn negative_time_skips_record() {
    let graph = load("A;B;-5\nA;C;5");

    assert!(!graph.contains("B"));
    assert!(graph.contains("C"));
}

#[test]
fn fields_are_trimmed() {
    let graph = load("  CP1 ; R11 ;  84 ");

    assert!(graph.contains("CP1"));
    assert!(graph.contains("R11"));
    assert_eq!(graph.connections("CP1").unwrap()[0].time, 84);
}

#[test]
fn duplicate_records_accumulate() {
    let graph = load("A;B;10\nA;B;10\nA;B;3");

    assert_eq!(graph.connections("A").unwrap().len(), 3);
}

#[test]
fn reload_fully_replaces_previous_graph() {
    let mut graph = Graph::new();
    load_connections(&mut graph, "A;B;10\nB;C;20".as_bytes()).expect("first load");
    load_connections(&mut graph, "X;Y;1".as_bytes()).expect("second load");

    assert!(!graph.contains("A"));
    assert!(!graph.contains("C"));
    assert_eq!(graph.location_count(), 2);
    assert_eq!(graph.connection_count(), 1);
}

/// Reader that yields its payload and then fails, simulating a transport
/// failure partway through a load.
struct InterruptedReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Read for InterruptedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(io::Error::other("stream interrupted"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn read_failure_leaves_graph_empty() {
    let mut graph = Graph::new();
    load_connections(&mut graph, "A;B;10".as_bytes()).expect("initial load");

    let reader = InterruptedReader {
        data: b"C;D;5\nD;E;6\n",
        pos: 0,
    };
    let result = load_connections(&mut graph, reader);

    assert!(result.is_err());
    assert!(
        graph.is_empty(),
        "failed load must not leave a partial graph"
    );
}
