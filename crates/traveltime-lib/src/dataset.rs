//! Loading of semicolon-delimited connection records into a [`Graph`].
//!
//! Each record is one `source;destination;time` line. Records that do not fit
//! that shape are dropped individually; only a failure to read the underlying
//! source fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::Graph;

/// Load connection records from a file, replacing the graph's contents.
pub fn load_connections_file(graph: &mut Graph, path: &Path) -> Result<usize> {
    let file = File::open(path)?;
    load_connections(graph, file)
}

/// Read `source;destination;time` records and rebuild `graph` from them.
///
/// The graph is cleared before any record is read, and cleared again if the
/// reader fails mid-stream, so callers never observe a partially rebuilt
/// graph. Records without exactly three fields are skipped silently (this
/// covers a tolerated header line); records whose time does not parse as a
/// non-negative integer are skipped with a warning. Returns the number of
/// connections loaded.
pub fn load_connections<R: Read>(graph: &mut Graph, reader: R) -> Result<usize> {
    graph.clear();

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut loaded = 0usize;
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                graph.clear();
                return Err(err.into());
            }
        };

        if record.len() != 3 {
            continue;
        }

        let (source, target, raw_time) = (&record[0], &record[1], &record[2]);
        let Ok(time) = raw_time.parse::<u32>() else {
            warn!("skipping record with invalid travel time: {source};{target};{raw_time}");
            continue;
        };

        graph.add_connection(source, target, time);
        loaded += 1;
    }

    debug!(
        connections = loaded,
        locations = graph.location_count(),
        "connection dataset loaded"
    );

    Ok(loaded)
}
