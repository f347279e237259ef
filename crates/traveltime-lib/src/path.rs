use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::graph::Graph;

/// Sentinel total returned when no route exists or an endpoint is unknown.
pub const NO_ROUTE: i64 = -1;

/// Outcome of a fastest-route query.
///
/// Serializes with exactly the keys `route` and `total_time`. A missing route
/// is a normal outcome, not an error: the route is empty and the total is
/// [`NO_ROUTE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    /// Stops in travel order, origin and destination included.
    pub route: Vec<String>,
    /// Accumulated travel time, or [`NO_ROUTE`].
    pub total_time: i64,
}

impl RouteResult {
    /// The sentinel result for unknown endpoints and unreachable destinations.
    pub fn no_route() -> Self {
        Self {
            route: Vec::new(),
            total_time: NO_ROUTE,
        }
    }

    pub fn found(&self) -> bool {
        self.total_time != NO_ROUTE
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Find the route with the lowest accumulated travel time between two named
/// locations using Dijkstra's algorithm.
///
/// The frontier uses lazy deletion: relaxing a location pushes a fresh entry
/// instead of re-keying the old one, and entries that are stale by the time
/// they are popped are skipped. The search stops as soon as the destination
/// is popped, which is safe because connection times are non-negative.
pub fn find_fastest_route(graph: &Graph, origin: &str, destination: &str) -> RouteResult {
    let (Some((origin, _)), Some((destination, _))) =
        (graph.lookup(origin), graph.lookup(destination))
    else {
        return RouteResult::no_route();
    };

    let mut times: HashMap<&str, u64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    times.insert(origin, 0);
    frontier.push(QueueEntry {
        stop: origin,
        time: 0,
    });

    while let Some(entry) = frontier.pop() {
        if entry.stop == destination {
            break;
        }

        let best = times.get(entry.stop).copied().unwrap_or(u64::MAX);
        if entry.time > best {
            continue; // stale frontier entry
        }

        for connection in graph.connections(entry.stop).unwrap_or_default() {
            let next = connection.target.as_str();
            let candidate = best + u64::from(connection.time);
            if candidate < times.get(next).copied().unwrap_or(u64::MAX) {
                times.insert(next, candidate);
                parents.insert(next, entry.stop);
                frontier.push(QueueEntry {
                    stop: next,
                    time: candidate,
                });
            }
        }
    }

    let Some(&total) = times.get(destination) else {
        return RouteResult::no_route();
    };

    RouteResult {
        route: reconstruct_route(&parents, origin, destination),
        total_time: total as i64,
    }
}

fn reconstruct_route(parents: &HashMap<&str, &str>, origin: &str, destination: &str) -> Vec<String> {
    let mut route = Vec::new();
    let mut current = Some(destination);
    while let Some(stop) = current {
        route.push(stop.to_string());
        if stop == origin {
            break;
        }
        current = parents.get(stop).copied();
    }
    route.reverse();
    route
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    stop: &'a str,
    time: u64,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by time.
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.stop.cmp(self.stop))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
