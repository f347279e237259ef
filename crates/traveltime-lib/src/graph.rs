use std::collections::HashMap;

/// Directed connection from one location to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Name of the destination location.
    pub target: String,
    /// Travel time for this connection. Non-negative by construction.
    pub time: u32,
}

/// In-memory map of locations and their outgoing connections.
///
/// The location name is the sole identity: lookups are exact (case- and
/// whitespace-sensitive) and re-adding an existing name is a no-op. Every
/// connection target is itself present as a location because
/// [`Graph::add_connection`] creates both endpoints.
///
/// The graph is plain mutable state with no internal synchronization; callers
/// sharing it across threads must serialize a reload against concurrent
/// queries themselves.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Connection>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location if it is not already present. Never fails and never
    /// duplicates: the existing entry wins.
    pub fn add_location(&mut self, name: &str) {
        if !self.adjacency.contains_key(name) {
            self.adjacency.insert(name.to_string(), Vec::new());
        }
    }

    /// Append a directed connection, creating both endpoints as needed.
    /// Parallel connections between the same pair accumulate rather than
    /// overwrite; they are treated as independent alternatives.
    pub fn add_connection(&mut self, from: &str, to: &str, time: u32) {
        self.add_location(to);
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(Connection {
                target: to.to_string(),
                time,
            });
    }

    /// Outgoing connections for a location, or `None` when the name is
    /// unknown. An empty slice means the location exists but has no outgoing
    /// connections.
    pub fn connections(&self, name: &str) -> Option<&[Connection]> {
        self.adjacency.get(name).map(Vec::as_slice)
    }

    /// Map-owned key and connection slice for a location. Lets pathfinding
    /// borrow the graph's own name storage for its working maps.
    pub(crate) fn lookup(&self, name: &str) -> Option<(&str, &[Connection])> {
        self.adjacency
            .get_key_value(name)
            .map(|(key, connections)| (key.as_str(), connections.as_slice()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Names of all known locations, in no particular order.
    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Discard all locations and connections.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}
