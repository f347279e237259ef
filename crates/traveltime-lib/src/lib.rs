//! Traveltime library entry points.
//!
//! This crate loads semicolon-delimited connection datasets into an in-memory
//! graph and answers fastest-route queries over it. Higher-level consumers
//! (CLI, services) should only depend on the functions exported here instead
//! of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod path;

pub use dataset::{load_connections, load_connections_file};
pub use error::{Error, Result};
pub use graph::{Connection, Graph};
pub use path::{find_fastest_route, RouteResult, NO_ROUTE};
