//! # Wayfind Library
//!
//! Shortest paths over small, static, weighted directed graphs.
//!
//! ## Basic Usage
//!
//! ```rust
//! use wayfind::{sample_graph, ShortestPathEngine};
//!
//! let mut engine = ShortestPathEngine::new(sample_graph());
//! assert_eq!(engine.shortest_path("a", "c")?, 5);
//! assert_eq!(engine.route_to("c")?.to_string(), "a -> d -> e -> c");
//! # Ok::<(), wayfind::Error>(())
//! ```
//!
//! ## Reports
//!
//! ```rust
//! use wayfind::{plan_routes, sample_graph, QueryOptions};
//!
//! let options = QueryOptions::to_every_node("d");
//! let reports = plan_routes(&sample_graph(), &options)?;
//! assert_eq!(reports.len(), 5);
//! # Ok::<(), wayfind::Error>(())
//! ```

pub use crate::core::query::{plan_routes, QueryOptions, RouteReport};
pub use wayfind_common::{Error, Result};
pub use wayfind_routing::{
    sample_graph, Distance, Graph, NodeId, Route, Search, SearchConfig, ShortestPathEngine,
    Weight,
};

// Internal modules
mod core;
