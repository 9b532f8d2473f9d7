//! Core shortest-path engine for wayfind.
//!
//! A [`Graph`] holds directed, non-negatively weighted edges between opaque
//! node identifiers. [`ShortestPathEngine`] runs Dijkstra over an owned graph
//! and keeps the last run's labels for route reconstruction; [`Search`] does
//! the same over a borrowed graph so several queries can share one.

pub mod config;
pub mod engine;
mod frontier;
pub mod graph;
pub mod journey;
mod labels;
pub mod route;
pub mod sample;
pub mod search;

pub use config::SearchConfig;
pub use engine::ShortestPathEngine;
pub use graph::{Graph, NodeId, Weight};
pub use journey::{Distance, Journey};
pub use route::Route;
pub use sample::sample_graph;
pub use search::Search;
pub use wayfind_common::{Error, Result};
