//! Query planning for wayfind.
//!
//! Turns a start node plus either one finish node or "every node" into
//! serializable route reports.

use std::borrow::Borrow;

use serde::Serialize;

use wayfind_common::Result;
use wayfind_routing::{Graph, NodeId, SearchConfig, Weight};

/// What to compute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Start node identifier
    pub from: String,

    /// Finish node; `None` reports every node reachable from `from`
    pub to: Option<String>,

    /// Settle every reachable node even when a finish node is given
    pub exhaustive: bool,
}

impl QueryOptions {
    pub fn between(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: Some(to.to_string()),
            exhaustive: false,
        }
    }

    pub fn to_every_node(from: &str) -> Self {
        Self {
            from: from.to_string(),
            to: None,
            exhaustive: true,
        }
    }

    fn search_config(&self) -> SearchConfig {
        SearchConfig::default().with_stop_at_finish(self.to.is_some() && !self.exhaustive)
    }
}

/// One resolved route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub start: String,
    pub finish: String,
    pub distance: Weight,
    pub route: Vec<String>,
}

/// Run the query described by `options` against `graph`
///
/// Single-target queries return exactly one report. Queries without a finish
/// node return one report per reachable node, in identifier order, starting
/// with the start node itself.
pub fn plan_routes<N>(graph: &Graph<N>, options: &QueryOptions) -> Result<Vec<RouteReport>>
where
    N: NodeId + Borrow<str>,
{
    let mut search = graph.search_with(options.search_config());
    let from = options.from.as_str();

    let finishes: Vec<String> = match &options.to {
        Some(to) => {
            search.shortest_path(from, to.as_str())?;
            vec![to.clone()]
        }
        None => {
            search.shortest_path(from, from)?;
            search.finalized().map(|(node, _)| node.to_string()).collect()
        }
    };

    let mut reports = Vec::with_capacity(finishes.len());
    for finish in finishes {
        let route = search.route_to(finish.as_str())?;
        reports.push(RouteReport {
            start: options.from.clone(),
            distance: route.distance(),
            route: route.nodes().iter().map(ToString::to_string).collect(),
            finish,
        });
    }

    tracing::debug!(from, reports = reports.len(), "planned routes");
    Ok(reports)
}
