//! Report rendering for the command line

use anyhow::{Context, Result};
use wayfind::RouteReport;

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render reports for stdout
///
/// A single report is rendered the classic way ("shortest path from a to c is 5"),
/// several reports as one aligned line per finish node.
pub fn render(reports: &[RouteReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = match reports {
                [single] => serde_json::to_string_pretty(single),
                many => serde_json::to_string_pretty(many),
            };
            json.context("Failed to serialize route report")
        }
        OutputFormat::Text => Ok(render_text(reports)),
    }
}

fn render_text(reports: &[RouteReport]) -> String {
    if let [report] = reports {
        return format!(
            "shortest path from {} to {} is {}\nshortest path route is {}",
            report.start,
            report.finish,
            report.distance,
            report.route.join(" -> ")
        );
    }

    let name_width = reports.iter().map(|r| r.finish.len()).max().unwrap_or(0);
    let distance_width = reports
        .iter()
        .map(|r| r.distance.to_string().len())
        .max()
        .unwrap_or(0);

    reports
        .iter()
        .map(|r| {
            format!(
                "{:<name_width$}  {:>distance_width$}  {}",
                r.finish,
                r.distance,
                r.route.join(" -> ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
