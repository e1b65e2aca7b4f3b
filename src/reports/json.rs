//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::DepDrawError;
use crate::layout::LayoutOutcome;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, outcome: &LayoutOutcome) -> Result<String, DepDrawError> {
        let edges: Vec<_> = outcome
            .edges
            .iter()
            .map(|edge| {
                json!({
                    "from": edge.from,
                    "to": edge.to,
                    "kind": edge.kind,
                    "color": edge.color,
                })
            })
            .collect();

        let report = json!({
            "strategy": outcome.strategy,
            "is_tree": outcome.is_tree(),
            "node_count": outcome.nodes.len(),
            "edge_count": outcome.edges.len(),
            "nodes": outcome.nodes,
            "positions": outcome.positions,
            "edges": edges,
        });

        serde_json::to_string_pretty(&report).map_err(DepDrawError::Json)
    }
}
