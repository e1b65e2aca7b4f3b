//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::DepDrawError;
use crate::graph::EdgeKind;
use crate::layout::LayoutOutcome;
use crate::utils::string::{format_coordinate, pluralize};

pub struct HumanReportGenerator {
    max_nodes: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_nodes: Option<usize>) -> Self {
        Self { max_nodes }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, outcome: &LayoutOutcome) -> Result<String, DepDrawError> {
        let mut output = String::new();

        let node_count = outcome.nodes.len();
        let edge_count = outcome.edges.len();
        let structural = outcome
            .edges
            .iter()
            .filter(|edge| edge.kind == EdgeKind::Structural)
            .count();

        writeln!(
            output,
            "\n{} {} layout of {} {} and {} {}",
            style("📊").blue(),
            style(outcome.strategy).bold(),
            style(node_count).bold(),
            pluralize("node", node_count),
            style(edge_count).bold(),
            pluralize("edge", edge_count)
        )?;

        if outcome.is_tree() {
            writeln!(
                output,
                "  {} Graph is a tree rooted at \"super\"",
                style("✓").green()
            )?;
        } else {
            writeln!(
                output,
                "  {} Graph is not a tree; nodes were placed by force simulation",
                style("⚠").yellow()
            )?;
        }
        writeln!(
            output,
            "  {} {} declared {}, {} from the root",
            style("🔗").cyan(),
            structural,
            if structural == 1 { "dependency" } else { "dependencies" },
            edge_count - structural
        )?;

        writeln!(output, "\n{}:", style("Positions").bold())?;

        let width = outcome
            .positions
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);
        let limit = self.max_nodes.unwrap_or(usize::MAX);

        for (name, position) in outcome.positions.iter().take(limit) {
            writeln!(
                output,
                "  {} {:<width$}  {:>9}  {:>9}",
                style("•").dim(),
                name,
                format_coordinate(position.x),
                format_coordinate(position.y),
            )?;
        }

        if outcome.positions.len() > limit {
            let hidden = outcome.positions.len() - limit;
            writeln!(
                output,
                "  {} {} more {} not shown",
                style("…").dim(),
                hidden,
                pluralize("node", hidden)
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorTag, NodeRecord};
    use crate::graph::DependencyGraphBuilder;
    use crate::layout::{HierarchicalLayout, LayoutSelector, SpringLayout, TreeStyle};

    fn outcome(records: &[NodeRecord]) -> LayoutOutcome {
        let graph = DependencyGraphBuilder::default().build(records).unwrap();
        LayoutSelector::new(
            TreeStyle::TopDown,
            HierarchicalLayout::default(),
            SpringLayout::default(),
        )
        .select(&graph)
        .unwrap()
    }

    #[test]
    fn test_tree_report() {
        console::set_colors_enabled(false);
        let outcome = outcome(&[
            NodeRecord::new("A", ColorTag::Primary).with_sub_nodes(["B"]),
            NodeRecord::new("B", ColorTag::Secondary),
        ]);

        let report = HumanReportGenerator::new(None)
            .generate_report(&outcome)
            .unwrap();

        assert!(report.contains("hierarchical layout of 3 nodes and 2 edges"));
        assert!(report.contains("Graph is a tree"));
        assert!(report.contains("1 declared dependency, 1 from the root"));
        assert!(report.contains("super"));
        assert!(report.contains("0.500"));
        assert!(report.contains("-0.400"));
    }

    #[test]
    fn test_non_tree_report() {
        console::set_colors_enabled(false);
        let outcome = outcome(&[
            NodeRecord::new("A", ColorTag::Primary).with_sub_nodes(["B", "C"]),
            NodeRecord::new("B", ColorTag::Primary).with_sub_nodes(["D"]),
            NodeRecord::new("C", ColorTag::Primary).with_sub_nodes(["D"]),
            NodeRecord::new("D", ColorTag::Secondary),
        ]);

        let report = HumanReportGenerator::new(None)
            .generate_report(&outcome)
            .unwrap();

        assert!(report.contains("force-directed layout"));
        assert!(report.contains("not a tree"));
        assert!(report.contains("4 declared dependencies"));
    }

    #[test]
    fn test_truncated_positions() {
        console::set_colors_enabled(false);
        let outcome = outcome(&[
            NodeRecord::new("A", ColorTag::Secondary),
            NodeRecord::new("B", ColorTag::Secondary),
            NodeRecord::new("C", ColorTag::Secondary),
        ]);

        let report = HumanReportGenerator::new(Some(2))
            .generate_report(&outcome)
            .unwrap();

        assert!(report.contains("2 more nodes not shown"));
    }
}
