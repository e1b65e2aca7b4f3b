//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::constants::graph::SUPER_ROOT;
use crate::core::ColorTag;

/// Color a node is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderColor {
    /// Primary node with at least one declared dependency
    Primary,
    /// Primary node with no declared dependency
    LeafPrimary,
    Secondary,
    Root,
}

impl RenderColor {
    /// Render color of a declared node, derived from its own record
    pub fn for_record(color: ColorTag, has_dependencies: bool) -> Self {
        match color {
            ColorTag::Primary if has_dependencies => RenderColor::Primary,
            ColorTag::Primary => RenderColor::LeafPrimary,
            ColorTag::Secondary => RenderColor::Secondary,
        }
    }
}

/// Which declared relationship produces the graph's edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EdgeSource {
    /// Primary nodes point at their `SubNodeIndices`
    #[default]
    SubNodes,
    /// Every node is pointed at by its `OriginalDependencies`
    OriginalDependencies,
}

/// How node labels are derived from node names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LabelStyle {
    /// The full node name
    #[default]
    Full,
    /// The last `.`-separated segment of the name
    Short,
}

impl LabelStyle {
    pub fn label(&self, name: &str) -> String {
        match self {
            LabelStyle::Full => name.to_string(),
            LabelStyle::Short => name.rsplit('.').next().unwrap_or(name).to_string(),
        }
    }
}

/// A node of the built dependency graph
#[derive(Debug, Clone)]
pub struct GraphNode {
    name: String,
    render_color: RenderColor,
    label: String,
    in_degree: usize,
}

impl GraphNode {
    pub fn record(
        name: &str,
        color: ColorTag,
        has_dependencies: bool,
        label_style: LabelStyle,
    ) -> Self {
        Self {
            name: name.to_string(),
            render_color: RenderColor::for_record(color, has_dependencies),
            label: label_style.label(name),
            in_degree: 0,
        }
    }

    pub fn root() -> Self {
        Self {
            name: SUPER_ROOT.to_string(),
            render_color: RenderColor::Root,
            label: SUPER_ROOT.to_string(),
            in_degree: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render_color(&self) -> RenderColor {
        self.render_color
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Builder-created incoming edges, not counting the edge from `"super"`
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub(crate) fn increment_in_degree(&mut self) {
        self.in_degree += 1;
    }
}

/// Type of a graph edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// Derived from the declared relationships
    Structural,
    /// From the synthetic root to a node without incoming edges
    Root,
}

/// Directed dependency graph with a synthetic `"super"` root
///
/// Wraps a petgraph [`DiGraph`] together with a name index. Children of a
/// node are always reported in the order their edges were inserted, which is
/// what keeps hierarchical layouts deterministic.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    pub(crate) graph: DiGraph<GraphNode, EdgeKind>,
    pub(crate) indices: HashMap<String, NodeIndex>,
    pub(crate) root: NodeIndex,
}

impl DependencyGraph {
    pub fn graph(&self) -> &DiGraph<GraphNode, EdgeKind> {
        &self.graph
    }

    /// Index of the synthetic `"super"` root
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &GraphNode {
        &self.graph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing neighbors of `idx` in edge insertion order
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        edges.sort_by_key(|(id, _)| id.index());
        edges.into_iter().map(|(_, target)| target).collect()
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_index(from), self.node_index(to)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// All edges as `(from, to, kind)` in insertion order
    pub fn edges(&self) -> Vec<(String, String, EdgeKind)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].name().to_string(),
                    self.graph[edge.target()].name().to_string(),
                    *edge.weight(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_color_for_record() {
        assert_eq!(
            RenderColor::for_record(ColorTag::Primary, true),
            RenderColor::Primary
        );
        assert_eq!(
            RenderColor::for_record(ColorTag::Primary, false),
            RenderColor::LeafPrimary
        );
        assert_eq!(
            RenderColor::for_record(ColorTag::Secondary, true),
            RenderColor::Secondary
        );
    }

    #[test]
    fn test_label_styles() {
        assert_eq!(LabelStyle::Full.label("Mass.Movement.Steer"), "Mass.Movement.Steer");
        assert_eq!(LabelStyle::Short.label("Mass.Movement.Steer"), "Steer");
        assert_eq!(LabelStyle::Short.label("Plain"), "Plain");
    }

    #[test]
    fn test_root_node() {
        let root = GraphNode::root();
        assert_eq!(root.name(), "super");
        assert_eq!(root.label(), "super");
        assert_eq!(root.render_color(), RenderColor::Root);
    }
}
