use std::f64::consts::TAU;
use std::fmt;

use serde::Serialize;

use super::{HierarchicalLayout, PositionMap, SpringLayout};
use crate::error::DepDrawError;
use crate::graph::{DependencyGraph, EdgeKind, RenderColor, TreeClassifier};

/// How trees are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TreeStyle {
    /// Hierarchical placement read as polar coordinates around the root
    #[default]
    Radial,
    /// Hierarchical placement with the root at the top
    TopDown,
}

/// Strategy that produced a [`LayoutOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    Hierarchical,
    Radial,
    ForceDirected,
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutStrategy::Hierarchical => write!(f, "hierarchical"),
            LayoutStrategy::Radial => write!(f, "radial"),
            LayoutStrategy::ForceDirected => write!(f, "force-directed"),
        }
    }
}

/// Per-node drawing attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub name: String,
    pub label: String,
    pub color: RenderColor,
}

/// A drawable edge; it takes the color of its target, or black from the root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub color: RenderColor,
}

/// Everything a renderer or report needs about one laid-out graph
#[derive(Debug, Clone)]
pub struct LayoutOutcome {
    pub strategy: LayoutStrategy,
    pub positions: PositionMap,
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl LayoutOutcome {
    pub fn is_tree(&self) -> bool {
        self.strategy != LayoutStrategy::ForceDirected
    }
}

/// Chooses between hierarchical and force-directed placement
#[derive(Debug, Clone, Default)]
pub struct LayoutSelector {
    tree_style: TreeStyle,
    hierarchy: HierarchicalLayout,
    spring: SpringLayout,
}

impl LayoutSelector {
    pub fn new(tree_style: TreeStyle, hierarchy: HierarchicalLayout, spring: SpringLayout) -> Self {
        Self {
            tree_style,
            hierarchy,
            spring,
        }
    }

    pub fn select(&self, graph: &DependencyGraph) -> Result<LayoutOutcome, DepDrawError> {
        let (strategy, positions) = if TreeClassifier::is_tree(graph) {
            match self.tree_style {
                TreeStyle::Radial => {
                    let polar = self
                        .hierarchy
                        .with_width(TAU)
                        .with_x_center(0.0)
                        .layout(graph, graph.root())?;
                    (LayoutStrategy::Radial, polar.to_cartesian_from_polar())
                }
                TreeStyle::TopDown => (
                    LayoutStrategy::Hierarchical,
                    self.hierarchy.layout(graph, graph.root())?,
                ),
            }
        } else {
            (LayoutStrategy::ForceDirected, self.spring.layout(graph))
        };

        Ok(LayoutOutcome {
            strategy,
            positions,
            nodes: render_nodes(graph),
            edges: render_edges(graph),
        })
    }
}

fn render_nodes(graph: &DependencyGraph) -> Vec<RenderNode> {
    graph
        .graph()
        .node_weights()
        .map(|node| RenderNode {
            name: node.name().to_string(),
            label: node.label().to_string(),
            color: node.render_color(),
        })
        .collect()
}

fn render_edges(graph: &DependencyGraph) -> Vec<RenderEdge> {
    graph
        .graph()
        .raw_edges()
        .iter()
        .map(|edge| {
            let target = graph.node(edge.target());
            let color = match edge.weight {
                EdgeKind::Root => RenderColor::Root,
                EdgeKind::Structural => target.render_color(),
            };
            RenderEdge {
                from: graph.node(edge.source()).name().to_string(),
                to: target.name().to_string(),
                kind: edge.weight,
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorTag, NodeRecord};
    use crate::graph::DependencyGraphBuilder;

    fn tree() -> DependencyGraph {
        DependencyGraphBuilder::default()
            .build(&[
                NodeRecord::new("A", ColorTag::Primary)
                    .with_sub_nodes(["B"])
                    .with_original_dependencies(["X"]),
                NodeRecord::new("B", ColorTag::Secondary),
            ])
            .unwrap()
    }

    fn diamond() -> DependencyGraph {
        DependencyGraphBuilder::default()
            .build(&[
                NodeRecord::new("A", ColorTag::Primary).with_sub_nodes(["B", "C"]),
                NodeRecord::new("B", ColorTag::Primary).with_sub_nodes(["D"]),
                NodeRecord::new("C", ColorTag::Primary).with_sub_nodes(["D"]),
                NodeRecord::new("D", ColorTag::Secondary),
            ])
            .unwrap()
    }

    #[test]
    fn test_top_down_tree_uses_hierarchy() {
        let selector = LayoutSelector::new(
            TreeStyle::TopDown,
            HierarchicalLayout::default(),
            SpringLayout::default(),
        );
        let outcome = selector.select(&tree()).unwrap();

        assert_eq!(outcome.strategy, LayoutStrategy::Hierarchical);
        assert!(outcome.is_tree());
        let a = outcome.positions.get("A").unwrap();
        assert_eq!(a.x, 0.5);
        assert!((a.y + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_radial_tree_is_remapped() {
        let outcome = LayoutSelector::default().select(&tree()).unwrap();

        assert_eq!(outcome.strategy, LayoutStrategy::Radial);
        // Root sits at radius zero, so it lands on the origin
        let root = outcome.positions.get("super").unwrap();
        assert!(root.x.abs() < 1e-12 && root.y.abs() < 1e-12);

        // Single-child chain: angle 0, radii -0.2 and -0.4
        let b = outcome.positions.get("B").unwrap();
        assert!((b.x + 0.4).abs() < 1e-12);
        assert!(b.y.abs() < 1e-12);
    }

    #[test]
    fn test_non_tree_falls_back_to_spring() {
        let outcome = LayoutSelector::default().select(&diamond()).unwrap();

        assert_eq!(outcome.strategy, LayoutStrategy::ForceDirected);
        assert!(!outcome.is_tree());
        assert_eq!(outcome.positions.len(), 5);
    }

    #[test]
    fn test_render_attributes() {
        let outcome = LayoutSelector::default().select(&tree()).unwrap();

        let colors: Vec<_> = outcome
            .nodes
            .iter()
            .map(|node| (node.name.as_str(), node.color))
            .collect();
        assert_eq!(
            colors,
            vec![
                ("A", RenderColor::Primary),
                ("B", RenderColor::Secondary),
                ("super", RenderColor::Root),
            ]
        );

        let root_edge = outcome.edges.iter().find(|e| e.from == "super").unwrap();
        assert_eq!(root_edge.kind, EdgeKind::Root);
        assert_eq!(root_edge.color, RenderColor::Root);

        let structural = outcome.edges.iter().find(|e| e.from == "A").unwrap();
        assert_eq!(structural.to, "B");
        assert_eq!(structural.color, RenderColor::Secondary);
    }
}
