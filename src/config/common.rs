//! Layout configuration shared by the `draw` and `layout` commands

use crate::common::LayoutArgs;
use crate::error::DepDrawError;
use crate::graph::{DependencyGraphBuilder, EdgeSource, LabelStyle};
use crate::layout::{HierarchicalLayout, LayoutSelector, SpringLayout, TreeStyle};

/// How a document is turned into a graph and laid out
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Which declared relationship becomes the graph's edges
    pub edge_source: EdgeSource,
    /// How node labels are derived from node names
    pub label_style: LabelStyle,
    /// Presentation used when the graph is a tree
    pub tree_style: TreeStyle,
    /// Parameters of the fallback force-directed layout
    pub spring: SpringLayout,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            edge_source: EdgeSource::default(),
            label_style: LabelStyle::default(),
            tree_style: TreeStyle::default(),
            spring: SpringLayout::default(),
        }
    }
}

impl LayoutOptions {
    /// Create a builder for LayoutOptions
    pub fn builder() -> LayoutOptionsBuilder {
        LayoutOptionsBuilder::default()
    }

    pub fn graph_builder(&self) -> DependencyGraphBuilder {
        DependencyGraphBuilder::new(self.edge_source, self.label_style)
    }

    pub fn selector(&self) -> LayoutSelector {
        LayoutSelector::new(self.tree_style, HierarchicalLayout::default(), self.spring)
    }
}

impl TryFrom<LayoutArgs> for LayoutOptions {
    type Error = DepDrawError;

    fn try_from(args: LayoutArgs) -> Result<Self, Self::Error> {
        LayoutOptions::builder()
            .edge_source(args.edge_source)
            .label_style(args.labels)
            .tree_style(args.tree_style)
            .repulsion(args.repulsion)
            .iterations(args.iterations)
            .seed(args.seed)
            .build()
    }
}

/// Builder for LayoutOptions
#[derive(Default)]
pub struct LayoutOptionsBuilder {
    edge_source: EdgeSource,
    label_style: LabelStyle,
    tree_style: TreeStyle,
    repulsion: Option<f64>,
    iterations: Option<usize>,
    seed: Option<u64>,
}

impl LayoutOptionsBuilder {
    pub fn edge_source(mut self, edge_source: EdgeSource) -> Self {
        self.edge_source = edge_source;
        self
    }

    pub fn label_style(mut self, label_style: LabelStyle) -> Self {
        self.label_style = label_style;
        self
    }

    pub fn tree_style(mut self, tree_style: TreeStyle) -> Self {
        self.tree_style = tree_style;
        self
    }

    pub fn repulsion(mut self, repulsion: f64) -> Self {
        self.repulsion = Some(repulsion);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<LayoutOptions, DepDrawError> {
        let defaults = SpringLayout::default();
        let k = self.repulsion.unwrap_or(defaults.k);
        if !k.is_finite() || k <= 0.0 {
            return Err(DepDrawError::ConfigurationError {
                message: format!("Repulsion must be a positive number, got {k}"),
            });
        }

        Ok(LayoutOptions {
            edge_source: self.edge_source,
            label_style: self.label_style,
            tree_style: self.tree_style,
            spring: SpringLayout::new(
                k,
                self.iterations.unwrap_or(defaults.iterations),
                self.seed.unwrap_or(defaults.seed),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = LayoutOptions::builder().build().unwrap();
        assert_eq!(options, LayoutOptions::default());
    }

    #[test]
    fn test_builder_overrides() {
        let options = LayoutOptions::builder()
            .edge_source(EdgeSource::OriginalDependencies)
            .tree_style(TreeStyle::TopDown)
            .repulsion(0.5)
            .iterations(10)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(options.edge_source, EdgeSource::OriginalDependencies);
        assert_eq!(options.tree_style, TreeStyle::TopDown);
        assert_eq!(options.spring, SpringLayout::new(0.5, 10, 42));
    }

    #[test]
    fn test_non_positive_repulsion_rejected() {
        for k in [0.0, -1.0, f64::NAN] {
            let err = LayoutOptions::builder().repulsion(k).build().unwrap_err();
            assert!(matches!(err, DepDrawError::ConfigurationError { .. }));
        }
    }
}
