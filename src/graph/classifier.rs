//! Tree classification for built dependency graphs

use petgraph::algo::connected_components;

use super::types::DependencyGraph;
use crate::error::DepDrawError;

/// Decides whether a dependency graph can be laid out hierarchically
pub struct TreeClassifier;

impl TreeClassifier {
    /// A graph is a tree iff it is weakly connected and has `|V| - 1` edges
    pub fn is_tree(graph: &DependencyGraph) -> bool {
        Self::ensure_tree(graph).is_ok()
    }

    /// Like [`TreeClassifier::is_tree`], but explains why a graph is rejected
    pub fn ensure_tree(graph: &DependencyGraph) -> Result<(), DepDrawError> {
        let nodes = graph.node_count();
        let edges = graph.edge_count();

        if nodes == 0 {
            return Err(DepDrawError::NotATree {
                reason: "graph is empty".to_string(),
            });
        }

        if edges != nodes - 1 {
            return Err(DepDrawError::NotATree {
                reason: format!(
                    "{nodes} nodes need exactly {} edges, found {edges}",
                    nodes - 1
                ),
            });
        }

        // Directed graphs are treated as undirected here, i.e. weak connectivity
        let components = connected_components(graph.graph());
        if components != 1 {
            return Err(DepDrawError::NotATree {
                reason: format!("graph has {components} disconnected components"),
            });
        }

        Ok(())
    }
}
