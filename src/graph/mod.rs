//! # Graph Construction Module
//!
//! This module turns the declared nodes of a dependency document into a
//! directed graph and decides whether that graph is a tree.
//!
//! ## Components
//!
//! - **DependencyGraphBuilder**: Builds the graph and injects the synthetic
//!   `"super"` root above every node that has no incoming edge
//! - **DependencyGraph**: The built graph, with a name index and an explicit
//!   child ordering contract
//! - **TreeClassifier**: Checks whether hierarchical layout is applicable
//!
//! ## Example
//!
//! ```
//! use depdraw::core::{ColorTag, NodeRecord};
//! use depdraw::graph::{DependencyGraphBuilder, TreeClassifier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = vec![
//!     NodeRecord::new("A", ColorTag::Primary).with_sub_nodes(["B"]),
//!     NodeRecord::new("B", ColorTag::Secondary),
//! ];
//!
//! let graph = DependencyGraphBuilder::default().build(&records)?;
//!
//! assert_eq!(graph.node_count(), 3);
//! assert!(graph.contains_edge("super", "A"));
//! assert!(graph.contains_edge("A", "B"));
//! assert!(TreeClassifier::is_tree(&graph));
//! # Ok(())
//! # }
//! ```

mod builder;
mod classifier;
mod types;

// Re-export main types and builders
pub use builder::DependencyGraphBuilder;
pub use classifier::TreeClassifier;
pub use types::{
    DependencyGraph, EdgeKind, EdgeSource, GraphNode, LabelStyle, RenderColor,
};
