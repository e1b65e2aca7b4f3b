use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{DependencyGraph, EdgeKind, EdgeSource, GraphNode, LabelStyle};
use crate::constants::graph::SUPER_ROOT;
use crate::core::{ColorTag, NodeRecord};
use crate::error::DepDrawError;

/// Builder for constructing dependency graphs
///
/// Turns the flat list of declared nodes into a directed graph, then attaches
/// every node without incoming edges to a synthetic `"super"` root so the
/// whole graph hangs off a single entry point.
pub struct DependencyGraphBuilder {
    graph: DiGraph<GraphNode, EdgeKind>,
    indices: HashMap<String, NodeIndex>,
    edge_source: EdgeSource,
    label_style: LabelStyle,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new(EdgeSource::default(), LabelStyle::default())
    }
}

impl DependencyGraphBuilder {
    /// Create a new dependency graph builder
    ///
    /// # Arguments
    /// * `edge_source` - Which declared relationship becomes the graph's edges
    /// * `label_style` - How node labels are derived from node names
    pub fn new(edge_source: EdgeSource, label_style: LabelStyle) -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
            edge_source,
            label_style,
        }
    }

    /// Build the graph for `records`
    ///
    /// Fails with [`DepDrawError::Referential`] when an edge names a node that
    /// is not declared, and with [`DepDrawError::DuplicateNode`] /
    /// [`DepDrawError::ReservedNodeName`] when the declared names are not a
    /// valid key set.
    pub fn build(mut self, records: &[NodeRecord]) -> Result<DependencyGraph, DepDrawError> {
        let by_name = index_records(records)?;

        let mut record_indices = Vec::with_capacity(records.len());
        for record in records {
            let from = self.ensure_node(record);
            record_indices.push(from);

            // Only primary nodes fan out along SubNodeIndices
            if record.color == ColorTag::Primary && self.edge_source == EdgeSource::SubNodes {
                for child_name in &record.sub_nodes {
                    let child = lookup(&by_name, child_name, &record.name)?;
                    let to = self.ensure_node(child);
                    self.add_structural_edge(from, to);
                }
            }
        }

        if self.edge_source == EdgeSource::OriginalDependencies {
            for (record, &to) in records.iter().zip(&record_indices) {
                for parent_name in &record.original_dependencies {
                    let parent = lookup(&by_name, parent_name, &record.name)?;
                    let from = self.ensure_node(parent);
                    self.add_structural_edge(from, to);
                }
            }
        }

        let root = self.graph.add_node(GraphNode::root());
        for &idx in &record_indices {
            if self.graph[idx].in_degree() == 0 {
                self.graph.add_edge(root, idx, EdgeKind::Root);
            }
        }
        self.indices.insert(SUPER_ROOT.to_string(), root);

        Ok(DependencyGraph {
            graph: self.graph,
            indices: self.indices,
            root,
        })
    }

    fn ensure_node(&mut self, record: &NodeRecord) -> NodeIndex {
        if let Some(&idx) = self.indices.get(&record.name) {
            return idx;
        }

        let node = GraphNode::record(
            &record.name,
            record.color,
            record.has_dependencies(),
            self.label_style,
        );
        let idx = self.graph.add_node(node);
        self.indices.insert(record.name.clone(), idx);
        idx
    }

    // Repeated declarations of the same edge collapse into one
    fn add_structural_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if self.graph.contains_edge(from, to) {
            return;
        }
        self.graph.add_edge(from, to, EdgeKind::Structural);
        self.graph[to].increment_in_degree();
    }
}

fn index_records(records: &[NodeRecord]) -> Result<HashMap<&str, &NodeRecord>, DepDrawError> {
    let mut by_name = HashMap::with_capacity(records.len());
    for record in records {
        if record.name == SUPER_ROOT {
            return Err(DepDrawError::ReservedNodeName {
                name: record.name.clone(),
            });
        }
        if by_name.insert(record.name.as_str(), record).is_some() {
            return Err(DepDrawError::DuplicateNode {
                name: record.name.clone(),
            });
        }
    }
    Ok(by_name)
}

fn lookup<'a>(
    by_name: &HashMap<&str, &'a NodeRecord>,
    name: &str,
    referenced_by: &str,
) -> Result<&'a NodeRecord, DepDrawError> {
    by_name
        .get(name)
        .copied()
        .ok_or_else(|| DepDrawError::Referential {
            name: name.to_string(),
            referenced_by: referenced_by.to_string(),
        })
}
