use petgraph::graph::NodeIndex;

use super::{Position, PositionMap};
use crate::constants::layout::{TREE_WIDTH, VERTICAL_GAP, VERTICAL_START, X_CENTER};
use crate::error::DepDrawError;
use crate::graph::DependencyGraph;

/// Horizontal slot handed to a subtree during hierarchical placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub width: f64,
    pub y: f64,
    pub x_center: f64,
}

impl Slot {
    /// Split this slot evenly among `count` children one level down
    ///
    /// The child slots are contiguous, left to right, and together span
    /// exactly this slot's width.
    pub fn split(&self, count: usize, vertical_gap: f64) -> Vec<Slot> {
        if count == 0 {
            return Vec::new();
        }

        let dx = self.width / count as f64;
        let mut next_x = self.x_center - self.width / 2.0 - dx / 2.0;

        (0..count)
            .map(|_| {
                next_x += dx;
                Slot {
                    width: dx,
                    y: self.y - vertical_gap,
                    x_center: next_x,
                }
            })
            .collect()
    }
}

/// Recursive top-down layout for rooted trees
///
/// The root sits at `(x_center, vertical_start)`. Each node's children share
/// its horizontal slot equally and sit `vertical_gap` below it, in the order
/// reported by [`DependencyGraph::children`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HierarchicalLayout {
    pub width: f64,
    pub vertical_gap: f64,
    pub vertical_start: f64,
    pub x_center: f64,
}

impl Default for HierarchicalLayout {
    fn default() -> Self {
        Self {
            width: TREE_WIDTH,
            vertical_gap: VERTICAL_GAP,
            vertical_start: VERTICAL_START,
            x_center: X_CENTER,
        }
    }
}

impl HierarchicalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_vertical_gap(mut self, vertical_gap: f64) -> Self {
        self.vertical_gap = vertical_gap;
        self
    }

    pub fn with_vertical_start(mut self, vertical_start: f64) -> Self {
        self.vertical_start = vertical_start;
        self
    }

    pub fn with_x_center(mut self, x_center: f64) -> Self {
        self.x_center = x_center;
        self
    }

    /// Lay out the tree hanging off `root`
    ///
    /// Only `root` and its descendants are placed. Fails with
    /// [`DepDrawError::NotATree`] when some descendant is reachable along more
    /// than one path. Laying out from the graph's own root additionally
    /// requires every node to be reachable from it.
    pub fn layout(
        &self,
        graph: &DependencyGraph,
        root: NodeIndex,
    ) -> Result<PositionMap, DepDrawError> {
        validate_tree(graph, root)?;

        let slot = Slot {
            width: self.width,
            y: self.vertical_start,
            x_center: self.x_center,
        };

        Ok(self
            .place(graph, root, slot)
            .into_iter()
            .map(|(idx, pos)| (graph.node(idx).name().to_string(), pos))
            .collect())
    }

    // Each call owns its result; parents merge their children's placements
    fn place(
        &self,
        graph: &DependencyGraph,
        node: NodeIndex,
        slot: Slot,
    ) -> Vec<(NodeIndex, Position)> {
        let mut placed = vec![(node, Position::new(slot.x_center, slot.y))];

        let children = graph.children(node);
        let slots = slot.split(children.len(), self.vertical_gap);
        for (child, child_slot) in children.into_iter().zip(slots) {
            placed.extend(self.place(graph, child, child_slot));
        }

        placed
    }
}

fn validate_tree(graph: &DependencyGraph, root: NodeIndex) -> Result<(), DepDrawError> {
    let mut seen = vec![false; graph.node_count()];
    let Some(slot) = seen.get_mut(root.index()) else {
        return Err(DepDrawError::NotATree {
            reason: format!("root index {} is not part of the graph", root.index()),
        });
    };
    *slot = true;

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for child in graph.children(node) {
            if seen[child.index()] {
                return Err(DepDrawError::NotATree {
                    reason: format!(
                        "node '{}' is reachable from '{}' along more than one path",
                        graph.node(child).name(),
                        graph.node(root).name()
                    ),
                });
            }
            seen[child.index()] = true;
            stack.push(child);
        }
    }

    if root != graph.root() {
        return Ok(());
    }

    let unreached: Vec<&str> = graph
        .graph()
        .node_indices()
        .filter(|idx| !seen[idx.index()])
        .map(|idx| graph.node(idx).name())
        .collect();

    if let Some(first) = unreached.first() {
        return Err(DepDrawError::NotATree {
            reason: format!(
                "{} node(s) unreachable from '{}', including '{}'",
                unreached.len(),
                graph.node(root).name(),
                first
            ),
        });
    }

    Ok(())
}
