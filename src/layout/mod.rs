//! # Layout Module
//!
//! Computes 2-D positions for every node of a [`DependencyGraph`].
//!
//! ## Strategies
//!
//! - **HierarchicalLayout**: recursive top-down placement for trees, where
//!   every child receives an equal share of its parent's horizontal slot
//! - **Polar remap**: the same placement read as `(angle, radius)` and turned
//!   into Cartesian coordinates, for a radial presentation
//! - **SpringLayout**: seeded Fruchterman-Reingold placement for graphs that
//!   are not trees
//! - **LayoutSelector**: picks between them and gathers the per-node render
//!   attributes
//!
//! ## Example
//!
//! ```
//! use depdraw::core::{ColorTag, NodeRecord};
//! use depdraw::graph::DependencyGraphBuilder;
//! use depdraw::layout::{HierarchicalLayout, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = DependencyGraphBuilder::default().build(&[
//!     NodeRecord::new("A", ColorTag::Primary).with_sub_nodes(["B"]),
//!     NodeRecord::new("B", ColorTag::Secondary),
//! ])?;
//!
//! let positions = HierarchicalLayout::default().layout(&graph, graph.root())?;
//!
//! assert_eq!(positions.get("super"), Some(&Position::new(0.5, 0.0)));
//! assert_eq!(positions.get("A").map(|p| p.x), Some(0.5));
//! # Ok(())
//! # }
//! ```
//!
//! [`DependencyGraph`]: crate::graph::DependencyGraph

mod hierarchy;
mod selector;
mod spring;

use std::collections::BTreeMap;

use serde::Serialize;

pub use crate::core::Position;
pub use hierarchy::{HierarchicalLayout, Slot};
pub use selector::{LayoutOutcome, LayoutSelector, LayoutStrategy, RenderEdge, RenderNode, TreeStyle};
pub use spring::SpringLayout;

/// Node name to coordinate, one entry per laid-out node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PositionMap {
    positions: BTreeMap<String, Position>,
}

/// Axis-aligned bounding box of a [`PositionMap`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, position: Position) -> Option<Position> {
        self.positions.insert(name.into(), position)
    }

    pub fn get(&self, name: &str) -> Option<&Position> {
        self.positions.get(name)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Entries sorted by node name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Position)> {
        self.positions.iter().map(|(name, pos)| (name.as_str(), pos))
    }

    /// Read every `(x, y)` as `(angle, radius)` and convert to Cartesian
    pub fn to_cartesian_from_polar(&self) -> PositionMap {
        self.positions
            .iter()
            .map(|(name, pos)| {
                let (theta, r) = (pos.x, pos.y);
                (name.clone(), Position::new(r * theta.cos(), r * theta.sin()))
            })
            .collect()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut values = self.positions.values();
        let first = values.next()?;
        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(values.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }
}

impl FromIterator<(String, Position)> for PositionMap {
    fn from_iter<I: IntoIterator<Item = (String, Position)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn assert_close(actual: &Position, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < 1e-12 && (actual.y - y).abs() < 1e-12,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_polar_remap() {
        let map: PositionMap = [
            ("origin".to_string(), Position::new(1.234, 0.0)),
            ("east".to_string(), Position::new(0.0, 2.0)),
            ("north".to_string(), Position::new(FRAC_PI_2, 1.0)),
            ("west".to_string(), Position::new(PI, 0.5)),
        ]
        .into_iter()
        .collect();

        let cartesian = map.to_cartesian_from_polar();

        assert_eq!(cartesian.len(), 4);
        assert_close(cartesian.get("origin").unwrap(), 0.0, 0.0);
        assert_close(cartesian.get("east").unwrap(), 2.0, 0.0);
        assert_close(cartesian.get("north").unwrap(), 0.0, 1.0);
        assert_close(cartesian.get("west").unwrap(), -0.5, 0.0);
    }

    #[test]
    fn test_bounds() {
        let mut map = PositionMap::new();
        assert!(map.bounds().is_none());

        map.insert("a", Position::new(-1.0, 2.0));
        map.insert("b", Position::new(3.0, -4.0));
        let bounds = map.bounds().unwrap();

        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 3.0);
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let mut map = PositionMap::new();
        map.insert("b", Position::new(0.0, 0.0));
        map.insert("a", Position::new(1.0, 1.0));

        let names: Vec<_> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
