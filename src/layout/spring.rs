//! Force-directed layout for graphs that are not trees
//!
//! Implements the Fruchterman-Reingold model: every pair of nodes repels with
//! a force of `k² / d`, every edge pulls its endpoints together with `d² / k`,
//! and a linearly cooling temperature caps how far a node may move per
//! iteration. Initial positions come from a seeded RNG, so a given seed always
//! produces the same drawing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Position, PositionMap};
use crate::constants::layout::{SPRING_ITERATIONS, SPRING_K, SPRING_SEED};
use crate::graph::DependencyGraph;

/// Distances are clamped to this value to avoid division by zero
const MIN_DISTANCE: f64 = 0.01;

/// Configuration of the force-directed layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringLayout {
    /// Optimal distance between nodes; larger values spread the graph out
    pub k: f64,
    /// Number of simulation steps
    pub iterations: usize,
    /// Seed for the initial node positions
    pub seed: u64,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            k: SPRING_K,
            iterations: SPRING_ITERATIONS,
            seed: SPRING_SEED,
        }
    }
}

impl SpringLayout {
    pub fn new(k: f64, iterations: usize, seed: u64) -> Self {
        Self {
            k,
            iterations,
            seed,
        }
    }

    /// Lay out every node of `graph`, rescaled into `[-1, 1]²` around the origin
    pub fn layout(&self, graph: &DependencyGraph) -> PositionMap {
        let names: Vec<&str> = graph
            .graph()
            .node_indices()
            .map(|idx| graph.node(idx).name())
            .collect();

        match names.len() {
            0 => return PositionMap::new(),
            1 => {
                return names
                    .iter()
                    .map(|name| (name.to_string(), Position::new(0.0, 0.0)))
                    .collect();
            }
            _ => {}
        }

        let adjacency = undirected_adjacency(graph);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut positions: Vec<[f64; 2]> = (0..names.len())
            .map(|_| [rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)])
            .collect();

        self.simulate(&mut positions, &adjacency);
        rescale(&mut positions);

        names
            .into_iter()
            .zip(positions)
            .map(|(name, [x, y])| (name.to_string(), Position::new(x, y)))
            .collect()
    }

    fn simulate(&self, positions: &mut [[f64; 2]], adjacency: &[Vec<bool>]) {
        let n = positions.len();
        let k = if self.k > 0.0 {
            self.k
        } else {
            (1.0 / n as f64).sqrt()
        };

        let extent = extent(positions);
        let mut temperature = if extent > 0.0 { extent * 0.1 } else { 0.1 };
        let cooling = temperature / (self.iterations as f64 + 1.0);

        for _ in 0..self.iterations {
            let mut displacement = vec![[0.0_f64; 2]; n];

            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let dx = positions[i][0] - positions[j][0];
                    let dy = positions[i][1] - positions[j][1];
                    let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);

                    let attraction = if adjacency[i][j] { distance / k } else { 0.0 };
                    let force = k * k / (distance * distance) - attraction;

                    displacement[i][0] += dx * force;
                    displacement[i][1] += dy * force;
                }
            }

            for (position, delta) in positions.iter_mut().zip(&displacement) {
                let length = (delta[0] * delta[0] + delta[1] * delta[1])
                    .sqrt()
                    .max(MIN_DISTANCE);
                position[0] += delta[0] * temperature / length;
                position[1] += delta[1] * temperature / length;
            }

            temperature -= cooling;
        }
    }
}

fn undirected_adjacency(graph: &DependencyGraph) -> Vec<Vec<bool>> {
    let n = graph.node_count();
    let mut adjacency = vec![vec![false; n]; n];
    for edge in graph.graph().raw_edges() {
        let (a, b) = (edge.source().index(), edge.target().index());
        if a != b {
            adjacency[a][b] = true;
            adjacency[b][a] = true;
        }
    }
    adjacency
}

fn extent(positions: &[[f64; 2]]) -> f64 {
    let range = |axis: usize| {
        let (min, max) = positions
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[axis]), hi.max(p[axis]))
            });
        max - min
    };
    range(0).max(range(1))
}

// Center on the mean, then scale so the largest coordinate has magnitude 1
fn rescale(positions: &mut [[f64; 2]]) {
    let n = positions.len() as f64;
    let mean_x = positions.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = positions.iter().map(|p| p[1]).sum::<f64>() / n;

    let mut limit: f64 = 0.0;
    for p in positions.iter_mut() {
        p[0] -= mean_x;
        p[1] -= mean_y;
        limit = limit.max(p[0].abs()).max(p[1].abs());
    }

    if limit > 0.0 {
        for p in positions.iter_mut() {
            p[0] /= limit;
            p[1] /= limit;
        }
    }
}
