//! Random graph generation.
//!
//! [`GraphGenerator`] builds graphs with uniformly random vertex positions
//! and uniformly random distinct undirected edges. It never produces
//! self-loops or duplicate edges.
//!
//! Two sampling strategies are used depending on how dense the request is:
//!
//! - **Sparse**: draw random distinct id pairs and reject pairs already
//!   present. Cheap when most pairs are still free.
//! - **Dense**: draw `edges` distinct indices without replacement from the
//!   enumerated list of all candidate pairs. Always terminates in a bounded
//!   number of draws, even when `edges` equals the maximum.
//!
//! Infeasible requests are rejected up front, before any sampling happens.

use std::collections::HashSet;

use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::index};

use drift_core::{
    geometry::{Canvas, Point},
    graph::{Graph, max_edge_count},
};

use crate::{DriftError, config::GeneratorConfig};

/// Seedable random graph generator.
///
/// # Examples
///
/// ```
/// use drift::generator::GraphGenerator;
/// use drift_core::geometry::Canvas;
///
/// let canvas = Canvas::new(800.0, 600.0).unwrap();
/// let mut generator = GraphGenerator::seeded(42);
/// let graph = generator.generate(10, 15, canvas).unwrap();
///
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 15);
/// ```
pub struct GraphGenerator {
    rng: StdRng,
    dense_ratio: f64,
}

impl GraphGenerator {
    /// Creates a generator with a fixed seed; equal seeds produce equal graphs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            dense_ratio: GeneratorConfig::default().dense_ratio(),
        }
    }

    /// Creates a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            dense_ratio: GeneratorConfig::default().dense_ratio(),
        }
    }

    /// Creates a generator from configuration, seeded if the config has a seed
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let generator = match config.seed() {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        generator.with_dense_ratio(config.dense_ratio())
    }

    /// Sets the fraction of all possible edges above which sampling switches
    /// to without-replacement
    pub fn with_dense_ratio(mut self, dense_ratio: f64) -> Self {
        self.dense_ratio = dense_ratio;
        self
    }

    /// Generates a random graph.
    ///
    /// Vertices get ids `0..vertex_count` and positions drawn uniformly from
    /// `[0, width) × [0, height)`. Edges are distinct unordered pairs of
    /// distinct vertices.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidParameter`] if `edge_count` exceeds
    /// `vertex_count·(vertex_count−1)/2`. No graph is produced in that case.
    pub fn generate(
        &mut self,
        vertex_count: usize,
        edge_count: usize,
        canvas: Canvas,
    ) -> Result<Graph, DriftError> {
        let max_edges = max_edge_count(vertex_count);
        if edge_count > max_edges {
            return Err(DriftError::InvalidParameter(format!(
                "cannot place {edge_count} distinct edges among {vertex_count} vertices \
                 (at most {max_edges})"
            )));
        }

        let positions: Vec<Point> = (0..vertex_count)
            .map(|_| {
                Point::new(
                    self.rng.random_range(0.0..canvas.width()),
                    self.rng.random_range(0.0..canvas.height()),
                )
            })
            .collect();

        let dense = edge_count > 0 && edge_count as f64 > max_edges as f64 * self.dense_ratio;
        let edges = if dense {
            self.sample_dense(vertex_count, edge_count, max_edges)
        } else {
            self.sample_sparse(vertex_count, edge_count)
        };
        debug!(dense, edge_count, max_edges; "Sampled edges");

        let graph = Graph::new(positions, edges)?;
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count();
            "Generated random graph"
        );
        Ok(graph)
    }

    /// Rejection sampling of distinct canonical pairs.
    fn sample_sparse(&mut self, vertex_count: usize, edge_count: usize) -> Vec<(usize, usize)> {
        let mut used = HashSet::with_capacity(edge_count);
        let mut edges = Vec::with_capacity(edge_count);
        let mut rejected = 0usize;

        while edges.len() < edge_count {
            let a = self.rng.random_range(0..vertex_count);
            // Second endpoint drawn from the remaining ids, so a != b
            let mut b = self.rng.random_range(0..vertex_count - 1);
            if b >= a {
                b += 1;
            }
            let pair = (a.min(b), a.max(b));
            if used.insert(pair) {
                edges.push(pair);
            } else {
                rejected += 1;
            }
        }

        trace!(rejected; "Sparse sampling finished");
        edges
    }

    /// Sampling without replacement from the full candidate list.
    fn sample_dense(
        &mut self,
        vertex_count: usize,
        edge_count: usize,
        max_edges: usize,
    ) -> Vec<(usize, usize)> {
        let candidates: Vec<(usize, usize)> = (0..vertex_count)
            .flat_map(|a| (a + 1..vertex_count).map(move |b| (a, b)))
            .collect();
        debug_assert_eq!(candidates.len(), max_edges);

        index::sample(&mut self.rng, max_edges, edge_count)
            .into_iter()
            .map(|i| candidates[i])
            .collect()
    }
}
