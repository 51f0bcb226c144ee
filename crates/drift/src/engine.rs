//! Fruchterman–Reingold force computation.
//!
//! One call to [`Engine::step`] performs a single discrete simulation step:
//!
//! 1. Every ordered pair of distinct vertices repels with magnitude `k²/dist`.
//! 2. Every edge attracts its endpoints with magnitude `dist²/k`, applied
//!    equally and oppositely to both ends.
//! 3. Each vertex's net force is capped at the current temperature.
//! 4. The vertex moves by the capped force and is clamped to the canvas.
//!
//! `dist` is always the Euclidean distance plus a small epsilon, so
//! coincident vertices never divide by zero.
//!
//! The per-vertex force accumulators live in a scratch buffer owned by the
//! [`Engine`], indexed by vertex id and zeroed at the start of every step.
//! Nothing carries over from one step to the next.

use log::{debug, trace, warn};

use drift_core::{
    geometry::{Canvas, Point},
    graph::{Graph, VertexId},
};

use crate::{DriftError, config::ForceConfig};

/// Returns the ideal edge length `k = sqrt(width·height / vertex_count)`.
///
/// The result depends only on canvas area and vertex count, so callers
/// compute it once per graph rather than once per step. An empty graph is
/// treated as having one vertex.
///
/// # Examples
///
/// ```
/// # use drift::engine::ideal_edge_length;
/// # use drift_core::geometry::Canvas;
/// let canvas = Canvas::new(400.0, 100.0).unwrap();
/// assert_eq!(ideal_edge_length(canvas, 4), 100.0);
/// ```
pub fn ideal_edge_length(canvas: Canvas, vertex_count: usize) -> f64 {
    (canvas.area() / vertex_count.max(1) as f64).sqrt()
}

/// Repulsive force on a vertex displaced by `delta` from another vertex.
///
/// Points along `delta` (away from the other vertex) with magnitude `k²/dist`.
pub fn repulsion(delta: Point, k: f64, epsilon: f64) -> Point {
    let dist = delta.hypot() + epsilon;
    let ratio = k / dist;
    delta.scale(ratio * ratio)
}

/// Spring force between edge endpoints separated by `delta = v − u`.
///
/// Points along `delta` with magnitude `dist²/k`. The caller subtracts it
/// from `v` and adds it to `u`, pulling the endpoints together.
pub fn attraction(delta: Point, k: f64, epsilon: f64) -> Point {
    let dist = delta.hypot() + epsilon;
    delta.scale(dist / k)
}

/// Force-directed layout engine.
///
/// The engine holds only configuration and a reusable scratch buffer; the
/// graph, canvas, `k` and temperature are all passed per call.
#[derive(Debug, Clone)]
pub struct Engine {
    epsilon: f64,
    forces: Vec<Point>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            epsilon: ForceConfig::default().epsilon(),
            forces: Vec::new(),
        }
    }
}

impl Engine {
    /// Create a new engine with the given force constants.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidParameter`] if the configuration fails
    /// [`ForceConfig::validate`].
    pub fn new(config: &ForceConfig) -> Result<Self, DriftError> {
        config.validate()?;
        Ok(Self {
            epsilon: config.epsilon(),
            forces: Vec::new(),
        })
    }

    /// Returns the distance epsilon
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Computes the net pre-cap force on every vertex.
    ///
    /// The returned slice is indexed by vertex id. Repulsion is summed over
    /// vertex pairs in id order, then attraction over edges in insertion
    /// order.
    pub fn accumulate_forces(&mut self, graph: &Graph, k: f64) -> &[Point] {
        self.forces.clear();
        self.forces.resize(graph.vertex_count(), Point::ZERO);

        let vertices = graph.vertices();
        for (i, v) in vertices.iter().enumerate() {
            let mut force = Point::ZERO;
            for (j, u) in vertices.iter().enumerate() {
                if i == j {
                    continue;
                }
                let delta = v.position().sub_point(u.position());
                force = force.add_point(repulsion(delta, k, self.epsilon));
            }
            self.forces[i] = force;
        }

        for edge in graph.edges() {
            let (v, u) = (edge.source().index(), edge.target().index());
            let delta = vertices[v].position().sub_point(vertices[u].position());
            let force = attraction(delta, k, self.epsilon);
            self.forces[v] = self.forces[v].sub_point(force);
            self.forces[u] = self.forces[u].add_point(force);
        }

        &self.forces
    }

    /// Advances the layout by one step, moving vertices in place.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph whose vertex positions are updated
    /// * `canvas` - Bounds that positions are clamped into
    /// * `k` - Ideal edge length, see [`ideal_edge_length`]
    /// * `temperature` - Maximum distance any vertex may move this step
    ///
    /// Returns the largest displacement applied to any vertex, measured after
    /// the temperature cap and before clamping to the canvas. It is never
    /// greater than `temperature`. An empty graph is left untouched and
    /// yields `0.0`. A vertex whose net force is not finite stays where it is.
    pub fn step(&mut self, graph: &mut Graph, canvas: Canvas, k: f64, temperature: f64) -> f64 {
        if graph.is_empty() {
            return 0.0;
        }

        self.accumulate_forces(graph, k);

        let mut max_displacement = 0.0f64;
        for (index, force) in self.forces.iter().enumerate() {
            let mut displacement = force.clamp_length(temperature);
            if !displacement.is_finite() {
                warn!(vertex = index, force:? = force; "Non-finite force, vertex not moved");
                displacement = Point::ZERO;
            }
            max_displacement = max_displacement.max(displacement.hypot());

            let id = VertexId::new(index);
            let position = graph.vertices()[index].position();
            let moved = canvas.clamp(position.add_point(displacement));
            trace!(vertex = index, force:? = force, position:? = moved; "Moved vertex");
            graph.set_position(id, moved);
        }

        debug!(
            vertices = graph.vertex_count(),
            temperature,
            max_displacement;
            "Layout step complete"
        );
        max_displacement
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use crate::generator::GraphGenerator;

    use super::*;

    proptest! {
        #[test]
        fn positions_stay_on_canvas(
            n in 0usize..15,
            density in 0.0f64..1.0,
            seed in any::<u64>(),
            temperature in 0.1f64..500.0,
            steps in 1usize..5,
        ) {
            let canvas = Canvas::new(120.0, 80.0).unwrap();
            let max_edges = drift_core::graph::max_edge_count(n);
            let edges = (max_edges as f64 * density) as usize;
            let mut graph = GraphGenerator::seeded(seed).generate(n, edges, canvas).unwrap();
            let k = ideal_edge_length(canvas, n);
            let mut engine = Engine::default();

            for _ in 0..steps {
                let max = engine.step(&mut graph, canvas, k, temperature);
                prop_assert!(max.is_finite());
                prop_assert!(max <= temperature + 1e-9);
                for p in graph.positions() {
                    prop_assert!(canvas.contains(p), "{:?} escaped the canvas", p);
                }
            }
        }
    }
}
