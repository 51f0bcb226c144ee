//! Headless driver that runs the engine under a cooling schedule.
//!
//! [`Simulation`] bundles a graph, its canvas and ideal edge length, an
//! [`Engine`], and a [`CoolingSchedule`]. Each [`Simulation::tick`] performs
//! exactly one layout step followed by one cooling step. It has no notion of
//! time or frames: an interactive front end calls `tick` from its own frame
//! callback, while batch callers use [`Simulation::run`].

use log::{debug, info};

use drift_core::{geometry::Canvas, graph::Graph};

use crate::{
    DriftError,
    config::LayoutConfig,
    cooling::{Convergence, CoolingSchedule},
    engine::{Engine, ideal_edge_length},
    generator::GraphGenerator,
};

/// Outcome of a single [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Number of steps completed, including this one.
    pub iteration: usize,
    /// Temperature the step ran at (before cooling).
    pub temperature: f64,
    /// Largest vertex displacement in the step.
    pub max_displacement: f64,
    /// Stopping status after cooling.
    pub convergence: Convergence,
}

/// Final state reported by [`Simulation::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub iterations: usize,
    pub temperature: f64,
    pub max_displacement: f64,
    /// [`Convergence::Running`] only if the iteration cap was hit first.
    pub convergence: Convergence,
}

/// A graph being laid out.
///
/// # Examples
///
/// ```
/// use drift::{config::LayoutConfig, cooling::Convergence, simulation::Simulation};
/// use drift_core::{geometry::Point, graph::Graph};
///
/// let graph = Graph::new(
///     vec![Point::new(100.0, 100.0), Point::new(300.0, 200.0), Point::new(500.0, 400.0)],
///     [(0, 1), (1, 2)],
/// )
/// .unwrap();
///
/// let mut simulation = Simulation::new(graph, &LayoutConfig::default()).unwrap();
/// let summary = simulation.run();
///
/// assert_ne!(summary.convergence, Convergence::Running);
/// assert!(summary.iterations <= 90);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    graph: Graph,
    canvas: Canvas,
    k: f64,
    engine: Engine,
    cooling: CoolingSchedule,
    max_iterations: usize,
    last_displacement: Option<f64>,
}

impl Simulation {
    /// Creates a simulation for an existing graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`LayoutConfig::validate`].
    pub fn new(graph: Graph, config: &LayoutConfig) -> Result<Self, DriftError> {
        config.validate()?;
        let canvas = config.canvas().to_canvas()?;
        let k = ideal_edge_length(canvas, graph.vertex_count());
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            k;
            "Simulation created"
        );

        Ok(Self {
            graph,
            canvas,
            k,
            engine: Engine::new(config.forces())?,
            cooling: CoolingSchedule::new(config.cooling())?,
            max_iterations: config.cooling().max_iterations(),
            last_displacement: None,
        })
    }

    /// Generates a random graph from the generator section of `config` and
    /// wraps it in a simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the requested
    /// edge count is infeasible.
    pub fn random(config: &LayoutConfig) -> Result<Self, DriftError> {
        config.validate()?;
        let canvas = config.canvas().to_canvas()?;
        let generator_config = config.generator();
        let graph = GraphGenerator::from_config(generator_config).generate(
            generator_config.vertices(),
            generator_config.edges(),
            canvas,
        )?;
        Self::new(graph, config)
    }

    /// Returns the graph in its current layout
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the canvas
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Returns the ideal edge length used for this graph
    pub fn ideal_edge_length(&self) -> f64 {
        self.k
    }

    /// Returns the temperature the next step will run at
    pub fn temperature(&self) -> f64 {
        self.cooling.temperature()
    }

    /// Returns the number of completed steps
    pub fn iteration(&self) -> usize {
        self.cooling.iteration()
    }

    /// Returns the stopping status; [`Convergence::Running`] before the first tick
    pub fn convergence(&self) -> Convergence {
        match self.last_displacement {
            Some(displacement) => self.cooling.convergence(displacement),
            None => Convergence::Running,
        }
    }

    /// Runs one layout step at the current temperature, then cools.
    ///
    /// Ticking a converged simulation is allowed and keeps refining the
    /// layout at ever lower temperatures.
    pub fn tick(&mut self) -> Tick {
        let temperature = self.cooling.temperature();
        let max_displacement = self
            .engine
            .step(&mut self.graph, self.canvas, self.k, temperature);
        self.cooling.cool();
        self.last_displacement = Some(max_displacement);

        let tick = Tick {
            iteration: self.cooling.iteration(),
            temperature,
            max_displacement,
            convergence: self.convergence(),
        };
        debug!(
            iteration = tick.iteration,
            temperature,
            max_displacement,
            convergence:% = tick.convergence;
            "Tick"
        );
        tick
    }

    /// Ticks until the layout settles or freezes, or the iteration cap is hit.
    pub fn run(&mut self) -> Summary {
        let mut last = None;
        while self.iteration() < self.max_iterations {
            let tick = self.tick();
            last = Some(tick);
            if tick.convergence.is_done() {
                break;
            }
        }

        let summary = Summary {
            iterations: self.iteration(),
            temperature: self.temperature(),
            max_displacement: last.map_or(0.0, |tick| tick.max_displacement),
            convergence: self.convergence(),
        };
        info!(
            iterations = summary.iterations,
            temperature = summary.temperature,
            max_displacement = summary.max_displacement,
            convergence:% = summary.convergence;
            "Layout finished"
        );
        summary
    }

    /// Replaces the graph and restarts the cooling schedule.
    ///
    /// The ideal edge length is recomputed for the new vertex count.
    pub fn reset(&mut self, graph: Graph) {
        self.k = ideal_edge_length(self.canvas, graph.vertex_count());
        self.graph = graph;
        self.cooling.reset();
        self.last_displacement = None;
        debug!(vertices = self.graph.vertex_count(), k = self.k; "Simulation reset");
    }

    /// Consumes the simulation, returning the laid-out graph
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}
