//! Configuration types for Drift layouts.
//!
//! This module provides the configuration structures that parameterize graph
//! generation, force computation, and the cooling schedule. All types
//! implement [`serde::Deserialize`] for loading from external sources, and
//! every field falls back to its default when omitted.
//!
//! # Overview
//!
//! - [`LayoutConfig`] - Top-level configuration combining every section.
//! - [`CanvasConfig`] - Canvas width and height.
//! - [`ForceConfig`] - Constants of the force model.
//! - [`CoolingConfig`] - Temperature schedule and stopping thresholds.
//! - [`GeneratorConfig`] - Parameters of the random graph generator.
//!
//! # Example
//!
//! ```
//! # use drift::config::LayoutConfig;
//! let config = LayoutConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.cooling().decay(), 0.95);
//! ```

use serde::Deserialize;

use drift_core::geometry::Canvas;

use crate::DriftError;

/// Top-level layout configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutConfig {
    /// Canvas section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Force model section.
    #[serde(default)]
    forces: ForceConfig,

    /// Cooling schedule section.
    #[serde(default)]
    cooling: CoolingConfig,

    /// Random graph section.
    #[serde(default)]
    generator: GeneratorConfig,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] from its sections.
    pub fn new(
        canvas: CanvasConfig,
        forces: ForceConfig,
        cooling: CoolingConfig,
        generator: GeneratorConfig,
    ) -> Self {
        Self {
            canvas,
            forces,
            cooling,
            generator,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the force model configuration.
    pub fn forces(&self) -> &ForceConfig {
        &self.forces
    }

    /// Returns the cooling schedule configuration.
    pub fn cooling(&self) -> &CoolingConfig {
        &self.cooling
    }

    /// Returns the generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Returns a mutable reference to the canvas configuration.
    pub fn canvas_mut(&mut self) -> &mut CanvasConfig {
        &mut self.canvas
    }

    /// Returns a mutable reference to the generator configuration.
    pub fn generator_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.generator
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidParameter`] or [`DriftError::Graph`] for
    /// the first invalid value found.
    pub fn validate(&self) -> Result<(), DriftError> {
        self.canvas.to_canvas()?;
        self.forces.validate()?;
        self.cooling.validate()?;
        self.generator.validate()
    }
}

/// Canvas dimensions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f64,
    height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CanvasConfig {
    /// Creates a canvas configuration.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the configured width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the configured height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the width.
    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }

    /// Sets the height.
    pub fn set_height(&mut self, height: f64) -> &mut Self {
        self.height = height;
        self
    }

    /// Builds a validated [`Canvas`].
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::Graph`] if either dimension is not positive and finite.
    pub fn to_canvas(&self) -> Result<Canvas, DriftError> {
        Ok(Canvas::new(self.width, self.height)?)
    }
}

/// Constants of the force model.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    /// Added to every distance before dividing by it.
    epsilon: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self { epsilon: 0.01 }
    }
}

impl ForceConfig {
    /// Creates a force configuration with the given distance epsilon.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Returns the distance epsilon.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// # Errors
    ///
    /// Returns [`DriftError::InvalidParameter`] unless `epsilon` is positive and finite.
    pub fn validate(&self) -> Result<(), DriftError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(DriftError::InvalidParameter(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Temperature schedule and stopping thresholds.
///
/// The temperature starts at `initial_temperature` and is multiplied by
/// `decay` after every step. Iteration stops once the largest displacement
/// drops below `move_threshold` or the temperature drops below
/// `temperature_floor`, whichever happens first. `max_iterations` is a hard
/// cap for drivers that loop until convergence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoolingConfig {
    initial_temperature: f64,
    decay: f64,
    temperature_floor: f64,
    move_threshold: f64,
    max_iterations: usize,
}

impl Default for CoolingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            decay: 0.95,
            temperature_floor: 1.0,
            move_threshold: 0.5,
            max_iterations: 10_000,
        }
    }
}

impl CoolingConfig {
    /// Creates a cooling configuration.
    ///
    /// # Arguments
    ///
    /// * `initial_temperature` - Starting temperature, caps the first step's displacement
    /// * `decay` - Geometric decay factor applied after every step
    /// * `temperature_floor` - Stop once the temperature falls below this
    /// * `move_threshold` - Stop once the largest displacement falls below this
    pub fn new(
        initial_temperature: f64,
        decay: f64,
        temperature_floor: f64,
        move_threshold: f64,
    ) -> Self {
        Self {
            initial_temperature,
            decay,
            temperature_floor,
            move_threshold,
            ..Self::default()
        }
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns the starting temperature.
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Returns the per-step decay factor.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Returns the temperature floor.
    pub fn temperature_floor(&self) -> f64 {
        self.temperature_floor
    }

    /// Returns the displacement threshold.
    pub fn move_threshold(&self) -> f64 {
        self.move_threshold
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Checks the schedule terminates.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidParameter`] unless
    /// `initial_temperature > 0`, `0 < decay < 1`, `temperature_floor > 0`
    /// and `move_threshold >= 0`, all finite.
    pub fn validate(&self) -> Result<(), DriftError> {
        let invalid = |name: &str, value: f64, rule: &str| {
            Err(DriftError::InvalidParameter(format!(
                "{name} must be {rule}, got {value}"
            )))
        };

        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return invalid("initial_temperature", self.initial_temperature, "positive");
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return invalid("decay", self.decay, "in (0, 1)");
        }
        if !(self.temperature_floor.is_finite() && self.temperature_floor > 0.0) {
            return invalid("temperature_floor", self.temperature_floor, "positive");
        }
        if !(self.move_threshold.is_finite() && self.move_threshold >= 0.0) {
            return invalid("move_threshold", self.move_threshold, "non-negative");
        }
        Ok(())
    }
}

/// Parameters of the random graph generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    vertices: usize,
    edges: usize,
    seed: Option<u64>,
    /// Above this fraction of all possible edges, sample without replacement.
    dense_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 30,
            edges: 40,
            seed: None,
            dense_ratio: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Returns the number of vertices to generate.
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the number of edges to generate.
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Returns the RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the density above which sampling switches to without-replacement.
    pub fn dense_ratio(&self) -> f64 {
        self.dense_ratio
    }

    /// Sets the number of vertices.
    pub fn set_vertices(&mut self, vertices: usize) -> &mut Self {
        self.vertices = vertices;
        self
    }

    /// Sets the number of edges.
    pub fn set_edges(&mut self, edges: usize) -> &mut Self {
        self.edges = edges;
        self
    }

    /// Sets the RNG seed.
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Sets the dense sampling ratio.
    pub fn set_dense_ratio(&mut self, dense_ratio: f64) -> &mut Self {
        self.dense_ratio = dense_ratio;
        self
    }

    /// # Errors
    ///
    /// Returns [`DriftError::InvalidParameter`] unless `dense_ratio` is in `[0, 1]`.
    pub fn validate(&self) -> Result<(), DriftError> {
        if !(0.0..=1.0).contains(&self.dense_ratio) {
            return Err(DriftError::InvalidParameter(format!(
                "dense_ratio must be in [0, 1], got {}",
                self.dense_ratio
            )));
        }
        Ok(())
    }
}
