//! Drift - Fruchterman–Reingold force-directed graph layout.
//!
//! Vertices repel each other like charged particles, edges pull their
//! endpoints together like springs, and a simulated-annealing temperature
//! bounds how far any vertex may move per step. The crate is headless: it
//! never renders and owns no timer, so it can be driven from a render loop,
//! a fixed-rate timer, or a plain batch loop.
//!
//! # Modules
//!
//! - [`generator`] - Seedable random graphs without self-loops or duplicate edges
//! - [`engine`] - The per-step force computation
//! - [`cooling`] - The temperature schedule and stopping conditions
//! - [`simulation`] - A headless driver combining the two
//! - [`config`] - Deserializable configuration for all of the above
//!
//! # Example
//!
//! ```
//! use drift::{engine::{Engine, ideal_edge_length}, generator::GraphGenerator};
//! use drift_core::geometry::Canvas;
//!
//! let canvas = Canvas::new(800.0, 600.0).unwrap();
//! let mut graph = GraphGenerator::seeded(7).generate(20, 30, canvas).unwrap();
//! let k = ideal_edge_length(canvas, graph.vertex_count());
//!
//! let mut engine = Engine::default();
//! let mut temperature = 100.0;
//! while temperature >= 1.0 {
//!     let max_displacement = engine.step(&mut graph, canvas, k, temperature);
//!     if max_displacement < 0.5 {
//!         break;
//!     }
//!     temperature *= 0.95;
//! }
//!
//! assert!(graph.positions().all(|p| canvas.contains(p)));
//! ```

pub mod config;
pub mod cooling;
pub mod engine;
pub mod generator;
pub mod simulation;

mod error;

pub use drift_core::{geometry, graph};

pub use error::DriftError;
