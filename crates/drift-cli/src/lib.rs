//! Drift CLI library
//!
//! This module contains the core CLI logic for the Drift layout tool: it
//! generates a random graph, lays it out to convergence, and prints the
//! result.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::io::Write;

use log::info;

use drift::{DriftError, config::LayoutConfig, simulation::Simulation};

/// Apply command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut LayoutConfig, args: &Args) {
    if let Some(vertices) = args.vertices {
        config.generator_mut().set_vertices(vertices);
    }
    if let Some(edges) = args.edges {
        config.generator_mut().set_edges(edges);
    }
    if args.seed.is_some() {
        config.generator_mut().set_seed(args.seed);
    }
    if let Some(width) = args.width {
        config.canvas_mut().set_width(width);
    }
    if let Some(height) = args.height {
        config.canvas_mut().set_height(height);
    }
}

/// Run the Drift CLI application
///
/// Generates a graph as configured, runs the layout until it settles or
/// freezes, and writes one line per vertex, one line per edge, and a final
/// summary line to `out`.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `out` - Destination for the final layout
///
/// # Errors
///
/// Returns `DriftError` for:
/// - Configuration loading errors
/// - Invalid parameters (e.g. more edges than the vertex count allows)
/// - Write errors on `out`
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), DriftError> {
    let mut layout_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut layout_config, args);

    info!(
        vertices = layout_config.generator().vertices(),
        edges = layout_config.generator().edges(),
        seed:? = layout_config.generator().seed();
        "Generating graph"
    );

    let mut simulation = Simulation::random(&layout_config)?;
    let summary = simulation.run();

    let graph = simulation.graph();
    for vertex in graph.vertices() {
        let position = vertex.position();
        writeln!(
            out,
            "vertex {} {:.3} {:.3}",
            vertex.id(),
            position.x(),
            position.y()
        )?;
    }
    for edge in graph.edges() {
        writeln!(out, "edge {} {}", edge.source(), edge.target())?;
    }
    writeln!(
        out,
        "summary iterations={} temperature={:.4} max_displacement={:.4} status={}",
        summary.iterations, summary.temperature, summary.max_displacement, summary.convergence
    )?;

    info!(iterations = summary.iterations; "Layout written");

    Ok(())
}
