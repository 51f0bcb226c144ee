//! Structural errors for graphs and canvases.

use thiserror::Error;

/// Errors raised when a graph or canvas violates its structural invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop { vertex: usize },

    #[error("edge ({u}, {v}) references a missing vertex (graph has {vertex_count} vertices)")]
    MissingEndpoint {
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    #[error("edge ({u}, {v}) duplicates an existing edge")]
    DuplicateEdge { u: usize, v: usize },

    #[error("canvas dimensions must be finite and positive with a finite area, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("vertex {vertex} has a non-finite position")]
    InvalidPosition { vertex: usize },
}
