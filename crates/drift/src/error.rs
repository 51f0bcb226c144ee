//! Error types for Drift operations.
//!
//! This module provides the main error type [`DriftError`] which wraps
//! the error conditions that can occur while building or laying out a graph.

use std::io;

use thiserror::Error;

use drift_core::error::GraphError;

/// The main error type for Drift operations.
///
/// Numeric layout steps never fail once their inputs are valid; errors come
/// from rejected parameters, malformed graphs, and configuration loading.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
