//! Drift Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Drift layout
//! engine and its front ends. It includes:
//!
//! - **Geometry**: Points, the bounded canvas, and bounding boxes ([`geometry`] module)
//! - **Graph**: Vertices, undirected edges, and the graph container ([`graph`] module)
//! - **Errors**: Structural validation errors ([`error::GraphError`])

pub mod error;
pub mod geometry;
pub mod graph;
