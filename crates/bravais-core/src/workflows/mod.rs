//! # Workflows Module
//!
//! High-level entry points that run a complete lattice computation from a single
//! configuration value.
//!
//! - **Generation Workflow** ([`generate`]) - Select a type, apply parameter edits in
//!   order and return the [`crate::engine::bundle::RenderBundle`].

pub mod generate;
