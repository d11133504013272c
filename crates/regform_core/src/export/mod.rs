//! Document projections and export entry points.
//!
//! # Responsibility
//! - Project session state into preview/print and JSON shapes.
//! - Define interfaces for PDF and print collaborators.

pub mod document;
pub mod json;
pub mod preview;
