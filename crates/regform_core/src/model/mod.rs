//! Domain model for the registration form.
//!
//! # Responsibility
//! - Define catalog keys (`Program`, `Semester`) and course records.
//! - Define the editable row and identity shapes owned by a session.
//!
//! # Invariants
//! - Catalog records are immutable once loaded.
//! - Rows are only mutated through the session service.

pub mod course;
pub mod identity;
pub mod program;
