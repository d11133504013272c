//! Course catalog loading and lookup.
//!
//! # Responsibility
//! - Fetch per-key catalog resources through a pluggable source.
//! - Substitute the builtin sample table whenever a fetch fails.
//!
//! # Invariants
//! - Fetch failures are recovered silently (logged, never surfaced).

pub mod sample;
pub mod source;
pub mod store;
