//! Core use-case services.
//!
//! # Responsibility
//! - Expose explicit command methods for the registration form.
//! - Keep presentation layers decoupled from catalog and row bookkeeping.

pub mod session_service;
