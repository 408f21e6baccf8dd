//! UI navigation state owned by the core crate.
//!
//! # Responsibility
//! - Keep all mutable presentation state in one controller instance
//!   instead of module-level globals.
//! - Expose small, synchronous state transitions for any frontend.
//!
//! # Invariants
//! - A nested detail modal is only ever open above a place modal.
//! - Stale fetch responses never mutate state (request tokens).

pub mod carousel;
pub mod nav;
