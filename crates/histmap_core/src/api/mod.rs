//! Remote fetch layer for the gazetteer API.
//!
//! # Responsibility
//! - Define the fetch contract consumed by the navigation controller.
//! - Isolate HTTP transport details from UI-state orchestration.
//!
//! # Invariants
//! - Every operation collapses transport, status and decode failures into
//!   one `FetchError` naming the failed operation.
//! - No retries, no backoff, no request cancellation.

pub mod client;
