//! Read models for the gazetteer API payloads.
//!
//! # Responsibility
//! - Define the deserializable shapes delivered by the four API endpoints.
//! - Keep one canonical client-side record per entity; no client mutation.
//!
//! # Invariants
//! - Every entity is identified by a stable numeric id assigned server-side.
//! - Optional payload fields deserialize to defaults instead of failing.

pub mod event;
pub mod person;
pub mod photo;
pub mod place;
