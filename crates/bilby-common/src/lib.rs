//! Shared helpers for the bilby workspace.
//!
//! This crate provides small infrastructure used around the selector
//! builder:
//! - **Geometry** - a plain rectangle value with an area operation
//! - **JSON** - encode/decode wrappers over `serde_json`

pub mod geometry;
pub mod json;
