//! # Base types for regicide
//!
//! This is an auxiliary crate for `regicide`, which contains the geometry
//! vocabulary: files, ranks, coordinates, colors, piece kinds and compass
//! directions. It knows nothing about boards or game rules.
//!
//! Normally you don't want to use this crate directly. Use `regicide` instead.

pub mod geometry;
pub mod types;
