//! # garden-core
//!
//! Core types and error types for digital garden impact analysis.
//!
//! This crate provides the foundational types shared across all garden crates:
//! - `Rating`, the 1-5 leaf sub-score that every dimension is built from
//! - Dimension structs and the persisted `ImpactScore` block
//! - Content items as handed over by the content-storage collaborator
//! - Analysis results with derived priority and confidence labels
//! - Ranking, batch and report response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod rating;
pub mod responses;
