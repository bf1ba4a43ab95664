//! # garden-impact
//!
//! Impact scoring and ranking for digital garden content.
//!
//! This crate turns a content item (front-matter metadata plus body text)
//! into an [`ImpactAnalysisResult`](garden_core::entities::ImpactAnalysisResult):
//! - Twelve leaf ratings from a pluggable [`ScoringStrategy`]
//! - A weighted overall score in `[0, 5]`
//! - Confidence, action priority and confidence level labels
//! - Rule-based recommendations and risk factors
//!
//! Across items it ranks analyses ([`compare_insights`]) and summarizes them
//! ([`generate_report`]). Fresh analyses can be cached by content hash.
//!
//! ```
//! use garden_core::entities::ContentItem;
//! use garden_impact::{AnalyzeOptions, ImpactAnalyzer};
//!
//! let analyzer = ImpactAnalyzer::with_defaults();
//! let item = ContentItem::new("note-1", "A unique user benefit with market growth");
//! let result = analyzer.analyze_content(&item, AnalyzeOptions::default()).unwrap();
//! assert!(result.overall_score() > 0.0);
//! ```

pub mod advice;
pub mod aggregate;
pub mod analyzer;
pub mod cache;
pub mod classify;
pub mod error;
pub mod ranking;
pub mod strategy;

pub use analyzer::{AnalyzeOptions, EXISTING_DATA_ALGORITHM, ImpactAnalyzer};
pub use cache::AnalysisCache;
pub use error::ImpactError;
pub use ranking::{compare_insights, generate_report, successful};
pub use strategy::{KeywordScoringStrategy, ScoringStrategy, StrategyOutput};
