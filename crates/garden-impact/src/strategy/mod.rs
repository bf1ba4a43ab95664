//! Pluggable scoring strategies.
//!
//! A strategy turns a content item into the twelve leaf ratings plus the
//! evidence signals used for confidence. The analyzer owns everything after
//! that (aggregation, labels, advice), so swapping the keyword heuristic for
//! something smarter does not touch the scoring contract.
//!
//! Implementations must be pure: the same item always yields the same output.

mod keyword;

pub use keyword::{KeywordScoringStrategy, KeywordTable, MetricKeywords};

use garden_core::entities::{
    BusinessValue, ContentItem, ImpactScore, ImplementationFeasibility, SocialImpact,
    StrategicAlignment,
};

use crate::error::ImpactError;

/// Raw output of a scoring strategy for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOutput {
    pub business_value: BusinessValue,
    pub implementation_feasibility: ImplementationFeasibility,
    pub social_impact: SocialImpact,
    pub strategic_alignment: StrategicAlignment,
    /// Total keyword (or feature) hits the ratings were derived from.
    pub keyword_hits: u32,
    /// Body mentions data or evidence.
    pub evidence_marker: bool,
    /// Body mentions proven or verified results.
    pub verified_marker: bool,
}

impl StrategyOutput {
    /// Fold the leaf ratings into an `ImpactScore` with derived fields unset.
    #[must_use]
    pub const fn to_score(&self) -> ImpactScore {
        ImpactScore {
            business_value: Some(self.business_value),
            implementation_feasibility: Some(self.implementation_feasibility),
            social_impact: Some(self.social_impact),
            strategic_alignment: Some(self.strategic_alignment),
            overall_score: 0.0,
            confidence: 0.0,
            notes: None,
        }
    }
}

/// Produces leaf ratings for a content item.
pub trait ScoringStrategy: Send + Sync {
    /// Identifier recorded in `AnalysisMetadata::algorithm`.
    fn name(&self) -> &str;

    /// Score one item. Missing metadata must lower ratings, not fail.
    fn score(&self, item: &ContentItem) -> Result<StrategyOutput, ImpactError>;
}
