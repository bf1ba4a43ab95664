//! Classification enums, dimensions and leaf metrics.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The label enums derive `Ord` in tier order so callers can compare them
//! directly (`ActionPriority::Low < ActionPriority::Urgent`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ActionPriority
// ---------------------------------------------------------------------------

/// Triage bucket derived from overall score and confidence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl ActionPriority {
    /// All tiers, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for ActionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfidenceLevel
// ---------------------------------------------------------------------------

/// Coarse bucket of the numeric confidence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// One of the four top-level impact categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    BusinessValue,
    ImplementationFeasibility,
    SocialImpact,
    StrategicAlignment,
}

impl Dimension {
    pub const ALL: [Self; 4] = [
        Self::BusinessValue,
        Self::ImplementationFeasibility,
        Self::SocialImpact,
        Self::StrategicAlignment,
    ];

    /// Key used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessValue => "business_value",
            Self::ImplementationFeasibility => "implementation_feasibility",
            Self::SocialImpact => "social_impact",
            Self::StrategicAlignment => "strategic_alignment",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessValue => "Business value",
            Self::ImplementationFeasibility => "Implementation feasibility",
            Self::SocialImpact => "Social impact",
            Self::StrategicAlignment => "Strategic alignment",
        }
    }

    /// The three leaf metrics of this dimension, in intra-weight order.
    #[must_use]
    pub const fn metrics(self) -> [Metric; 3] {
        match self {
            Self::BusinessValue => [
                Metric::MarketOpportunity,
                Metric::CompetitiveAdvantage,
                Metric::RevenuePotential,
            ],
            Self::ImplementationFeasibility => [
                Metric::TechnicalComplexity,
                Metric::ResourceRequirements,
                Metric::TimelineEstimate,
            ],
            Self::SocialImpact => [
                Metric::UserBenefit,
                Metric::SocietalContribution,
                Metric::Sustainability,
            ],
            Self::StrategicAlignment => [
                Metric::VisionFit,
                Metric::SkillDevelopment,
                Metric::NetworkExpansion,
            ],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// A leaf metric: one of the three sub-scores inside a dimension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MarketOpportunity,
    CompetitiveAdvantage,
    RevenuePotential,
    TechnicalComplexity,
    ResourceRequirements,
    TimelineEstimate,
    UserBenefit,
    SocietalContribution,
    Sustainability,
    VisionFit,
    SkillDevelopment,
    NetworkExpansion,
}

impl Metric {
    pub const ALL: [Self; 12] = [
        Self::MarketOpportunity,
        Self::CompetitiveAdvantage,
        Self::RevenuePotential,
        Self::TechnicalComplexity,
        Self::ResourceRequirements,
        Self::TimelineEstimate,
        Self::UserBenefit,
        Self::SocietalContribution,
        Self::Sustainability,
        Self::VisionFit,
        Self::SkillDevelopment,
        Self::NetworkExpansion,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketOpportunity => "market_opportunity",
            Self::CompetitiveAdvantage => "competitive_advantage",
            Self::RevenuePotential => "revenue_potential",
            Self::TechnicalComplexity => "technical_complexity",
            Self::ResourceRequirements => "resource_requirements",
            Self::TimelineEstimate => "timeline_estimate",
            Self::UserBenefit => "user_benefit",
            Self::SocietalContribution => "societal_contribution",
            Self::Sustainability => "sustainability",
            Self::VisionFit => "vision_fit",
            Self::SkillDevelopment => "skill_development",
            Self::NetworkExpansion => "network_expansion",
        }
    }

    /// Parse a `snake_case` metric key as used in configuration files.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }

    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::MarketOpportunity | Self::CompetitiveAdvantage | Self::RevenuePotential => {
                Dimension::BusinessValue
            }
            Self::TechnicalComplexity | Self::ResourceRequirements | Self::TimelineEstimate => {
                Dimension::ImplementationFeasibility
            }
            Self::UserBenefit | Self::SocietalContribution | Self::Sustainability => {
                Dimension::SocialImpact
            }
            Self::VisionFit | Self::SkillDevelopment | Self::NetworkExpansion => {
                Dimension::StrategicAlignment
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
