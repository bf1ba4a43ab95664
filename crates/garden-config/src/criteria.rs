//! Impact criteria: dimension weights, intra-dimension weights and the
//! human-readable scoring guides.
//!
//! The weights feed the aggregation in `garden-impact`. The descriptors are
//! only documentation: they are rendered into LLM prompts and the
//! `garden criteria` output, never read by the scorer.

use std::fmt::Write as _;

use garden_core::enums::{Dimension, Metric};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tolerance for "sums to 1.0" checks.
const WEIGHT_EPSILON: f64 = 1e-3;

/// Top-level weight per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub business_value: f64,
    pub implementation_feasibility: f64,
    pub social_impact: f64,
    pub strategic_alignment: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            business_value: 0.30,
            implementation_feasibility: 0.25,
            social_impact: 0.25,
            strategic_alignment: 0.20,
        }
    }
}

impl DimensionWeights {
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::BusinessValue => self.business_value,
            Dimension::ImplementationFeasibility => self.implementation_feasibility,
            Dimension::SocialImpact => self.social_impact,
            Dimension::StrategicAlignment => self.strategic_alignment,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

/// Weights of the three leaf metrics inside each dimension, in
/// [`Dimension::metrics`] order.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IntraWeights {
    pub business_value: [f64; 3],
    pub implementation_feasibility: [f64; 3],
    pub social_impact: [f64; 3],
    pub strategic_alignment: [f64; 3],
}

impl Default for IntraWeights {
    fn default() -> Self {
        Self {
            business_value: [0.4, 0.3, 0.3],
            implementation_feasibility: [0.4, 0.3, 0.3],
            social_impact: [0.4, 0.3, 0.3],
            strategic_alignment: [0.3, 0.35, 0.35],
        }
    }
}

impl IntraWeights {
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> [f64; 3] {
        match dimension {
            Dimension::BusinessValue => self.business_value,
            Dimension::ImplementationFeasibility => self.implementation_feasibility,
            Dimension::SocialImpact => self.social_impact,
            Dimension::StrategicAlignment => self.strategic_alignment,
        }
    }
}

/// Scoring guide for one leaf metric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CriterionDescriptor {
    pub metric: Metric,
    pub description: String,
    /// What a 1 looks like.
    pub low: String,
    /// What a 3 looks like.
    pub mid: String,
    /// What a 5 looks like.
    pub high: String,
}

impl CriterionDescriptor {
    fn new(metric: Metric, description: &str, low: &str, mid: &str, high: &str) -> Self {
        Self {
            metric,
            description: description.to_string(),
            low: low.to_string(),
            mid: mid.to_string(),
            high: high.to_string(),
        }
    }
}

#[allow(clippy::enum_glob_use, clippy::too_many_lines)]
fn default_descriptors() -> Vec<CriterionDescriptor> {
    use Metric::*;
    vec![
        CriterionDescriptor::new(
            MarketOpportunity,
            "Size and growth of the addressable market",
            "niche or shrinking market",
            "stable market with room to grow",
            "large, fast-growing market",
        ),
        CriterionDescriptor::new(
            CompetitiveAdvantage,
            "How differentiated the idea is from existing offerings",
            "commodity, many equivalents",
            "some differentiation",
            "unique or hard to copy",
        ),
        CriterionDescriptor::new(
            RevenuePotential,
            "Plausible path to revenue or cost savings",
            "no visible monetization",
            "indirect or modest revenue",
            "clear, significant revenue",
        ),
        CriterionDescriptor::new(
            TechnicalComplexity,
            "Engineering difficulty (higher is harder)",
            "off-the-shelf",
            "requires integration work",
            "research-grade problem",
        ),
        CriterionDescriptor::new(
            ResourceRequirements,
            "People, money and equipment needed (higher is costlier)",
            "a weekend project",
            "a small team for months",
            "major investment",
        ),
        CriterionDescriptor::new(
            TimelineEstimate,
            "Time to a usable result (higher is slower)",
            "weeks",
            "quarters",
            "years",
        ),
        CriterionDescriptor::new(
            UserBenefit,
            "Direct benefit to end users",
            "marginal convenience",
            "noticeable improvement",
            "changes how people work or live",
        ),
        CriterionDescriptor::new(
            SocietalContribution,
            "Contribution beyond direct users",
            "none",
            "local or sector benefit",
            "broad societal benefit",
        ),
        CriterionDescriptor::new(
            Sustainability,
            "Environmental and long-term sustainability",
            "negative or unknown footprint",
            "neutral",
            "measurably positive",
        ),
        CriterionDescriptor::new(
            VisionFit,
            "Fit with personal focus areas",
            "unrelated",
            "adjacent",
            "core focus area",
        ),
        CriterionDescriptor::new(
            SkillDevelopment,
            "Learning value of pursuing the idea",
            "nothing new",
            "some new skills",
            "substantial new expertise",
        ),
        CriterionDescriptor::new(
            NetworkExpansion,
            "Opportunity to meet people and organisations",
            "none",
            "domestic contacts",
            "international network",
        ),
    ]
}

/// Criteria configuration consumed by `ImpactAnalyzer`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CriteriaConfig {
    #[serde(default)]
    pub weights: DimensionWeights,

    #[serde(default)]
    pub intra: IntraWeights,

    #[serde(default = "default_descriptors")]
    pub descriptors: Vec<CriterionDescriptor>,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            intra: IntraWeights::default(),
            descriptors: default_descriptors(),
        }
    }
}

impl CriteriaConfig {
    /// Reject weight configurations that would corrupt every score.
    ///
    /// Top-level weights must be finite, non-negative and sum to more than
    /// zero. They are normalized during aggregation, so they need not sum to
    /// exactly 1.0. Each intra-dimension triple must sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for dimension in Dimension::ALL {
            let weight = self.weights.get(dimension);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::invalid(
                    format!("criteria.weights.{dimension}"),
                    format!("must be a finite number >= 0, got {weight}"),
                ));
            }

            let intra = self.intra.get(dimension);
            if intra.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(ConfigError::invalid(
                    format!("criteria.intra.{dimension}"),
                    format!("weights must be finite numbers >= 0, got {intra:?}"),
                ));
            }
            let sum: f64 = intra.iter().sum();
            if (sum - 1.0).abs() > WEIGHT_EPSILON {
                return Err(ConfigError::invalid(
                    format!("criteria.intra.{dimension}"),
                    format!("weights must sum to 1.0, got {sum}"),
                ));
            }
        }

        if self.weights.total() <= 0.0 {
            return Err(ConfigError::invalid(
                "criteria.weights",
                "at least one dimension weight must be positive",
            ));
        }

        Ok(())
    }

    /// Descriptor for a metric, if configured.
    #[must_use]
    pub fn descriptor(&self, metric: Metric) -> Option<&CriterionDescriptor> {
        self.descriptors.iter().find(|d| d.metric == metric)
    }

    /// Render the criteria as a Markdown section for an LLM scoring prompt.
    #[must_use]
    pub fn render_prompt(&self) -> String {
        let mut out = String::from("## Impact criteria\n\nRate each metric from 1 to 5.\n");
        for dimension in Dimension::ALL {
            let _ = write!(
                out,
                "\n### {} (weight {:.2})\n\n",
                dimension.label(),
                self.weights.get(dimension)
            );
            for metric in dimension.metrics() {
                match self.descriptor(metric) {
                    Some(d) => {
                        let _ = writeln!(
                            out,
                            "- `{metric}`: {}. 1 = {}; 3 = {}; 5 = {}.",
                            d.description, d.low, d.mid, d.high
                        );
                    }
                    None => {
                        let _ = writeln!(out, "- `{metric}`");
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let config = CriteriaConfig::default();
        assert!((config.weights.total() - 1.0).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn every_metric_has_a_default_descriptor() {
        let config = CriteriaConfig::default();
        for metric in Metric::ALL {
            assert!(config.descriptor(metric).is_some(), "missing {metric}");
        }
    }

    #[test]
    fn negative_weight_rejected() {
        let mut config = CriteriaConfig::default();
        config.weights.social_impact = -0.1;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("criteria.weights.social_impact"), "{err}");
    }

    #[test]
    fn nan_weight_rejected() {
        let mut config = CriteriaConfig::default();
        config.weights.business_value = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn all_zero_weights_rejected() {
        let mut config = CriteriaConfig::default();
        config.weights = DimensionWeights {
            business_value: 0.0,
            implementation_feasibility: 0.0,
            social_impact: 0.0,
            strategic_alignment: 0.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unnormalized_top_level_weights_are_allowed() {
        let mut config = CriteriaConfig::default();
        config.weights.business_value = 3.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn intra_weights_must_sum_to_one() {
        let mut config = CriteriaConfig::default();
        config.intra.strategic_alignment = [0.5, 0.5, 0.5];
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("criteria.intra.strategic_alignment"), "{err}");
    }

    #[test]
    fn prompt_lists_every_dimension() {
        let prompt = CriteriaConfig::default().render_prompt();
        for dimension in Dimension::ALL {
            assert!(prompt.contains(dimension.label()));
        }
        assert!(prompt.contains("`technical_complexity`"));
        assert!(prompt.contains("(weight 0.30)"));
    }
}
