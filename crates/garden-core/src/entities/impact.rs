use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Metric;
use crate::rating::Rating;

/// Base confidence assumed when a persisted block carries none.
const fn default_confidence() -> f64 {
    0.5
}

/// Market opportunity, competitive advantage and revenue potential.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessValue {
    #[serde(alias = "market_opportunity")]
    pub market_opportunity: Rating,
    #[serde(alias = "competitive_advantage")]
    pub competitive_advantage: Rating,
    #[serde(alias = "revenue_potential")]
    pub revenue_potential: Rating,
}

/// How hard the idea is to realise. Higher ratings mean harder or costlier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationFeasibility {
    #[serde(alias = "technical_complexity")]
    pub technical_complexity: Rating,
    #[serde(alias = "resource_requirements")]
    pub resource_requirements: Rating,
    #[serde(alias = "timeline_estimate")]
    pub timeline_estimate: Rating,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialImpact {
    #[serde(alias = "user_benefit")]
    pub user_benefit: Rating,
    #[serde(alias = "societal_contribution")]
    pub societal_contribution: Rating,
    pub sustainability: Rating,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrategicAlignment {
    #[serde(alias = "vision_fit")]
    pub vision_fit: Rating,
    #[serde(alias = "skill_development")]
    pub skill_development: Rating,
    #[serde(alias = "network_expansion")]
    pub network_expansion: Rating,
}

/// Multi-dimensional impact score for one content item.
///
/// A dimension is `None` when it was never scored (generated front matter
/// starts out with `businessValue: null`). Keys are written in camelCase;
/// snake_case keys from older front matter are accepted on read. `overall_score` and `confidence`
/// are always derived by the analyzer; values read from persisted data are
/// not trusted for ranking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactScore {
    #[serde(default, alias = "business_value")]
    pub business_value: Option<BusinessValue>,
    #[serde(default, alias = "implementation_feasibility")]
    pub implementation_feasibility: Option<ImplementationFeasibility>,
    #[serde(default, alias = "social_impact")]
    pub social_impact: Option<SocialImpact>,
    #[serde(default, alias = "strategic_alignment")]
    pub strategic_alignment: Option<StrategicAlignment>,
    #[serde(default, alias = "overall_score")]
    pub overall_score: f64,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for ImpactScore {
    /// Matches a block deserialized from `{}`.
    fn default() -> Self {
        Self {
            business_value: None,
            implementation_feasibility: None,
            social_impact: None,
            strategic_alignment: None,
            overall_score: 0.0,
            confidence: default_confidence(),
            notes: None,
        }
    }
}

impl ImpactScore {
    /// Look up a single leaf rating. `None` if its dimension is absent.
    #[must_use]
    pub fn rating(&self, metric: Metric) -> Option<Rating> {
        match metric {
            Metric::MarketOpportunity => self.business_value.map(|d| d.market_opportunity),
            Metric::CompetitiveAdvantage => self.business_value.map(|d| d.competitive_advantage),
            Metric::RevenuePotential => self.business_value.map(|d| d.revenue_potential),
            Metric::TechnicalComplexity => {
                self.implementation_feasibility.map(|d| d.technical_complexity)
            }
            Metric::ResourceRequirements => {
                self.implementation_feasibility.map(|d| d.resource_requirements)
            }
            Metric::TimelineEstimate => self.implementation_feasibility.map(|d| d.timeline_estimate),
            Metric::UserBenefit => self.social_impact.map(|d| d.user_benefit),
            Metric::SocietalContribution => self.social_impact.map(|d| d.societal_contribution),
            Metric::Sustainability => self.social_impact.map(|d| d.sustainability),
            Metric::VisionFit => self.strategic_alignment.map(|d| d.vision_fit),
            Metric::SkillDevelopment => self.strategic_alignment.map(|d| d.skill_development),
            Metric::NetworkExpansion => self.strategic_alignment.map(|d| d.network_expansion),
        }
    }

    /// Number of leaf ratings present (0, 3, 6, 9 or 12).
    #[must_use]
    pub fn leaf_count(&self) -> u32 {
        let present = [
            self.business_value.is_some(),
            self.implementation_feasibility.is_some(),
            self.social_impact.is_some(),
            self.strategic_alignment.is_some(),
        ];
        present.iter().filter(|p| **p).map(|_| 3).sum()
    }

    /// True when no dimension has been scored.
    #[must_use]
    pub const fn is_unscored(&self) -> bool {
        self.business_value.is_none()
            && self.implementation_feasibility.is_none()
            && self.social_impact.is_none()
            && self.strategic_alignment.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn r(v: i64) -> Rating {
        Rating::new(v).unwrap()
    }

    #[test]
    fn rating_lookup_follows_dimensions() {
        let score = ImpactScore {
            social_impact: Some(SocialImpact {
                user_benefit: r(4),
                societal_contribution: r(2),
                sustainability: r(5),
            }),
            ..Default::default()
        };
        assert_eq!(score.rating(Metric::UserBenefit), Some(r(4)));
        assert_eq!(score.rating(Metric::Sustainability), Some(r(5)));
        assert_eq!(score.rating(Metric::MarketOpportunity), None);
        assert_eq!(score.leaf_count(), 3);
        assert!(!score.is_unscored());
    }

    #[test]
    fn null_dimensions_deserialize_as_absent() {
        let json = r#"{
            "businessValue": null,
            "implementationFeasibility": null,
            "socialImpact": null,
            "strategicAlignment": null
        }"#;
        let score: ImpactScore = serde_json::from_str(json).unwrap();
        assert!(score.is_unscored());
        assert_eq!(score.leaf_count(), 0);
        assert!(score.overall_score.abs() < f64::EPSILON);
        assert!((score.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_leaf_is_rejected() {
        let json = r#"{
            "businessValue": {
                "marketOpportunity": 9,
                "competitiveAdvantage": 3,
                "revenuePotential": 3
            }
        }"#;
        assert!(serde_json::from_str::<ImpactScore>(json).is_err());
    }

    #[test]
    fn snake_case_block_is_read() {
        let json = r#"{
            "business_value": {
                "market_opportunity": 5,
                "competitive_advantage": 4,
                "revenue_potential": 3
            },
            "implementation_feasibility": null,
            "social_impact": {
                "user_benefit": 2,
                "societal_contribution": 2,
                "sustainability": 1
            },
            "strategic_alignment": null,
            "overall_score": 3.3,
            "confidence": 0.8
        }"#;
        let score: ImpactScore = serde_json::from_str(json).unwrap();
        assert_eq!(score.rating(Metric::MarketOpportunity), Some(r(5)));
        assert_eq!(score.rating(Metric::RevenuePotential), Some(r(3)));
        assert_eq!(score.rating(Metric::Sustainability), Some(r(1)));
        assert_eq!(score.leaf_count(), 6);
        assert!((score.overall_score - 3.3).abs() < f64::EPSILON);

        let written = serde_json::to_value(&score).unwrap();
        assert!(written.get("businessValue").is_some());
        assert!(written.get("business_value").is_none());
    }

    #[test]
    fn default_matches_empty_block() {
        let parsed: ImpactScore = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ImpactScore::default());
        assert!((ImpactScore::default().confidence - 0.5).abs() < f64::EPSILON);
    }
}
