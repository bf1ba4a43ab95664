//! Rule-based recommendations and risk factors.
//!
//! Rules are evaluated in a fixed order and every matching rule contributes
//! its message. A rule whose dimension is absent never fires.

use garden_core::entities::ImpactScore;
use garden_core::enums::Metric;

/// Category tags that trigger the technology-trend recommendation.
pub const DEFAULT_AI_TAGS: &[&str] = &["ai_machine_learning", "ai", "machine_learning", "ml"];

/// Emitted when no rule matches, so recommendations are never empty.
pub const FALLBACK_RECOMMENDATION: &str =
    "Gather more information and revisit this analysis before committing resources.";

pub const AI_TREND_RECOMMENDATION: &str =
    "Monitor AI/ML technology trends closely; the landscape shifts quickly.";

/// Below this confidence the analysis itself is flagged as a risk.
const LOW_CONFIDENCE_RISK_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy)]
enum Threshold {
    AtLeast(u8),
    AtMost(u8),
}

impl Threshold {
    const fn matches(self, value: u8) -> bool {
        match self {
            Self::AtLeast(min) => value >= min,
            Self::AtMost(max) => value <= max,
        }
    }
}

struct Rule {
    metric: Metric,
    threshold: Threshold,
    message: &'static str,
}

const RECOMMENDATION_RULES: &[Rule] = &[
    Rule {
        metric: Metric::MarketOpportunity,
        threshold: Threshold::AtLeast(4),
        message: "Market opportunity is strong; consider rapid market entry.",
    },
    Rule {
        metric: Metric::CompetitiveAdvantage,
        threshold: Threshold::AtLeast(4),
        message: "Build on the competitive advantage with a clear differentiation strategy.",
    },
    Rule {
        metric: Metric::RevenuePotential,
        threshold: Threshold::AtLeast(4),
        message: "Draft a monetization plan to capture the revenue potential.",
    },
    Rule {
        metric: Metric::TechnicalComplexity,
        threshold: Threshold::AtLeast(4),
        message: "Technical complexity is high; adopt a phased implementation.",
    },
    Rule {
        metric: Metric::ResourceRequirements,
        threshold: Threshold::AtLeast(4),
        message: "Resource needs are significant; plan funding or look for partners.",
    },
    Rule {
        metric: Metric::UserBenefit,
        threshold: Threshold::AtLeast(4),
        message: "User benefit is high; validate early with real users.",
    },
    Rule {
        metric: Metric::Sustainability,
        threshold: Threshold::AtLeast(4),
        message: "Communicate the sustainability value explicitly.",
    },
    Rule {
        metric: Metric::NetworkExpansion,
        threshold: Threshold::AtLeast(4),
        message: "Use the international exposure to expand your network.",
    },
];

const RISK_RULES: &[Rule] = &[
    Rule {
        metric: Metric::TechnicalComplexity,
        threshold: Threshold::AtLeast(4),
        message: "High technical complexity",
    },
    Rule {
        metric: Metric::ResourceRequirements,
        threshold: Threshold::AtLeast(4),
        message: "High resource requirements",
    },
    Rule {
        metric: Metric::CompetitiveAdvantage,
        threshold: Threshold::AtMost(2),
        message: "Low competitive advantage",
    },
];

const LOW_CONFIDENCE_RISK: &str = "Low confidence in analysis (limited supporting data)";

fn matching<'a>(rules: &'a [Rule], scores: &'a ImpactScore) -> impl Iterator<Item = String> + 'a {
    rules
        .iter()
        .filter(|rule| {
            scores
                .rating(rule.metric)
                .is_some_and(|rating| rule.threshold.matches(rating.get()))
        })
        .map(|rule| rule.message.to_string())
}

/// Ordered recommendations for a score. Never empty.
#[must_use]
pub fn recommendations<'a>(
    scores: &ImpactScore,
    mut tags: impl Iterator<Item = &'a str>,
    ai_tags: &[String],
) -> Vec<String> {
    let mut out: Vec<String> = matching(RECOMMENDATION_RULES, scores).collect();

    if tags.any(|tag| {
        let tag = tag.to_lowercase();
        ai_tags.contains(&tag)
    }) {
        out.push(AI_TREND_RECOMMENDATION.to_string());
    }

    if out.is_empty() {
        out.push(FALLBACK_RECOMMENDATION.to_string());
    }
    out
}

/// Named risks for a score. May be empty.
#[must_use]
pub fn risk_factors(scores: &ImpactScore, confidence: f64) -> Vec<String> {
    let mut out: Vec<String> = matching(RISK_RULES, scores).collect();
    if confidence < LOW_CONFIDENCE_RISK_THRESHOLD {
        out.push(LOW_CONFIDENCE_RISK.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use garden_core::entities::{BusinessValue, ImplementationFeasibility};
    use garden_core::rating::Rating;
    use pretty_assertions::assert_eq;

    use super::*;

    fn r(v: i64) -> Rating {
        Rating::new(v).unwrap()
    }

    fn ai_tags() -> Vec<String> {
        DEFAULT_AI_TAGS.iter().map(ToString::to_string).collect()
    }

    fn scored(market: i64, advantage: i64, complexity: i64, resources: i64) -> ImpactScore {
        ImpactScore {
            business_value: Some(BusinessValue {
                market_opportunity: r(market),
                competitive_advantage: r(advantage),
                revenue_potential: r(3),
            }),
            implementation_feasibility: Some(ImplementationFeasibility {
                technical_complexity: r(complexity),
                resource_requirements: r(resources),
                timeline_estimate: r(3),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn fallback_when_nothing_matches() {
        let recs = recommendations(&ImpactScore::default(), std::iter::empty(), &ai_tags());
        assert_eq!(recs, vec![FALLBACK_RECOMMENDATION.to_string()]);
    }

    #[test]
    fn rules_fire_in_fixed_order() {
        let recs = recommendations(&scored(5, 3, 4, 2), ["AI"].into_iter(), &ai_tags());
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("market entry"));
        assert!(recs[1].contains("phased implementation"));
        assert_eq!(recs[2], AI_TREND_RECOMMENDATION);
    }

    #[test]
    fn non_ai_tags_do_not_trigger_trend_advice() {
        let recs = recommendations(&scored(3, 3, 3, 3), ["diary"].into_iter(), &ai_tags());
        assert_eq!(recs, vec![FALLBACK_RECOMMENDATION.to_string()]);
    }

    #[test]
    fn risks_follow_thresholds() {
        let risks = risk_factors(&scored(3, 2, 4, 5), 0.9);
        assert_eq!(
            risks,
            vec![
                "High technical complexity".to_string(),
                "High resource requirements".to_string(),
                "Low competitive advantage".to_string(),
            ]
        );
    }

    #[test]
    fn low_confidence_is_a_risk() {
        let risks = risk_factors(&scored(3, 3, 3, 3), 0.5);
        assert_eq!(risks, vec![LOW_CONFIDENCE_RISK.to_string()]);
        assert!(risk_factors(&scored(3, 3, 3, 3), 0.6).is_empty());
    }

    #[test]
    fn absent_dimensions_raise_no_risks() {
        assert!(risk_factors(&ImpactScore::default(), 1.0).is_empty());
    }
}
