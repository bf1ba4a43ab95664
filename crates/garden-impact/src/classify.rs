//! Confidence estimation and the priority / confidence-level labels.

use garden_core::entities::ContentItem;
use garden_core::enums::{ActionPriority, ConfidenceLevel};

use crate::strategy::StrategyOutput;

/// Bodies longer than this many characters earn a confidence bonus.
pub const LONG_BODY_CHARS: usize = 1000;

/// Confidence when nothing is known.
pub const BASE_CONFIDENCE: f64 = 0.5;

/// `(min overall, min confidence, priority)`, first match wins.
const PRIORITY_THRESHOLDS: [(f64, f64, ActionPriority); 3] = [
    (4.0, 0.7, ActionPriority::Urgent),
    (3.5, 0.6, ActionPriority::High),
    (2.5, 0.5, ActionPriority::Medium),
];

/// The evidence signals behind a confidence estimate. Each one that holds
/// adds 0.1 on top of the 0.5 base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfidenceSignals {
    pub key_insights: bool,
    pub long_body: bool,
    pub category: bool,
    pub exhibition: bool,
    pub evidence_marker: bool,
    pub verified_marker: bool,
}

impl ConfidenceSignals {
    #[must_use]
    pub fn collect(item: &ContentItem, output: &StrategyOutput) -> Self {
        Self {
            key_insights: item.metadata.has_key_insights(),
            long_body: item.body.chars().count() > LONG_BODY_CHARS,
            category: item.metadata.has_category(),
            exhibition: item.metadata.exhibition().is_some(),
            evidence_marker: output.evidence_marker,
            verified_marker: output.verified_marker,
        }
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        [
            self.key_insights,
            self.long_body,
            self.category,
            self.exhibition,
            self.evidence_marker,
            self.verified_marker,
        ]
        .into_iter()
        .map(u32::from)
        .sum()
    }

    /// `0.5 + 0.1 * count`, capped at 1.0.
    ///
    /// Computed in tenths so the thresholds compare exactly (`0.7 >= 0.7`).
    #[must_use]
    pub fn confidence(&self) -> f64 {
        (f64::from(5 + self.count()) / 10.0).min(1.0)
    }
}

/// Sanitize a persisted confidence: non-finite becomes the base value, the
/// rest is clamped into `[0, 1]`.
#[must_use]
pub fn normalize_confidence(confidence: f64) -> f64 {
    if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        BASE_CONFIDENCE
    }
}

#[must_use]
pub fn action_priority(overall_score: f64, confidence: f64) -> ActionPriority {
    PRIORITY_THRESHOLDS
        .iter()
        .find(|(min_score, min_confidence, _)| {
            overall_score >= *min_score && confidence >= *min_confidence
        })
        .map_or(ActionPriority::Low, |(_, _, priority)| *priority)
}

#[must_use]
pub fn confidence_level(confidence: f64) -> ConfidenceLevel {
    if confidence >= 0.8 {
        ConfidenceLevel::High
    } else if confidence >= 0.6 {
        ConfidenceLevel::Medium
    } else if confidence >= 0.4 {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::VeryLow
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn no_signals_is_base_confidence() {
        let signals = ConfidenceSignals::default();
        assert_eq!(signals.count(), 0);
        assert!((signals.confidence() - BASE_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn all_signals_cap_at_one() {
        let signals = ConfidenceSignals {
            key_insights: true,
            long_body: true,
            category: true,
            exhibition: true,
            evidence_marker: true,
            verified_marker: true,
        };
        assert_eq!(signals.count(), 6);
        assert!((signals.confidence() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn three_signals_reach_exactly_point_eight() {
        let signals = ConfidenceSignals {
            key_insights: true,
            category: true,
            exhibition: true,
            ..Default::default()
        };
        assert!(signals.confidence() >= 0.8);
        assert_eq!(confidence_level(signals.confidence()), ConfidenceLevel::High);
    }

    #[rstest]
    #[case(4.0, 0.7, ActionPriority::Urgent)]
    #[case(4.8, 0.9, ActionPriority::Urgent)]
    #[case(4.2, 0.6, ActionPriority::High)]
    #[case(3.5, 0.6, ActionPriority::High)]
    #[case(3.9, 0.5, ActionPriority::Medium)]
    #[case(2.5, 0.5, ActionPriority::Medium)]
    #[case(2.49, 1.0, ActionPriority::Low)]
    #[case(5.0, 0.4, ActionPriority::Low)]
    #[case(0.0, 0.0, ActionPriority::Low)]
    fn priority_thresholds(
        #[case] overall: f64,
        #[case] confidence: f64,
        #[case] expected: ActionPriority,
    ) {
        assert_eq!(action_priority(overall, confidence), expected);
    }

    #[rstest]
    #[case(1.0, ConfidenceLevel::High)]
    #[case(0.8, ConfidenceLevel::High)]
    #[case(0.79, ConfidenceLevel::Medium)]
    #[case(0.6, ConfidenceLevel::Medium)]
    #[case(0.5, ConfidenceLevel::Low)]
    #[case(0.4, ConfidenceLevel::Low)]
    #[case(0.39, ConfidenceLevel::VeryLow)]
    #[case(0.0, ConfidenceLevel::VeryLow)]
    fn confidence_buckets(#[case] confidence: f64, #[case] expected: ConfidenceLevel) {
        assert_eq!(confidence_level(confidence), expected);
    }

    #[test]
    fn priority_is_monotonic_in_score() {
        for confidence in [0.0, 0.45, 0.5, 0.6, 0.65, 0.7, 1.0] {
            let mut previous = ActionPriority::Low;
            for step in 0..=50 {
                let overall = f64::from(step) / 10.0;
                let current = action_priority(overall, confidence);
                assert!(current >= previous, "dropped at {overall} / {confidence}");
                previous = current;
            }
        }
    }

    #[test]
    fn normalize_handles_garbage() {
        assert!((normalize_confidence(f64::NAN) - BASE_CONFIDENCE).abs() < f64::EPSILON);
        assert!((normalize_confidence(1.7) - 1.0).abs() < f64::EPSILON);
        assert!(normalize_confidence(-0.2).abs() < f64::EPSILON);
    }
}
