//! Weighted aggregation of leaf ratings into the overall score.
//!
//! Each dimension collapses to a weighted average of its three ratings
//! (feasibility ratings are inverted as `6 - v` first, so "easy" scores
//! high). The overall score is the weight-normalized sum over the dimensions
//! that are present, or `0.0` when none are.

use garden_config::CriteriaConfig;
use garden_core::entities::ImpactScore;
use garden_core::enums::Dimension;

/// Weighted sub-total of one dimension, `None` if the dimension is absent.
#[must_use]
pub fn dimension_score(
    scores: &ImpactScore,
    dimension: Dimension,
    criteria: &CriteriaConfig,
) -> Option<f64> {
    let weights = criteria.intra.get(dimension);
    let mut total = 0.0;
    for (metric, weight) in dimension.metrics().into_iter().zip(weights) {
        let rating = scores.rating(metric)?;
        let value = if dimension == Dimension::ImplementationFeasibility {
            rating.inverted()
        } else {
            rating.value()
        };
        total += weight * value;
    }
    Some(total)
}

/// Overall score in `[1.0, 5.0]`, or `0.0` when no dimension is present.
#[must_use]
pub fn overall_score(scores: &ImpactScore, criteria: &CriteriaConfig) -> f64 {
    let (weighted, weight_sum) = Dimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            dimension_score(scores, dimension, criteria)
                .map(|sub| (criteria.weights.get(dimension), sub))
        })
        .fold((0.0, 0.0), |(num, den), (weight, sub)| {
            (num + weight * sub, den + weight)
        });

    if weight_sum <= 0.0 {
        return 0.0;
    }
    let overall = weighted / weight_sum;
    if overall.is_finite() { overall } else { 0.0 }
}
