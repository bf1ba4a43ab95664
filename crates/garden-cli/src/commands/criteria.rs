use garden_config::{CriteriaConfig, GardenConfig};
use garden_core::enums::{Dimension, Metric};
use serde::Serialize;

use crate::cli::root_commands::CriteriaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// One metric with its effective weights, for table output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionRow {
    pub dimension: Dimension,
    pub dimension_weight: f64,
    pub metric: Metric,
    pub intra_weight: f64,
    pub description: String,
}

/// Handle `garden criteria`.
pub fn handle(args: &CriteriaArgs, config: &GardenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.prompt {
        print!("{}", config.criteria.render_prompt());
        return Ok(());
    }

    if flags.format == OutputFormat::Table {
        output(&rows(&config.criteria), flags.format)
    } else {
        output(&config.criteria, flags.format)
    }
}

#[must_use]
pub fn rows(criteria: &CriteriaConfig) -> Vec<CriterionRow> {
    Dimension::ALL
        .into_iter()
        .flat_map(|dimension| {
            let intra = criteria.intra.get(dimension);
            dimension
                .metrics()
                .into_iter()
                .zip(intra)
                .map(move |(metric, intra_weight)| CriterionRow {
                    dimension,
                    dimension_weight: criteria.weights.get(dimension),
                    metric,
                    intra_weight,
                    description: criteria
                        .descriptor(metric)
                        .map(|d| d.description.clone())
                        .unwrap_or_default(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_metric_with_default_weights() {
        let rows = rows(&CriteriaConfig::default());
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].metric, Metric::MarketOpportunity);
        assert!((rows[0].intra_weight - 0.4).abs() < f64::EPSILON);
        assert!((rows[0].dimension_weight - 0.30).abs() < f64::EPSILON);
        assert!(rows.iter().all(|r| !r.description.is_empty()));

        let vision = rows
            .iter()
            .find(|r| r.metric == Metric::VisionFit)
            .expect("vision fit row");
        assert!((vision.intra_weight - 0.3).abs() < f64::EPSILON);
    }
}
