use garden_config::GardenConfig;
use garden_core::responses::{BatchItemOutcome, RankedInsight};
use garden_impact::{compare_insights, successful};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RankArgs;
use crate::commands::shared::{analyzer, limit::effective_limit};
use crate::output::output;

/// Handle `garden rank`.
pub fn handle(args: &RankArgs, config: &GardenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcomes = analyzer::run_batch(&args.input, config)?;
    let limit = effective_limit(args.top, flags.limit, config.general.default_limit);
    output(&ranked(&outcomes, limit), flags.format)
}

/// Rank the successful outcomes, keeping at most `limit` rows.
#[must_use]
pub fn ranked(outcomes: &[BatchItemOutcome], limit: Option<usize>) -> Vec<RankedInsight> {
    let mut rows = compare_insights(&successful(outcomes));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

#[cfg(test)]
mod tests {
    use garden_core::entities::ContentItem;
    use garden_impact::{AnalyzeOptions, ImpactAnalyzer};
    use pretty_assertions::assert_eq;

    use super::*;

    fn outcomes() -> Vec<BatchItemOutcome> {
        let items = vec![
            ContentItem::new("quiet", ""),
            ContentItem::new("busy", "market market growth user user benefit society"),
            ContentItem::new("mid", "market user"),
        ];
        ImpactAnalyzer::with_defaults().batch_analyze(&items, AnalyzeOptions::default())
    }

    #[test]
    fn ranks_by_score() {
        let rows = ranked(&outcomes(), None);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["busy", "mid", "quiet"]);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let rows = ranked(&outcomes(), Some(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "busy");
    }
}
