use anyhow::Context;
use garden_config::GardenConfig;
use garden_core::responses::BatchItemOutcome;
use garden_impact::{AnalyzeOptions, ImpactAnalyzer};

use crate::cli::root_commands::InputArgs;
use crate::commands::shared::input::{self, InputEntry};

/// Analyzer wired from the loaded configuration.
pub fn build(config: &GardenConfig) -> anyhow::Result<ImpactAnalyzer> {
    ImpactAnalyzer::from_config(config).context("failed to build impact analyzer from config")
}

pub const fn options(args: &InputArgs) -> AnalyzeOptions {
    AnalyzeOptions {
        force_reanalysis: args.force,
    }
}

/// Read the input and analyze every item in it.
///
/// Malformed items come back as failed outcomes in their input position.
pub fn run_batch(
    args: &InputArgs,
    config: &GardenConfig,
) -> anyhow::Result<Vec<BatchItemOutcome>> {
    let entries = input::read_entries(&args.input)?;
    let analyzer = build(config)?;
    Ok(analyze_entries(&analyzer, entries, options(args)))
}

fn analyze_entries(
    analyzer: &ImpactAnalyzer,
    entries: Vec<InputEntry>,
    options: AnalyzeOptions,
) -> Vec<BatchItemOutcome> {
    let mut items = Vec::with_capacity(entries.len());
    let mut slots = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            InputEntry::Item(item) => {
                items.push(item);
                slots.push(None);
            }
            InputEntry::Malformed { id, error } => {
                slots.push(Some(BatchItemOutcome::Failed { id, error }));
            }
        }
    }

    let mut analyzed = analyzer.batch_analyze(&items, options).into_iter();
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| analyzed.next()))
        .collect()
}

#[cfg(test)]
mod tests {
    use garden_core::entities::ContentItem;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn malformed_entries_keep_their_position() {
        let entries = vec![
            InputEntry::Item(ContentItem::new("a", "market")),
            InputEntry::Malformed {
                id: "b".into(),
                error: "invalid content item: rating 9".into(),
            },
            InputEntry::Item(ContentItem::new("c", "user")),
        ];
        let outcomes = analyze_entries(
            &ImpactAnalyzer::with_defaults(),
            entries,
            AnalyzeOptions::default(),
        );

        assert_eq!(
            outcomes.iter().map(BatchItemOutcome::id).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert!(!outcomes[0].is_failed());
        assert!(outcomes[1].is_failed());
        assert!(!outcomes[2].is_failed());
    }
}
