//! The impact analyzer: content item in, `ImpactAnalysisResult` out.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use garden_config::{CriteriaConfig, GardenConfig};
use garden_core::entities::{AnalysisMetadata, ContentItem, ImpactAnalysisResult, ImpactScore};
use garden_core::responses::{BatchItemOutcome, IdentifiedAnalysis, ImpactReport, RankedInsight};

use crate::advice::{self, DEFAULT_AI_TAGS};
use crate::aggregate::overall_score;
use crate::cache::AnalysisCache;
use crate::classify::{self, ConfidenceSignals};
use crate::error::ImpactError;
use crate::ranking;
use crate::strategy::{KeywordScoringStrategy, ScoringStrategy};

/// `AnalysisMetadata::algorithm` when a persisted score is reused.
pub const EXISTING_DATA_ALGORITHM: &str = "existing_data";

const ANALYZER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-call switches for [`ImpactAnalyzer::analyze_content`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Score from scratch even when the item carries a persisted impact
    /// block. Without it the persisted ratings are reused as-is, which can
    /// be stale if the body changed since they were written.
    pub force_reanalysis: bool,
}

impl AnalyzeOptions {
    #[must_use]
    pub const fn forced() -> Self {
        Self {
            force_reanalysis: true,
        }
    }
}

/// Scores content items and ranks/report across them.
///
/// Holds only immutable configuration plus an optional shared cache, so one
/// analyzer can be used from several threads.
pub struct ImpactAnalyzer {
    criteria: CriteriaConfig,
    strategy: Box<dyn ScoringStrategy>,
    ai_tags: Vec<String>,
    batch_delay: Option<Duration>,
    cache: Option<Arc<AnalysisCache>>,
}

impl std::fmt::Debug for ImpactAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImpactAnalyzer")
            .field("strategy", &self.strategy.name())
            .field("batch_delay", &self.batch_delay)
            .field("cached", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl ImpactAnalyzer {
    /// Build an analyzer, rejecting malformed criteria up front.
    pub fn new(
        criteria: CriteriaConfig,
        strategy: impl ScoringStrategy + 'static,
    ) -> Result<Self, ImpactError> {
        criteria.validate()?;
        Ok(Self {
            criteria,
            strategy: Box::new(strategy),
            ai_tags: DEFAULT_AI_TAGS.iter().map(ToString::to_string).collect(),
            batch_delay: None,
            cache: None,
        })
    }

    /// Default criteria and the built-in keyword strategy, no cache.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            criteria: CriteriaConfig::default(),
            strategy: Box::new(KeywordScoringStrategy::default()),
            ai_tags: DEFAULT_AI_TAGS.iter().map(ToString::to_string).collect(),
            batch_delay: None,
            cache: None,
        }
    }

    /// Build everything from a loaded configuration, including the cache
    /// when enabled.
    pub fn from_config(config: &GardenConfig) -> Result<Self, ImpactError> {
        config.validate()?;
        let strategy = KeywordScoringStrategy::from_config(&config.keywords)?;
        let mut analyzer = Self::new(config.criteria.clone(), strategy)?;
        if let Some(tags) = &config.keywords.ai_tags {
            analyzer.ai_tags = tags.iter().map(|t| t.to_lowercase()).collect();
        }
        analyzer.batch_delay = config.batch.delay();
        analyzer.cache = AnalysisCache::from_config(&config.cache).map(Arc::new);
        Ok(analyzer)
    }

    #[must_use]
    pub fn with_cache(mut self, cache: Arc<AnalysisCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub const fn with_batch_delay(mut self, delay: Option<Duration>) -> Self {
        self.batch_delay = delay;
        self
    }

    #[must_use]
    pub const fn criteria(&self) -> &CriteriaConfig {
        &self.criteria
    }

    #[must_use]
    pub fn cache(&self) -> Option<&AnalysisCache> {
        self.cache.as_deref()
    }

    #[must_use]
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Analyze one content item.
    ///
    /// A persisted impact block is reused unless `options.force_reanalysis`
    /// is set. Missing metadata never fails; it only lowers scores and
    /// confidence. Errors come from the scoring strategy alone.
    pub fn analyze_content(
        &self,
        item: &ContentItem,
        options: AnalyzeOptions,
    ) -> Result<ImpactAnalysisResult, ImpactError> {
        if !options.force_reanalysis
            && let Some(existing) = item.persisted_impact()
        {
            tracing::debug!(id = %item.id, "impact: reusing persisted score");
            return Ok(self.reuse_existing(item, existing));
        }

        let cache_key = match &self.cache {
            Some(_) => Some(AnalysisCache::key_for(item)?),
            None => None,
        };

        if !options.force_reanalysis
            && let (Some(cache), Some(key)) = (&self.cache, &cache_key)
            && let Some(mut hit) = cache.get(key)
        {
            tracing::trace!(id = %item.id, "impact: cache hit");
            hit.metadata.analyzed_at = Utc::now();
            return Ok(hit);
        }

        let result = self.score_fresh(item)?;
        if let (Some(cache), Some(key)) = (&self.cache, cache_key) {
            cache.insert(key, result.clone());
        }
        Ok(result)
    }

    fn score_fresh(&self, item: &ContentItem) -> Result<ImpactAnalysisResult, ImpactError> {
        let output = self.strategy.score(item)?;
        let signals = ConfidenceSignals::collect(item, &output);

        let mut scores = output.to_score();
        scores.confidence = signals.confidence();
        scores.overall_score = overall_score(&scores, &self.criteria);

        let metadata_signals = item
            .metadata
            .key_insights
            .iter()
            .filter(|insight| !insight.trim().is_empty())
            .count()
            + item.metadata.tags().count()
            + usize::from(item.metadata.exhibition().is_some());
        let data_points = output
            .keyword_hits
            .saturating_add(u32::try_from(metadata_signals).unwrap_or(u32::MAX));

        tracing::debug!(
            id = %item.id,
            overall = scores.overall_score,
            confidence = scores.confidence,
            data_points,
            "impact: scored"
        );

        Ok(self.interpret(item, scores, data_points, self.strategy.name()))
    }

    /// Wrap a persisted score without touching its ratings. The overall score
    /// is re-derived from the ratings; the stored confidence is kept.
    fn reuse_existing(&self, item: &ContentItem, existing: &ImpactScore) -> ImpactAnalysisResult {
        let mut scores = existing.clone();
        scores.confidence = classify::normalize_confidence(existing.confidence);
        scores.overall_score = overall_score(&scores, &self.criteria);
        let data_points = scores.leaf_count();
        self.interpret(item, scores, data_points, EXISTING_DATA_ALGORITHM)
    }

    fn interpret(
        &self,
        item: &ContentItem,
        scores: ImpactScore,
        data_points: u32,
        algorithm: &str,
    ) -> ImpactAnalysisResult {
        let recommendations =
            advice::recommendations(&scores, item.metadata.tags(), &self.ai_tags);
        let risk_factors = advice::risk_factors(&scores, scores.confidence);
        let action_priority = classify::action_priority(scores.overall_score, scores.confidence);
        let confidence_level = classify::confidence_level(scores.confidence);

        ImpactAnalysisResult {
            scores,
            recommendations,
            risk_factors,
            action_priority,
            confidence_level,
            metadata: AnalysisMetadata {
                analyzed_at: Utc::now(),
                data_points,
                algorithm: algorithm.to_string(),
                version: ANALYZER_VERSION.to_string(),
            },
        }
    }

    /// Analyze items one after another.
    ///
    /// Output order matches input order. A failing item is logged and
    /// recorded as [`BatchItemOutcome::Failed`]; the rest still run. Items
    /// without an id are labelled `item-<n>` (1-based).
    pub fn batch_analyze(
        &self,
        items: &[ContentItem],
        options: AnalyzeOptions,
    ) -> Vec<BatchItemOutcome> {
        let mut outcomes = Vec::with_capacity(items.len());
        let mut failed = 0usize;

        for (index, item) in items.iter().enumerate() {
            if index > 0
                && let Some(delay) = self.batch_delay
            {
                thread::sleep(delay);
            }

            let id = if item.id.trim().is_empty() {
                format!("item-{}", index + 1)
            } else {
                item.id.clone()
            };

            match self.analyze_content(item, options) {
                Ok(analysis) => outcomes.push(BatchItemOutcome::Analyzed {
                    id,
                    analysis: Box::new(analysis),
                }),
                Err(error) => {
                    tracing::warn!(%id, %error, "impact: batch item failed; continuing");
                    failed += 1;
                    outcomes.push(BatchItemOutcome::Failed {
                        id,
                        error: error.to_string(),
                    });
                }
            }
        }

        tracing::info!(total = items.len(), failed, "impact: batch complete");
        outcomes
    }

    /// Rank analyses by overall score. See [`ranking::compare_insights`].
    #[must_use]
    pub fn compare_insights(&self, items: &[IdentifiedAnalysis]) -> Vec<RankedInsight> {
        ranking::compare_insights(items)
    }

    /// Summarize analyses. See [`ranking::generate_report`].
    #[must_use]
    pub fn generate_report(&self, items: &[IdentifiedAnalysis]) -> ImpactReport {
        ranking::generate_report(items)
    }
}
