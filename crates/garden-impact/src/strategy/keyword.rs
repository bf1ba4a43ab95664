//! Keyword-count scoring.
//!
//! Each content-derived metric counts occurrences of a small Japanese/English
//! keyword list in the lower-cased body, scales the count by a per-metric
//! multiplier, rounds and clamps into 1-5. `vision_fit` comes from category
//! tags and `network_expansion` from the exhibition string; both ignore the
//! body.

use std::collections::BTreeMap;

use garden_config::KeywordsConfig;
use garden_core::entities::{
    BusinessValue, ContentItem, ImplementationFeasibility, SocialImpact, StrategicAlignment,
};
use garden_core::enums::Metric;
use garden_core::rating::Rating;

use super::{ScoringStrategy, StrategyOutput};
use crate::error::ImpactError;

const DEFAULT_MULTIPLIER: f64 = 1.5;

/// Rating for a strategic category match / international exhibition.
const MATCHED_METADATA_RATING: Rating = match Rating::checked(4) {
    Some(r) => r,
    None => Rating::MIN,
};
const UNMATCHED_METADATA_RATING: Rating = match Rating::checked(3) {
    Some(r) => r,
    None => Rating::MIN,
};

fn default_metric_keywords(metric: Metric) -> &'static [&'static str] {
    match metric {
        Metric::MarketOpportunity => &[
            "市場", "機会", "需要", "成長", "market", "opportunity", "demand", "growth",
        ],
        Metric::CompetitiveAdvantage => &[
            "独自",
            "差別化",
            "優位",
            "特許",
            "ユニーク",
            "unique",
            "differentiat",
            "advantage",
            "patent",
        ],
        Metric::RevenuePotential => &[
            "収益", "売上", "利益", "収入", "revenue", "profit", "monetiz", "sales",
        ],
        Metric::TechnicalComplexity => &[
            "複雑",
            "高度",
            "難しい",
            "研究開発",
            "complex",
            "advanced",
            "difficult",
            "cutting-edge",
        ],
        Metric::ResourceRequirements => &[
            "コスト",
            "費用",
            "投資",
            "人材",
            "cost",
            "investment",
            "budget",
            "expensive",
        ],
        Metric::TimelineEstimate => &[
            "長期",
            "数年",
            "時間がかかる",
            "long-term",
            "years",
            "roadmap",
        ],
        Metric::UserBenefit => &[
            "ユーザー",
            "便利",
            "利便性",
            "使いやすい",
            "user",
            "convenient",
            "usability",
            "benefit",
        ],
        Metric::SocietalContribution => &[
            "社会",
            "貢献",
            "地域",
            "課題解決",
            "society",
            "social",
            "community",
            "public",
        ],
        Metric::Sustainability => &[
            "持続可能",
            "環境",
            "省エネ",
            "脱炭素",
            "sustainab",
            "environment",
            "carbon",
            "renewable",
        ],
        Metric::SkillDevelopment => &[
            "学び", "技術", "スキル", "習得", "learn", "skill", "technology", "knowledge",
        ],
        Metric::VisionFit | Metric::NetworkExpansion => &[],
    }
}

const DEFAULT_STRATEGIC_TAGS: &[&str] = &[
    "ai_machine_learning",
    "sustainability",
    "digital_transformation",
    "iot",
    "robotics",
    "healthcare",
];

const DEFAULT_GLOBAL_MARKERS: &[&str] = &[
    "international",
    "global",
    "world",
    "国際",
    "グローバル",
    "世界",
];

const DEFAULT_EVIDENCE_MARKERS: &[&str] = &[
    "データ",
    "統計",
    "調査",
    "data",
    "evidence",
    "statistic",
    "survey",
    "research",
];

const DEFAULT_VERIFIED_MARKERS: &[&str] = &[
    "実証",
    "検証",
    "実績",
    "proven",
    "verified",
    "validated",
];

/// Keyword list and multiplier for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricKeywords {
    pub keywords: Vec<String>,
    pub multiplier: f64,
}

impl MetricKeywords {
    fn count_hits(&self, text: &str) -> u32 {
        let hits: usize = self
            .keywords
            .iter()
            .filter(|kw| !kw.is_empty())
            .map(|kw| text.matches(kw.as_str()).count())
            .sum();
        u32::try_from(hits).unwrap_or(u32::MAX)
    }

    fn rating(&self, hits: u32) -> Rating {
        Rating::from_raw(f64::from(hits) * self.multiplier)
    }
}

/// All keyword data the strategy reads. Every entry is lower-cased.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    pub metrics: BTreeMap<Metric, MetricKeywords>,
    pub strategic_tags: Vec<String>,
    pub global_markers: Vec<String>,
    pub evidence_markers: Vec<String>,
    pub verified_markers: Vec<String>,
}

fn lowered<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| w.as_ref().to_lowercase()).collect()
}

impl Default for KeywordTable {
    fn default() -> Self {
        let metrics = Metric::ALL
            .into_iter()
            .filter(|m| !matches!(m, Metric::VisionFit | Metric::NetworkExpansion))
            .map(|m| {
                (
                    m,
                    MetricKeywords {
                        keywords: lowered(default_metric_keywords(m)),
                        multiplier: DEFAULT_MULTIPLIER,
                    },
                )
            })
            .collect();

        Self {
            metrics,
            strategic_tags: lowered(DEFAULT_STRATEGIC_TAGS),
            global_markers: lowered(DEFAULT_GLOBAL_MARKERS),
            evidence_markers: lowered(DEFAULT_EVIDENCE_MARKERS),
            verified_markers: lowered(DEFAULT_VERIFIED_MARKERS),
        }
    }
}

impl KeywordTable {
    /// Built-in table with configuration overrides applied.
    pub fn from_config(config: &KeywordsConfig) -> Result<Self, ImpactError> {
        let mut table = Self::default();

        for (metric, entry) in config.metric_overrides()? {
            let slot = table.metrics.entry(metric).or_insert_with(|| MetricKeywords {
                keywords: Vec::new(),
                multiplier: DEFAULT_MULTIPLIER,
            });
            if let Some(keywords) = &entry.keywords {
                slot.keywords = lowered(keywords);
            }
            if let Some(multiplier) = entry.multiplier {
                slot.multiplier = multiplier;
            }
        }

        if let Some(tags) = &config.strategic_tags {
            table.strategic_tags = lowered(tags);
        }
        if let Some(markers) = &config.global_markers {
            table.global_markers = lowered(markers);
        }
        if let Some(markers) = &config.evidence_markers {
            table.evidence_markers = lowered(markers);
        }
        if let Some(markers) = &config.verified_markers {
            table.verified_markers = lowered(markers);
        }

        Ok(table)
    }
}

fn contains_any(text: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && text.contains(needle.as_str()))
}

/// The default strategy: keyword counting over the body plus two metadata
/// lookups.
#[derive(Debug, Clone, Default)]
pub struct KeywordScoringStrategy {
    table: KeywordTable,
}

impl KeywordScoringStrategy {
    pub const NAME: &'static str = "keyword_heuristic";

    #[must_use]
    pub const fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn from_config(config: &KeywordsConfig) -> Result<Self, ImpactError> {
        Ok(Self::new(KeywordTable::from_config(config)?))
    }

    #[must_use]
    pub const fn table(&self) -> &KeywordTable {
        &self.table
    }

    fn vision_fit(&self, item: &ContentItem) -> Rating {
        let strategic = item.metadata.tags().any(|tag| {
            let tag = tag.to_lowercase();
            self.table.strategic_tags.contains(&tag)
        });
        if strategic {
            MATCHED_METADATA_RATING
        } else {
            UNMATCHED_METADATA_RATING
        }
    }

    fn network_expansion(&self, item: &ContentItem) -> Rating {
        let international = item
            .metadata
            .exhibition()
            .is_some_and(|venue| contains_any(&venue.to_lowercase(), &self.table.global_markers));
        if international {
            MATCHED_METADATA_RATING
        } else {
            UNMATCHED_METADATA_RATING
        }
    }
}

impl ScoringStrategy for KeywordScoringStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn score(&self, item: &ContentItem) -> Result<StrategyOutput, ImpactError> {
        let text = item.body.to_lowercase();
        let mut keyword_hits = 0u32;
        let mut rate = |metric: Metric| -> Rating {
            self.table.metrics.get(&metric).map_or(Rating::MIN, |entry| {
                let hits = entry.count_hits(&text);
                keyword_hits = keyword_hits.saturating_add(hits);
                entry.rating(hits)
            })
        };

        let business_value = BusinessValue {
            market_opportunity: rate(Metric::MarketOpportunity),
            competitive_advantage: rate(Metric::CompetitiveAdvantage),
            revenue_potential: rate(Metric::RevenuePotential),
        };
        let implementation_feasibility = ImplementationFeasibility {
            technical_complexity: rate(Metric::TechnicalComplexity),
            resource_requirements: rate(Metric::ResourceRequirements),
            timeline_estimate: rate(Metric::TimelineEstimate),
        };
        let social_impact = SocialImpact {
            user_benefit: rate(Metric::UserBenefit),
            societal_contribution: rate(Metric::SocietalContribution),
            sustainability: rate(Metric::Sustainability),
        };
        let skill_development = rate(Metric::SkillDevelopment);

        let strategic_alignment = StrategicAlignment {
            vision_fit: self.vision_fit(item),
            skill_development,
            network_expansion: self.network_expansion(item),
        };

        Ok(StrategyOutput {
            business_value,
            implementation_feasibility,
            social_impact,
            strategic_alignment,
            keyword_hits,
            evidence_marker: contains_any(&text, &self.table.evidence_markers),
            verified_marker: contains_any(&text, &self.table.verified_markers),
        })
    }
}

#[cfg(test)]
mod tests {
    use garden_config::KeywordOverride;
    use garden_core::entities::ContentMetadata;

    use super::*;

    fn item(body: &str, category: &[&str], exhibition: Option<&str>) -> ContentItem {
        ContentItem {
            id: "t".into(),
            metadata: ContentMetadata {
                title: Some("t".into()),
                category: category.iter().map(ToString::to_string).collect(),
                exhibition: exhibition.map(ToString::to_string),
                key_insights: Vec::new(),
            },
            body: body.into(),
            impact: None,
        }
    }

    fn score(body: &str) -> StrategyOutput {
        KeywordScoringStrategy::default()
            .score(&item(body, &[], None))
            .unwrap()
    }

    #[test]
    fn empty_body_clamps_to_minimum() {
        let out = score("");
        assert_eq!(out.business_value.market_opportunity, Rating::MIN);
        assert_eq!(out.implementation_feasibility.technical_complexity, Rating::MIN);
        assert_eq!(out.social_impact.sustainability, Rating::MIN);
        assert_eq!(out.strategic_alignment.skill_development, Rating::MIN);
        assert_eq!(out.strategic_alignment.vision_fit.get(), 3);
        assert_eq!(out.strategic_alignment.network_expansion.get(), 3);
        assert_eq!(out.keyword_hits, 0);
        assert!(!out.evidence_marker);
        assert!(!out.verified_marker);
    }

    #[test]
    fn japanese_keywords_are_counted() {
        let out = score("市場機会が大きく、ユーザーの便利性も高い");
        // 市場 + 機会 = 2 hits * 1.5 = 3
        assert_eq!(out.business_value.market_opportunity.get(), 3);
        // ユーザー + 便利 = 2 hits * 1.5 = 3
        assert_eq!(out.social_impact.user_benefit.get(), 3);
        assert_eq!(out.keyword_hits, 4);
    }

    #[test]
    fn english_keywords_match_case_insensitively() {
        let out = score("MARKET growth and Market demand");
        assert_eq!(out.business_value.market_opportunity, Rating::MAX);
    }

    #[test]
    fn single_hit_rounds_up() {
        let out = score("a patent");
        // 1 * 1.5 = 1.5 rounds to 2
        assert_eq!(out.business_value.competitive_advantage.get(), 2);
    }

    #[test]
    fn strategic_tag_sets_vision_fit() {
        let strategy = KeywordScoringStrategy::default();
        let out = strategy
            .score(&item("", &["AI_Machine_Learning"], None))
            .unwrap();
        assert_eq!(out.strategic_alignment.vision_fit.get(), 4);
    }

    #[test]
    fn global_exhibition_sets_network_expansion() {
        let strategy = KeywordScoringStrategy::default();
        let out = strategy
            .score(&item("", &[], Some("CES International 2026")))
            .unwrap();
        assert_eq!(out.strategic_alignment.network_expansion.get(), 4);

        let out = strategy.score(&item("", &[], Some("CEATEC 2025"))).unwrap();
        assert_eq!(out.strategic_alignment.network_expansion.get(), 3);
    }

    #[test]
    fn evidence_and_verified_markers_detected() {
        let out = score("調査データによると実証済み");
        assert!(out.evidence_marker);
        assert!(out.verified_marker);
    }

    #[test]
    fn overrides_replace_keywords_and_multiplier() {
        let mut config = KeywordsConfig::default();
        config.metrics.insert(
            "market_opportunity".into(),
            KeywordOverride {
                keywords: Some(vec!["Booth".into()]),
                multiplier: Some(5.0),
            },
        );
        config.strategic_tags = Some(vec!["Robotics".into()]);
        let strategy = KeywordScoringStrategy::from_config(&config).unwrap();

        let out = strategy.score(&item("busy booth", &["robotics"], None)).unwrap();
        assert_eq!(out.business_value.market_opportunity, Rating::MAX);
        assert_eq!(out.strategic_alignment.vision_fit.get(), 4);

        // The old keywords no longer count.
        let out = strategy.score(&item("market market", &[], None)).unwrap();
        assert_eq!(out.business_value.market_opportunity, Rating::MIN);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let mut config = KeywordsConfig::default();
        config
            .metrics
            .insert("network_expansion".into(), KeywordOverride::default());
        assert!(KeywordScoringStrategy::from_config(&config).is_err());
    }

    #[test]
    fn scoring_is_deterministic() {
        let strategy = KeywordScoringStrategy::default();
        let it = item("sustainable community data", &["iot"], Some("Global Expo"));
        assert_eq!(strategy.score(&it).unwrap(), strategy.score(&it).unwrap());
    }
}
