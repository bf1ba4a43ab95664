use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ImpactScore;

/// Metadata handed over by the content-storage collaborator.
///
/// Every field is optional on the wire. Missing or blank fields are treated as
/// absent signals by the analyzer rather than as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form category tags (e.g. `ai_machine_learning`).
    #[serde(default)]
    pub category: Vec<String>,
    /// Source or venue, e.g. an exhibition name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhibition: Option<String>,
    #[serde(default)]
    pub key_insights: Vec<String>,
}

impl ContentMetadata {
    /// Title, if present and not blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Exhibition/source, if present and not blank.
    #[must_use]
    pub fn exhibition(&self) -> Option<&str> {
        non_blank(self.exhibition.as_deref())
    }

    /// Category tags with blank entries dropped.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.category
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
    }

    #[must_use]
    pub fn has_category(&self) -> bool {
        self.tags().next().is_some()
    }

    #[must_use]
    pub fn has_key_insights(&self) -> bool {
        self.key_insights.iter().any(|i| !i.trim().is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A content item as read from the garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Stable identifier (usually the content slug).
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub metadata: ContentMetadata,
    #[serde(default)]
    pub body: String,
    /// Previously persisted impact block, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactScore>,
}

impl ContentItem {
    #[must_use]
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Persisted score worth reusing: present and with at least one dimension.
    #[must_use]
    pub fn persisted_impact(&self) -> Option<&ImpactScore> {
        self.impact.as_ref().filter(|score| !score.is_unscored())
    }
}
