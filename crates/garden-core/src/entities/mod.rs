//! Entity structs for the impact analysis domain.
//!
//! Struct fields serialize in `camelCase` so the persisted impact block in a
//! content item's front matter reads the same as the JSON output. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for roundtrip and schema
//! validation.

mod analysis;
mod content;
mod impact;

pub use analysis::{AnalysisMetadata, ImpactAnalysisResult};
pub use content::{ContentItem, ContentMetadata};
pub use impact::{
    BusinessValue, ImpactScore, ImplementationFeasibility, SocialImpact, StrategicAlignment,
};
