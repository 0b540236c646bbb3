use serde::{Deserialize, Serialize};

use super::wire::{string_or_number, FromWire};

/// Direction of a story's expected market effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Positive => write!(f, "positive"),
            Impact::Negative => write!(f, "negative"),
            Impact::Neutral => write!(f, "neutral"),
        }
    }
}

/// A single analysed news story as shown in the feed.
///
/// Reads the backend's snake_case shape, writes the camelCase view shape.
/// Nothing is validated or recomputed: scores and sentiment come from the
/// backend as-is. Immutable once mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct NewsItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub category: String,
    pub title: String,
    pub summary: String,
    pub impact: Impact,
    /// Signed strength of the impact.
    pub impact_score: i32,
    /// Free-text sentiment label, e.g. "AI theme: strong positive".
    pub sentiment: String,
    pub date: String,
    pub time: String,
    pub source: String,
    /// Model confidence, 0–100.
    pub confidence: u8,
    /// Ticker symbols, in backend order.
    pub affected_companies: Vec<String>,
    pub asset_tags: Vec<String>,
    /// Display string such as "12ms".
    pub latency: String,
    pub detailed_summary: DetailedSummary,
    pub model_analysis: ModelAnalysis,
    pub house_view_context: HouseViewContext,
    pub portfolio_impact: PortfolioImpact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct DetailedSummary {
    pub what_happened: String,
    pub market_reaction: String,
    pub who: String,
    pub why_it_matters: String,
    pub magnitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct ModelAnalysis {
    pub key_facts: Vec<String>,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct HouseViewContext {
    pub current_stance: String,
    pub comparison: String,
    pub relevance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct PortfolioImpact {
    /// Entries of the form "Name (+)" / "Name (-)".
    pub affected_assets: Vec<String>,
    pub overall_impact: String,
    /// Absent means "no note"; omitted from the view when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_interpretation_note: Option<String>,
}

impl FromWire for NewsItem {
    const ENTITY: &'static str = "news";
}

impl NewsItem {
    /// Whether `impact` agrees with the sign of `impact_score`.
    ///
    /// Informational only; disagreeing items are still accepted.
    pub fn impact_matches_score(&self) -> bool {
        match self.impact {
            Impact::Positive => self.impact_score > 0,
            Impact::Negative => self.impact_score < 0,
            Impact::Neutral => true,
        }
    }

    /// Effective tone for display: a non-neutral label wins, otherwise the
    /// score's sign decides.
    pub fn tone(&self) -> Impact {
        match self.impact {
            Impact::Positive | Impact::Negative => self.impact,
            Impact::Neutral if self.impact_score > 0 => Impact::Positive,
            Impact::Neutral if self.impact_score < 0 => Impact::Negative,
            Impact::Neutral => Impact::Neutral,
        }
    }
}
