use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::news::Impact;
use super::wire::{string_or_number, FromWire};

/// AI-generated digest of one week of news. Held only by the caller that
/// requested it; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct WeeklyAIReport {
    pub report_date: String,
    pub week_start: String,
    pub week_end: String,
    #[serde(rename(deserialize = "report_title"))]
    pub title: String,
    pub executive_summary: String,
    pub market_impact: MarketImpactSummary,
    pub top_news: Vec<ReportNewsRef>,
    pub category_insights: Vec<CategoryInsight>,
    pub key_trends: Vec<String>,
    pub outlook: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct MarketImpactSummary {
    pub positive_count: u32,
    pub negative_count: u32,
    pub neutral_count: u32,
    pub overall_sentiment: String,
    pub key_factors: Vec<String>,
}

impl MarketImpactSummary {
    pub fn total(&self) -> u32 {
        self.positive_count + self.negative_count + self.neutral_count
    }
}

/// Lightweight pointer to a story featured in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct ReportNewsRef {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub url: String,
    pub published_at: String,
    pub impact_prediction: Impact,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "snake_case", serialize = "camelCase"))]
pub struct CategoryInsight {
    pub category: String,
    pub news_count: u32,
    pub impact_summary: String,
}

impl FromWire for WeeklyAIReport {
    const ENTITY: &'static str = "weekly report";
}

/// Optional filters for report generation. Unset fields are not sent and
/// the backend applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_news_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories_of_interest: Option<Vec<String>>,
}

impl WeeklyReportRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn max_news_items(mut self, max: u32) -> Self {
        self.max_news_items = Some(max);
        self
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories_of_interest = Some(categories.into_iter().map(Into::into).collect());
        self
    }
}
