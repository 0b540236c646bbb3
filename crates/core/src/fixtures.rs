//! Built-in data shown when the backend cannot be reached.
//!
//! Fixture assets carry an explicit sector and market cap. They are never
//! run through `derive_sector`, and they have no tags.

use crate::models::news::{
    DetailedSummary, HouseViewContext, Impact, ModelAnalysis, NewsItem, PortfolioImpact,
};
use crate::models::portfolio::PortfolioAsset;

pub fn mock_portfolio() -> Vec<PortfolioAsset> {
    vec![
        PortfolioAsset::with_sector("1", "Apple Inc.", "AAPL", "Technology", "$2.8T"),
        PortfolioAsset::with_sector("2", "Tesla Inc.", "TSLA", "Automotive", "$800B"),
        PortfolioAsset::with_sector("3", "Microsoft Corp.", "MSFT", "Technology", "$2.5T"),
        PortfolioAsset::with_sector("4", "Meta Platforms", "META", "Technology", "$750B"),
        PortfolioAsset::with_sector("5", "Amazon.com Inc.", "AMZN", "E-commerce", "$1.2T"),
        PortfolioAsset::with_sector("6", "Nvidia Corporation", "NVDA", "Semiconductors", "$1.1T"),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn mock_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".into(),
            category: "Product/Technology Release".into(),
            title: "Meta launches AI-powered smart glasses with new connectivity features".into(),
            summary: "Meta unveiled its latest AI smart glasses with on-device AI, native voice \
                      commands and real-time translation. Early reactions question battery life \
                      and price point."
                .into(),
            impact: Impact::Neutral,
            impact_score: 3,
            sentiment: "neutral vs. house view: 0".into(),
            date: "2025-09-17".into(),
            time: "00:00:00".into(),
            source: "CNN".into(),
            confidence: 90,
            affected_companies: strings(&["META"]),
            asset_tags: strings(&["Technology", "AR/VR", "Wearables"]),
            latency: "20ms".into(),
            detailed_summary: DetailedSummary {
                what_happened: "Meta launched AI smart glasses with on-device AI processing"
                    .into(),
                market_reaction: "Shares rose modestly post-announcement".into(),
                who: "Meta".into(),
                why_it_matters: "Could shift usage from smartphones to wearable AI interfaces"
                    .into(),
                magnitude: "Medium - potential consumer electronics disruption in AR/VR space"
                    .into(),
            },
            model_analysis: ModelAnalysis {
                key_facts: strings(&[
                    "On-device AI processing to reduce latency",
                    "Real-time translation and voice assistant features",
                ]),
                sources: strings(&["CNN"]),
            },
            house_view_context: HouseViewContext {
                current_stance: "House expects incremental updates in AR devices".into(),
                comparison: "More ambitious connectivity-first iteration than prior models".into(),
                relevance: "0 neutral deviation from house view".into(),
            },
            portfolio_impact: PortfolioImpact {
                affected_assets: strings(&["Meta (+)", "Apple (-)"]),
                overall_impact: "Potential upside in wearables and AR players".into(),
                pre_interpretation_note: Some(
                    "Downside risk includes cost, battery constraints and adoption hurdles."
                        .into(),
                ),
            },
        },
        NewsItem {
            id: "2".into(),
            category: "Earnings Call".into(),
            title: "Microsoft beats expectations, raises AI infrastructure guidance".into(),
            summary: "Microsoft reported strong Q4 earnings with cloud revenue above \
                      expectations and higher AI infrastructure guidance."
                .into(),
            impact: Impact::Positive,
            impact_score: 3,
            sentiment: "AI theme: strong positive".into(),
            date: "2024-09-20".into(),
            time: "14:15:10".into(),
            source: "Bloomberg".into(),
            confidence: 91,
            affected_companies: strings(&["MSFT", "GOOGL"]),
            asset_tags: strings(&["US", "Technology"]),
            latency: "12ms".into(),
            detailed_summary: DetailedSummary {
                what_happened: "Microsoft reported strong Q4 earnings".into(),
                market_reaction: "MSFT up 5%, tech sector rallies, AI stocks outperform".into(),
                who: "Microsoft".into(),
                why_it_matters: "Validates enterprise AI adoption".into(),
                magnitude: "High".into(),
            },
            model_analysis: ModelAnalysis {
                key_facts: strings(&["Cloud revenue beat", "AI guidance raised"]),
                sources: strings(&["Bloomberg"]),
            },
            house_view_context: HouseViewContext {
                current_stance: "Overweight US large-cap tech".into(),
                comparison: "Stronger than consensus".into(),
                relevance: "Supports house view".into(),
            },
            portfolio_impact: PortfolioImpact {
                affected_assets: strings(&["Microsoft (+)", "Alphabet (+)"]),
                overall_impact: "Positive for AI infrastructure holdings".into(),
                pre_interpretation_note: None,
            },
        },
        NewsItem {
            id: "3".into(),
            category: "Fed Policy".into(),
            title: "Fed signals patience on rate cuts as inflation cools slowly".into(),
            summary: "Fed officials hint at possible policy adjustments in upcoming meetings, \
                      with implications for growth stock valuations and USD."
                .into(),
            impact: Impact::Negative,
            impact_score: -2,
            sentiment: "rates: hawkish tilt".into(),
            date: "2024-09-19".into(),
            time: "18:30:00".into(),
            source: "Reuters".into(),
            confidence: 84,
            affected_companies: strings(&[]),
            asset_tags: strings(&["USD", "Government Bonds", "US Equity"]),
            latency: "15ms".into(),
            detailed_summary: DetailedSummary {
                what_happened: "FOMC minutes showed a preference for waiting".into(),
                market_reaction: "Treasury yields up, USD firmer".into(),
                who: "Federal Reserve".into(),
                why_it_matters: "Delays relief for rate-sensitive assets".into(),
                magnitude: "Medium".into(),
            },
            model_analysis: ModelAnalysis {
                key_facts: strings(&["Core inflation still above target"]),
                sources: strings(&["Reuters"]),
            },
            house_view_context: HouseViewContext {
                current_stance: "Expect two cuts this year".into(),
                comparison: "Slightly more hawkish than expected".into(),
                relevance: "Modest deviation from house view".into(),
            },
            portfolio_impact: PortfolioImpact {
                affected_assets: strings(&["US Treasuries (-)", "USD (+)"]),
                overall_impact: "Headwind for duration and growth equities".into(),
                pre_interpretation_note: None,
            },
        },
    ]
}
