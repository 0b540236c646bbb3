//! Client-side narrowing of already-fetched lists.

use crate::models::news::NewsItem;
use crate::models::portfolio::PortfolioAsset;

/// Checkbox filters of the news page.
///
/// Groups combine with AND; values inside a group combine with OR; an empty
/// group does not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilter {
    /// e.g. "US Equity", "EU Equity". Only the first word is matched.
    pub asset_classes: Vec<String>,
    /// "Government" and/or "Corporate".
    pub fixed_income: Vec<String>,
    /// e.g. "USD", "CHF". Matched against whole tags.
    pub currencies: Vec<String>,
    /// e.g. "Gold", "Oil".
    pub commodities: Vec<String>,
}

impl NewsFilter {
    pub fn is_active(&self) -> bool {
        !(self.asset_classes.is_empty()
            && self.fixed_income.is_empty()
            && self.currencies.is_empty()
            && self.commodities.is_empty())
    }

    pub fn matches(&self, news: &NewsItem) -> bool {
        self.matches_asset_class(news)
            && self.matches_currency(news)
            && self.matches_fixed_income(news)
            && self.matches_commodity(news)
    }

    pub fn apply<'a>(&self, news: &'a [NewsItem]) -> Vec<&'a NewsItem> {
        if !self.is_active() {
            return news.iter().collect();
        }
        news.iter().filter(|n| self.matches(n)).collect()
    }

    fn matches_asset_class(&self, news: &NewsItem) -> bool {
        self.asset_classes.is_empty()
            || self.asset_classes.iter().any(|class| {
                let head = class.split(' ').next().unwrap_or_default().to_lowercase();
                news.asset_tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&head))
            })
    }

    fn matches_currency(&self, news: &NewsItem) -> bool {
        self.currencies.is_empty() || self.currencies.iter().any(|c| news.asset_tags.contains(c))
    }

    fn matches_fixed_income(&self, news: &NewsItem) -> bool {
        if self.fixed_income.is_empty() {
            return true;
        }
        let wants = |name: &str| self.fixed_income.iter().any(|f| f == name);
        (wants("Government") && news.category.contains("Fed"))
            || (wants("Corporate") && news.category.contains("Earnings"))
    }

    fn matches_commodity(&self, news: &NewsItem) -> bool {
        self.commodities.is_empty()
            || self.commodities.iter().any(|commodity| {
                let needle = commodity.to_lowercase();
                news.asset_tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
            })
    }
}

/// Case-insensitive substring search over the visible text of each story.
/// A blank query returns everything.
pub fn search_news<'a>(news: &'a [NewsItem], text: &str) -> Vec<&'a NewsItem> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return news.iter().collect();
    }
    news.iter()
        .filter(|n| {
            n.title.to_lowercase().contains(&needle)
                || n.summary.to_lowercase().contains(&needle)
                || n.category.to_lowercase().contains(&needle)
                || n.affected_companies
                    .iter()
                    .chain(n.asset_tags.iter())
                    .any(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Assets carrying exactly `tag`.
pub fn assets_with_tag<'a>(assets: &'a [PortfolioAsset], tag: &str) -> Vec<&'a PortfolioAsset> {
    assets.iter().filter(|a| a.has_tag(tag)).collect()
}
