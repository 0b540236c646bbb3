use serde::{Deserialize, Serialize};

use super::wire::{string_or_number, FromWire};

/// Sector names recognised when scanning an asset's tags.
pub const KNOWN_SECTORS: [&str; 6] = [
    "Technology",
    "E-commerce",
    "Automotive",
    "Semiconductors",
    "Finance",
    "Healthcare",
];

/// Sector reported when no tag is a known sector.
pub const OTHER_SECTOR: &str = "Other";

/// Instrument class of a portfolio asset. Wire form is lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    #[default]
    Stock,
    Bond,
    Crypto,
    Forex,
    Commodity,
    Etf,
    Other,
}

impl AssetType {
    pub const ALL: [AssetType; 7] = [
        AssetType::Stock,
        AssetType::Bond,
        AssetType::Crypto,
        AssetType::Forex,
        AssetType::Commodity,
        AssetType::Etf,
        AssetType::Other,
    ];
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Stock => write!(f, "stock"),
            AssetType::Bond => write!(f, "bond"),
            AssetType::Crypto => write!(f, "crypto"),
            AssetType::Forex => write!(f, "forex"),
            AssetType::Commodity => write!(f, "commodity"),
            AssetType::Etf => write!(f, "etf"),
            AssetType::Other => write!(f, "other"),
        }
    }
}

/// Where an asset's `sector` value came from.
///
/// Backend assets carry no sector field, so theirs is derived from tags.
/// Built-in fallback assets carry an explicit one. The two paths can
/// disagree for the same company; keep them distinguishable until the
/// backend supplies `sector` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorOrigin {
    DerivedFromTags,
    Explicit,
}

/// First tag that names a known sector, or `"Other"`.
///
/// Matching is exact and case-sensitive, in tag order.
pub fn derive_sector(tags: &[String]) -> String {
    tags.iter()
        .find(|tag| KNOWN_SECTORS.contains(&tag.as_str()))
        .cloned()
        .unwrap_or_else(|| OTHER_SECTOR.to_string())
}

/// A tracked holding as shown on the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WirePortfolioAsset")]
pub struct PortfolioAsset {
    pub id: String,
    pub name: String,
    /// Ticker, uppercase.
    pub symbol: String,
    pub asset_type: AssetType,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Display string such as "$2.8T". Never populated from the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(skip)]
    pub sector_origin: Option<SectorOrigin>,
}

/// Backend shape of a portfolio asset.
#[derive(Deserialize)]
struct WirePortfolioAsset {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    name: String,
    symbol: String,
    asset_type: AssetType,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<WirePortfolioAsset> for PortfolioAsset {
    fn from(wire: WirePortfolioAsset) -> Self {
        let sector = derive_sector(&wire.tags);
        Self {
            id: wire.id,
            name: wire.name,
            symbol: wire.symbol,
            asset_type: wire.asset_type,
            tags: wire.tags,
            sector: Some(sector),
            market_cap: None,
            sector_origin: Some(SectorOrigin::DerivedFromTags),
        }
    }
}

impl FromWire for PortfolioAsset {
    const ENTITY: &'static str = "portfolio asset";
}

impl PortfolioAsset {
    /// A locally held asset with an explicit sector (no derivation).
    pub fn with_sector(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        sector: impl Into<String>,
        market_cap: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into().to_uppercase(),
            asset_type: AssetType::Stock,
            tags: Vec::new(),
            sector: Some(sector.into()),
            market_cap: Some(market_cap.into()),
            sector_origin: Some(SectorOrigin::Explicit),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Caller-side description of a new asset, before the acting user is known.
///
/// Unset fields fall back to the backend defaults when the create payload
/// is built: stock type and an empty tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub name: String,
    pub symbol: String,
    pub asset_type: Option<AssetType>,
    pub tags: Option<Vec<String>>,
    /// Kept for the caller's own display; never sent.
    pub sector: Option<String>,
}

/// Create payload sent to `POST /portfolio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAsset {
    pub user_id: u64,
    pub name: String,
    pub symbol: String,
    pub asset_type: AssetType,
    pub tags: Vec<String>,
}

impl NewAsset {
    pub fn from_draft(draft: AssetDraft, user_id: u64) -> Self {
        Self {
            user_id,
            name: draft.name,
            symbol: draft.symbol.to_uppercase(),
            asset_type: draft.asset_type.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
        }
    }
}

/// Partial update sent to `PUT /portfolio/{id}`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl AssetUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into().to_uppercase());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.symbol.is_none() && self.tags.is_none()
    }
}
