use crate::errors::CoreError;
use crate::models::portfolio::{AssetDraft, AssetType};

/// Raw input of the "add asset" form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetForm {
    pub name: String,
    pub symbol: String,
    pub asset_type: AssetType,
    /// Comma-separated, e.g. "tech, dividend".
    pub tags: String,
    /// Chosen sector, empty when none was picked.
    pub sector: String,
}

impl AssetForm {
    /// Validate and normalize into a draft ready for `create_asset`.
    ///
    /// - name and symbol must be non-blank
    /// - symbol is trimmed and uppercased
    /// - tags are split on commas, trimmed, empties dropped
    /// - a chosen sector is appended as the last tag
    pub fn into_draft(self) -> Result<AssetDraft, CoreError> {
        let name = self.name.trim().to_string();
        let symbol = self.symbol.trim().to_uppercase();
        if name.is_empty() || symbol.is_empty() {
            return Err(CoreError::Validation(
                "Please fill in all required fields".into(),
            ));
        }

        let mut tags: Vec<String> = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let sector = self.sector.trim().to_string();
        let sector = if sector.is_empty() {
            None
        } else {
            tags.push(sector.clone());
            Some(sector)
        };

        Ok(AssetDraft {
            name,
            symbol,
            asset_type: Some(self.asset_type),
            tags: Some(tags),
            sector,
        })
    }
}
