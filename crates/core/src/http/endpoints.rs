//! Path templates for every backend resource, relative to the configured base URL.
//!
//! All builders are pure and interpolate identifiers verbatim. Anything that
//! may contain reserved characters must go through [`encode_segment`] first.

use crate::errors::CoreError;

/// Percent-encode a single path segment (spaces become `%20`, `/` becomes `%2F`).
///
/// Empty, `.` and `..` segments are rejected: URL parsing treats dot-segments
/// (escaped or not) as navigation, so they would address a different resource.
pub fn encode_segment(segment: &str) -> Result<String, CoreError> {
    if matches!(segment, "" | "." | "..") {
        return Err(CoreError::Validation(format!(
            "'{segment}' is not a valid path identifier"
        )));
    }
    Ok(url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

pub mod news {
    pub fn all() -> &'static str {
        "/news"
    }

    pub fn by_id(id: &str) -> String {
        format!("/news/{id}")
    }

    pub fn by_category(category: &str) -> String {
        format!("/news/category/{category}")
    }

    pub fn search() -> &'static str {
        "/news/search"
    }

    pub fn latest() -> &'static str {
        "/news/latest"
    }
}

pub mod portfolio {
    pub fn by_user(user_id: u64) -> String {
        format!("/portfolio/{user_id}")
    }

    pub fn by_tag(user_id: u64, tag: &str) -> String {
        format!("/portfolio/{user_id}/tag/{tag}")
    }

    pub fn create() -> &'static str {
        "/portfolio"
    }

    pub fn update(asset_id: &str) -> String {
        format!("/portfolio/{asset_id}")
    }

    pub fn delete(asset_id: &str) -> String {
        format!("/portfolio/{asset_id}")
    }

    pub fn demo(user_id: u64) -> String {
        format!("/portfolio/demo/{user_id}")
    }
}

pub mod reports {
    pub fn weekly() -> &'static str {
        "/reports/weekly"
    }
}

pub mod sources {
    pub fn all() -> &'static str {
        "/sources"
    }

    pub fn by_id(id: u64) -> String {
        format!("/sources/{id}")
    }

    pub fn by_codename(codename: &str) -> String {
        format!("/sources/codename/{codename}")
    }

    pub fn create() -> &'static str {
        "/sources"
    }

    pub fn update(id: u64) -> String {
        format!("/sources/{id}")
    }

    pub fn delete(id: u64) -> String {
        format!("/sources/{id}")
    }
}
