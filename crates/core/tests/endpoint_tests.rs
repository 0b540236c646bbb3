// ═══════════════════════════════════════════════════════════════════
// Endpoint Catalog Tests — path templates and segment encoding
// ═══════════════════════════════════════════════════════════════════

use nexus_core::errors::CoreError;
use nexus_core::http::endpoints::{encode_segment, news, portfolio, reports, sources};

#[test]
fn news_paths() {
    assert_eq!(news::all(), "/news");
    assert_eq!(news::by_id("abc"), "/news/abc");
    assert_eq!(news::by_category("Earnings"), "/news/category/Earnings");
    assert_eq!(news::search(), "/news/search");
    assert_eq!(news::latest(), "/news/latest");
}

#[test]
fn portfolio_paths() {
    assert_eq!(portfolio::by_user(7), "/portfolio/7");
    assert_eq!(portfolio::by_tag(7, "tech"), "/portfolio/7/tag/tech");
    assert_eq!(portfolio::create(), "/portfolio");
    assert_eq!(portfolio::update("12"), "/portfolio/12");
    assert_eq!(portfolio::delete("12"), "/portfolio/12");
    assert_eq!(portfolio::demo(7), "/portfolio/demo/7");
}

#[test]
fn report_paths() {
    assert_eq!(reports::weekly(), "/reports/weekly");
}

#[test]
fn source_paths() {
    assert_eq!(sources::all(), "/sources");
    assert_eq!(sources::create(), "/sources");
    assert_eq!(sources::by_id(3), "/sources/3");
    assert_eq!(sources::update(3), "/sources/3");
    assert_eq!(sources::delete(3), "/sources/3");
    assert_eq!(sources::by_codename("bbg"), "/sources/codename/bbg");
}

#[test]
fn catalog_does_not_escape() {
    assert_eq!(news::by_category("Fed Policy"), "/news/category/Fed Policy");
}

#[test]
fn builders_are_deterministic() {
    assert_eq!(portfolio::by_tag(1, "x"), portfolio::by_tag(1, "x"));
}

mod encoding {
    use super::*;

    #[test]
    fn plain_segment_unchanged() {
        assert_eq!(encode_segment("Technology").unwrap(), "Technology");
        assert_eq!(encode_segment("E-commerce").unwrap(), "E-commerce");
    }

    #[test]
    fn space_becomes_percent_20() {
        assert_eq!(encode_segment("Fed Policy").unwrap(), "Fed%20Policy");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_segment("Product/Technology Release").unwrap(), "Product%2FTechnology%20Release");
        assert_eq!(encode_segment("a+b").unwrap(), "a%2Bb");
        assert_eq!(encode_segment("q?x=1&y").unwrap(), "q%3Fx%3D1%26y");
    }

    #[test]
    fn escaped_segment_in_template() {
        assert_eq!(
            news::by_category(&encode_segment("M&A Activity").unwrap()),
            "/news/category/M%26A%20Activity"
        );
    }

    #[test]
    fn dot_segments_are_rejected() {
        for segment in [".", "..", ""] {
            assert!(matches!(
                encode_segment(segment),
                Err(CoreError::Validation(_))
            ));
        }
    }

    #[test]
    fn dots_inside_a_segment_are_kept() {
        assert_eq!(encode_segment("...").unwrap(), "...");
        assert_eq!(encode_segment("v1.2").unwrap(), "v1.2");
        assert_eq!(encode_segment(".hidden").unwrap(), ".hidden");
    }
}
