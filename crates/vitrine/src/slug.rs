//! Slug derivation for content pages.
//!
//! A slug is the normalized path string used as the join key between
//! enumerated routes and fetched page records. It is derived, compared, and
//! thrown away; never persisted.

/// Derives a page's slug from its URL by stripping leading and trailing
/// slashes. Pure and deterministic.
///
/// ## Example
/// ```rust
/// assert_eq!(vitrine::slug::page_slug("/en/about/"), "en/about");
/// assert_eq!(vitrine::slug::page_slug("/"), "");
/// ```
pub fn page_slug(url: &str) -> &str {
    url.trim_start_matches('/').trim_end_matches('/')
}

/// First segment of a URL's slug, used to match locale prefixes.
pub fn first_segment(url: &str) -> &str {
    page_slug(url).split('/').next().unwrap_or_default()
}
