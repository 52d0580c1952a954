//! Build-time enumeration of content page paths.
use std::time::Instant;

use log::info;

use crate::commerce::{CommerceClient, FetchContext, LocaleConfig};
use crate::errors::CommerceError;
use crate::locale::MissingLocaleLog;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};
use crate::route::StaticPaths;
use crate::slug::first_segment;

/// Enumerates every valid content page path to pre-render.
///
/// Page URLs are kept verbatim when no locale set is configured. When locales
/// are configured, only URLs whose first slug segment is a supported locale
/// are kept; the rest are reported through [`MissingLocaleLog`] and dropped.
/// Pages without a URL are skipped. The returned fallback is always disabled.
pub async fn enumerate_paths<C: CommerceClient>(
    client: &C,
    locales: Option<&[String]>,
) -> Result<StaticPaths, CommerceError> {
    let start = Instant::now();

    let ctx = FetchContext {
        config: LocaleConfig {
            locale: None,
            locales: locales.map(|locales| locales.to_vec()),
        },
        preview: false,
    };
    let pages = client.all_pages(&ctx).await?;

    let mut invalid_paths = MissingLocaleLog::new();
    let mut paths = Vec::new();

    for page in &pages {
        let Some(url) = page.url.as_deref() else {
            continue;
        };
        // An empty URL routes nowhere; treat it like a missing one.
        if url.is_empty() {
            continue;
        }

        match locales {
            None => paths.push(url.to_string()),
            Some(locales) => {
                // If there are locales, only include the pages whose URL starts with one of them
                if locales.iter().any(|locale| locale == first_segment(url)) {
                    paths.push(url.to_string());
                } else {
                    invalid_paths.push(url);
                }
            }
        }
    }

    invalid_paths.flush();

    info!(
        target: "paths",
        "enumerated {} path(s) in {}",
        paths.len(),
        format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
    );

    Ok(StaticPaths::new(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commerce::InMemoryClient;

    fn client() -> InMemoryClient {
        InMemoryClient::from_json(
            r#"{
                "pages": [
                    {"id": "1", "url": "/en/about", "body": "<h1>About</h1>"},
                    {"id": "2", "url": "/fr/a-propos", "body": "<h1>À propos</h1>"},
                    {"id": "3", "url": "/de/versand", "body": "<h1>Versand</h1>"},
                    {"id": "4", "name": "Draft, no URL yet"}
                ]
            }"#,
        )
        .unwrap()
    }

    fn locales() -> Vec<String> {
        vec!["en".to_string(), "fr".to_string()]
    }

    #[tokio::test]
    async fn test_no_locales_keeps_urls_verbatim() {
        let paths = enumerate_paths(&client(), None).await.unwrap();
        assert_eq!(
            paths.paths,
            vec!["/en/about", "/fr/a-propos", "/de/versand"]
        );
    }

    #[tokio::test]
    async fn test_locales_keep_only_matching_prefixes() {
        let paths = enumerate_paths(&client(), Some(&locales())).await.unwrap();
        assert_eq!(paths.paths, vec!["/en/about", "/fr/a-propos"]);
    }

    #[tokio::test]
    async fn test_url_without_locale_prefix_is_excluded() {
        // "/about" starts with "about", which is not a supported locale, so
        // the page is logged as invalid and never enumerated.
        let client =
            InMemoryClient::from_json(r#"{"pages": [{"id": "1", "url": "/about"}]}"#).unwrap();

        let paths = enumerate_paths(&client, Some(&locales())).await.unwrap();
        assert!(paths.paths.is_empty());
    }

    #[tokio::test]
    async fn test_empty_url_is_treated_like_a_missing_one() {
        let client = InMemoryClient::from_json(
            r#"{"pages": [{"id": "1", "url": ""}, {"id": "2", "url": "/en/about"}]}"#,
        )
        .unwrap();

        // Skipped outright, with or without locales: it never reaches the
        // locale branch, so it is not reported as a missing-locale URL either.
        let no_locales = enumerate_paths(&client, None).await.unwrap();
        assert_eq!(no_locales.paths, vec!["/en/about"]);

        let with_locales = enumerate_paths(&client, Some(&locales())).await.unwrap();
        assert_eq!(with_locales.paths, vec!["/en/about"]);
    }

    #[tokio::test]
    async fn test_pages_without_url_are_skipped() {
        let paths = enumerate_paths(&client(), None).await.unwrap();
        assert_eq!(paths.paths.len(), 3);
    }

    #[tokio::test]
    async fn test_fallback_is_disabled() {
        let paths = enumerate_paths(&client(), Some(&locales())).await.unwrap();
        assert!(!paths.fallback);

        let paths = enumerate_paths(&client(), None).await.unwrap();
        assert!(!paths.fallback);
    }
}
