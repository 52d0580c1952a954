//! Build-time resolution of one content page's props.
use std::time::Instant;

use log::info;

use crate::commerce::{CommerceClient, SiteInfo};
use crate::errors::ResolveError;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};
use crate::route::{PageProps, PageRequest};
use crate::slug::page_slug;

/// How often the hosting layer may regenerate a page in the background.
pub const REVALIDATE_SECS: u64 = 60 * 60; // Every hour

/// Resolves one enumerated path to the props needed for rendering.
///
/// Refetches the page list and site info, derives the comparison slug from
/// the request's segments, matches it against each page's derived slug, and
/// fetches the full record for the match. Any miss is fatal: every candidate
/// path was supposed to have been pre-validated by the enumerator, so a miss
/// here must stop the build instead of shipping a dead link.
pub async fn resolve_page<C: CommerceClient>(
    client: &C,
    request: &PageRequest,
) -> Result<PageProps, ResolveError> {
    let segments = match request.segments.as_deref() {
        Some(segments) if !segments.is_empty() => segments,
        _ => return Err(ResolveError::MissingSegments),
    };

    let start = Instant::now();
    let ctx = request.fetch_context();

    let pages = client.all_pages(&ctx).await?;
    let SiteInfo { categories } = client.site_info(&ctx).await?;

    let path = segments.join("/");
    // The active locale is prefixed onto the joined segments, even when the
    // path already carries one. The enumerator, on the other hand, compares
    // the URL's existing first segment without adding a prefix; the two
    // derivations are asymmetric and must stay that way.
    let slug = match &request.locale {
        Some(locale) => format!("{locale}/{path}"),
        None => path,
    };

    let summary = pages.iter().find(|page| {
        page.url
            .as_deref()
            .is_some_and(|url| page_slug(url) == slug)
    });

    let page = match summary {
        Some(summary) => client.page(&summary.id, &ctx).await?,
        None => None,
    };

    let Some(page) = page else {
        return Err(ResolveError::PageNotFound { slug });
    };

    info!(
        target: "props",
        "resolved '{}' in {}",
        slug,
        format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
    );

    Ok(PageProps {
        pages,
        page,
        categories,
        revalidate: REVALIDATE_SECS,
    })
}
