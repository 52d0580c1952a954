//! Commerce collaborator interface and data model.
//!
//! The commerce backend itself is an external system; this module defines the
//! narrow call surface the content pages route consumes ([`CommerceClient`])
//! and the read-only records it returns. Snapshots are fetched per build and
//! never mutated or persisted by this crate.
use serde::{Deserialize, Serialize};

use crate::errors::CommerceError;

/// A content page record, e.g. About Us or Terms of Service.
///
/// The list endpoint returns summaries with no body; the full record,
/// including the HTML body, comes from a by-id fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Category metadata, forwarded unchanged to the rendered props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Locale filter context, passed through to the backend as-is.
#[derive(Debug, Clone, Default)]
pub struct LocaleConfig {
    /// The locale the current request is scoped to, if any.
    pub locale: Option<String>,
    /// Every locale the site supports, if localization is configured.
    pub locales: Option<Vec<String>>,
}

/// Scope for a single backend fetch: the locale filter plus the preview flag
/// selecting the draft or published content snapshot.
#[derive(Debug, Clone, Default)]
pub struct FetchContext {
    pub config: LocaleConfig,
    pub preview: bool,
}

/// Narrow asynchronous interface to the commerce backend.
///
/// Errors propagate to the caller unchanged: no retries, no fallback content.
/// Timeouts and cancellation are the implementation's concern.
#[allow(async_fn_in_trait)]
pub trait CommerceClient {
    /// Lists every content page as a summary (no body).
    async fn all_pages(&self, ctx: &FetchContext) -> Result<Vec<Page>, CommerceError>;

    /// Site-wide metadata, currently the category listing.
    async fn site_info(&self, ctx: &FetchContext) -> Result<SiteInfo, CommerceError>;

    /// Fetches one full page record by its identifier.
    async fn page(&self, id: &str, ctx: &FetchContext) -> Result<Option<Page>, CommerceError>;
}

/// One content snapshot: the full page records plus site metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    pub pages: Vec<Page>,
    #[serde(default)]
    pub site: SiteInfo,
}

/// Snapshot-backed [`CommerceClient`] used by demo sites and tests.
///
/// Mirrors the backend's two-tier shape: [`CommerceClient::all_pages`] strips
/// bodies down to summaries, [`CommerceClient::page`] returns the full
/// record. The preview flag selects the draft snapshot when one is loaded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClient {
    published: Snapshot,
    draft: Option<Snapshot>,
}

impl InMemoryClient {
    pub fn new(published: Snapshot) -> Self {
        Self {
            published,
            draft: None,
        }
    }

    pub fn with_draft(mut self, draft: Snapshot) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let published = serde_json::from_str(json).map_err(|err| CommerceError::Data {
            reason: err.to_string(),
        })?;

        Ok(Self::new(published))
    }

    fn snapshot(&self, ctx: &FetchContext) -> &Snapshot {
        if ctx.preview {
            self.draft.as_ref().unwrap_or(&self.published)
        } else {
            &self.published
        }
    }
}

impl CommerceClient for InMemoryClient {
    async fn all_pages(&self, ctx: &FetchContext) -> Result<Vec<Page>, CommerceError> {
        Ok(self
            .snapshot(ctx)
            .pages
            .iter()
            .map(|page| Page {
                body: None,
                ..page.clone()
            })
            .collect())
    }

    async fn site_info(&self, ctx: &FetchContext) -> Result<SiteInfo, CommerceError> {
        Ok(self.snapshot(ctx).site.clone())
    }

    async fn page(&self, id: &str, ctx: &FetchContext) -> Result<Option<Page>, CommerceError> {
        Ok(self
            .snapshot(ctx)
            .pages
            .iter()
            .find(|page| page.id == id)
            .cloned())
    }
}
