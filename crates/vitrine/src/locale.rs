//! Locale diagnostics for build-time path enumeration.
use log::warn;

/// Collects page URLs whose first path segment matches no supported locale.
///
/// Constructed fresh for each enumeration pass and flushed once at the end.
/// Informational only: skipped URLs are reported, never raised as errors.
#[derive(Debug, Default)]
pub struct MissingLocaleLog {
    urls: Vec<String>,
}

impl MissingLocaleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Emits one warning block listing the skipped URLs, or nothing at all
    /// when every page matched a supported locale.
    pub fn flush(self) {
        if self.urls.is_empty() {
            return;
        }

        warn!(
            target: "paths",
            "{} page(s) have a URL with no supported locale prefix and were excluded from the generated paths",
            self.urls.len()
        );
        for url in &self.urls {
            warn!(target: "paths", "├─ {}", url);
        }
    }
}
