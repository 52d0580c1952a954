//! Error types for Vitrine.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust uses the Debug trait to show errors when they're returned from main,
                    // but thiserror uses the Display trait. This redirects Debug to Display, essentially.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Failures surfaced by the commerce backend. Propagated unchanged: no
/// retries, no fallback content.
#[derive(Error)]
pub enum CommerceError {
    #[error("commerce backend request failed: {reason}")]
    Transport { reason: String },
    #[error("commerce backend returned malformed data: {reason}")]
    Data { reason: String },
}

/// Failures while resolving a single enumerated path to its page record.
///
/// Every variant is fatal for the route being built: the enumerator was
/// supposed to have pre-validated each candidate path, so a miss here means
/// the build must stop rather than ship a dead link.
#[derive(Error)]
pub enum ResolveError {
    #[error("the content pages route received no path segments")]
    MissingSegments,
    #[error("Page with slug '{slug}' not found")]
    PageNotFound { slug: String },
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(CommerceError, ResolveError);
