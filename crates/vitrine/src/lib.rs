#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod commerce;
pub mod errors;
pub mod render;
pub mod route;
pub mod slug;

mod content_pages;
mod locale;
mod paths;
mod props;
mod routing;

// Internal modules
mod logging;

// Exports for end-users
pub use content_pages::ContentPages;
pub use locale::MissingLocaleLog;
pub use logging::{init_logging, print_title};
pub use paths::enumerate_paths;
pub use props::{REVALIDATE_SECS, resolve_page};

/// The version of Vitrine being used.
///
/// Can be used to create a generator tag in the output HTML.
///
/// ## Example
/// ```rust
/// use vitrine::GENERATOR;
///
/// format!("<meta name=\"generator\" content=\"{}\">", GENERATOR);
/// ```
pub const GENERATOR: &str = concat!("Vitrine v", env!("CARGO_PKG_VERSION"));
