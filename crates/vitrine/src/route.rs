//! Framework-facing contract types for statically generated routes.
//!
//! The hosting layer drives the three phases of a route's life: enumeration
//! ([`StaticRoute::static_paths`]) once per build, resolution
//! ([`StaticRoute::static_props`]) once per enumerated path, and rendering
//! ([`StaticRoute::render`]) from the resolved props. Each invocation starts
//! from a fresh fetch; no state is carried between them.
use maud::Markup;
use serde::Serialize;

use crate::commerce::{Category, CommerceClient, FetchContext, LocaleConfig, Page};
use crate::errors::{CommerceError, ResolveError};
use crate::routing::extract_params_from_raw_route;

#[derive(PartialEq, Eq, Debug)]
pub enum RouteType {
    Static,
    Dynamic,
}

/// The enumerator's output: every path to pre-render, plus the fallback
/// policy for paths outside that set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticPaths {
    pub paths: Vec<String>,
    /// Always `false`. A catch-all route with fallback enabled would trap
    /// every unmatched request, including 404s; unmatched paths must return
    /// not-found instead of being generated on demand.
    pub fallback: bool,
}

impl StaticPaths {
    pub fn new(paths: Vec<String>) -> Self {
        Self {
            paths,
            fallback: false,
        }
    }
}

/// The resolver's output: everything the renderer and the hosting layer need
/// for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageProps {
    /// Page summaries, as returned by the list endpoint.
    pub pages: Vec<Page>,
    /// The fully resolved page, body included.
    pub page: Page,
    pub categories: Vec<Category>,
    /// Seconds the hosting layer should wait between background
    /// regenerations of the static output.
    pub revalidate: u64,
}

/// Per-path request the hosting layer passes to [`StaticRoute::static_props`].
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// The catch-all path segments, locale prefix already stripped.
    pub segments: Option<Vec<String>>,
    pub locale: Option<String>,
    pub locales: Option<Vec<String>>,
    pub preview: bool,
}

impl PageRequest {
    pub fn fetch_context(&self) -> FetchContext {
        FetchContext {
            config: LocaleConfig {
                locale: self.locale.clone(),
                locales: self.locales.clone(),
            },
            preview: self.preview,
        }
    }
}

/// Must be implemented by every statically generated route.
#[allow(async_fn_in_trait)]
pub trait StaticRoute {
    /// The raw route template, e.g. `/[...pages]`.
    fn route_raw(&self) -> &'static str;

    fn route_type(&self) -> RouteType {
        if extract_params_from_raw_route(self.route_raw()).is_empty() {
            RouteType::Static
        } else {
            RouteType::Dynamic
        }
    }

    /// Enumerates every path this route should pre-render.
    async fn static_paths<C: CommerceClient>(
        &self,
        client: &C,
        locales: Option<&[String]>,
    ) -> Result<StaticPaths, CommerceError>;

    /// Resolves one enumerated path to its props, or fails the build.
    async fn static_props<C: CommerceClient>(
        &self,
        client: &C,
        request: &PageRequest,
    ) -> Result<PageProps, ResolveError>;

    /// Pure render of the resolved props. The hosting layer wraps the output
    /// in the route's declared [`Chrome`].
    fn render(&self, props: &PageProps) -> Markup;

    /// The chrome the hosting layer wraps this route's rendered output in.
    /// Routes without site-wide framing keep the pass-through default.
    fn chrome(&self) -> &dyn Chrome {
        &PlainChrome
    }
}

/// Site-wide page chrome (navigation, footer). Declared by the route,
/// applied by the hosting layer around the rendered output — never by the
/// route's own render function.
pub trait Chrome {
    fn wrap(&self, main: Markup) -> Markup;
}

/// Pass-through chrome for routes rendered without site-wide framing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainChrome;

impl Chrome for PlainChrome {
    fn wrap(&self, main: Markup) -> Markup {
        main
    }
}

pub mod prelude {
    //! Re-exports of the most commonly used types and traits for consuming
    //! statically generated routes.
    //!
    //! This module is meant to be glob imported:
    //! ```rust
    //! use vitrine::route::prelude::*;
    //! ```
    pub use super::{
        Chrome, PageProps, PageRequest, PlainChrome, RouteType, StaticPaths, StaticRoute,
    };
    pub use crate::ContentPages;
    pub use crate::commerce::{
        Category, CommerceClient, FetchContext, InMemoryClient, LocaleConfig, Page, SiteInfo,
        Snapshot,
    };
}
