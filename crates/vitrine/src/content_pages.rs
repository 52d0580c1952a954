//! The catch-all content pages route.
use maud::Markup;

use crate::commerce::CommerceClient;
use crate::errors::{CommerceError, ResolveError};
use crate::paths::enumerate_paths;
use crate::props::resolve_page;
use crate::render::page_body;
use crate::route::{Chrome, PageProps, PageRequest, PlainChrome, StaticPaths, StaticRoute};
use crate::routing::match_path;

/// The storefront's content pages route (`/[...pages]`), serving records
/// such as About Us or Terms of Service, e.g. under `/en/about`.
///
/// The route declares the site chrome its output is framed with; pass one
/// through [`ContentPages::with_layout`].
pub struct ContentPages<L: Chrome = PlainChrome> {
    layout: L,
}

impl ContentPages {
    pub const ROUTE: &'static str = "/[...pages]";

    pub fn new() -> Self {
        Self {
            layout: PlainChrome,
        }
    }

    /// Framework-side URL matching: splits a concrete path into the
    /// catch-all segments and peels a leading supported-locale segment off
    /// into the request's active locale.
    ///
    /// Returns `None` when the path does not match the route template.
    pub fn request_for(
        path: &str,
        locales: Option<&[String]>,
        preview: bool,
    ) -> Option<PageRequest> {
        let captures = match_path(Self::ROUTE, path)?;
        let mut segments = captures.get("pages")?.clone();

        let mut locale = None;
        if let Some(locales) = locales
            && let Some(first) = segments.first()
            && locales.iter().any(|supported| supported == first)
        {
            locale = Some(segments.remove(0));
        }

        Some(PageRequest {
            segments: Some(segments),
            locale,
            locales: locales.map(|locales| locales.to_vec()),
            preview,
        })
    }
}

impl Default for ContentPages {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Chrome> ContentPages<L> {
    /// Declares the site chrome this route's pages are wrapped in.
    pub fn with_layout(layout: L) -> Self {
        Self { layout }
    }
}

impl<L: Chrome> StaticRoute for ContentPages<L> {
    fn route_raw(&self) -> &'static str {
        ContentPages::ROUTE
    }

    async fn static_paths<C: CommerceClient>(
        &self,
        client: &C,
        locales: Option<&[String]>,
    ) -> Result<StaticPaths, CommerceError> {
        enumerate_paths(client, locales).await
    }

    async fn static_props<C: CommerceClient>(
        &self,
        client: &C,
        request: &PageRequest,
    ) -> Result<PageProps, ResolveError> {
        resolve_page(client, request).await
    }

    fn render(&self, props: &PageProps) -> Markup {
        page_body(Some(&props.page))
    }

    fn chrome(&self) -> &dyn Chrome {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteType;

    fn locales() -> Vec<String> {
        vec!["en".to_string(), "fr".to_string()]
    }

    #[test]
    fn test_route_is_dynamic() {
        assert_eq!(ContentPages::new().route_type(), RouteType::Dynamic);
    }

    struct MarkerChrome;

    impl Chrome for MarkerChrome {
        fn wrap(&self, main: Markup) -> Markup {
            maud::html! {
                div id="site-chrome" { (main) }
            }
        }
    }

    #[test]
    fn test_wrapping_goes_through_the_declared_chrome() {
        let route = ContentPages::with_layout(MarkerChrome);
        let wrapped = route.chrome().wrap(page_body(None)).into_string();

        assert!(wrapped.starts_with("<div id=\"site-chrome\">"));
        assert!(wrapped.contains("max-w-2xl mx-8 sm:mx-auto py-20"));
    }

    #[test]
    fn test_default_chrome_is_pass_through() {
        let route = ContentPages::new();
        let markup = maud::html! { p { "body" } };
        assert_eq!(route.chrome().wrap(markup).into_string(), "<p>body</p>");
    }

    #[test]
    fn test_request_for_peels_the_locale_prefix() {
        let request = ContentPages::request_for("/en/about", Some(&locales()), false).unwrap();
        assert_eq!(request.locale.as_deref(), Some("en"));
        assert_eq!(request.segments.as_deref(), Some(&["about".to_string()][..]));
    }

    #[test]
    fn test_request_for_without_locales_keeps_all_segments() {
        let request = ContentPages::request_for("/en/about", None, false).unwrap();
        assert_eq!(request.locale, None);
        assert_eq!(
            request.segments.as_deref(),
            Some(&["en".to_string(), "about".to_string()][..])
        );
    }

    #[test]
    fn test_request_for_unsupported_prefix_keeps_all_segments() {
        let request = ContentPages::request_for("/de/versand", Some(&locales()), false).unwrap();
        assert_eq!(request.locale, None);
        assert_eq!(
            request.segments.as_deref(),
            Some(&["de".to_string(), "versand".to_string()][..])
        );
    }

    #[test]
    fn test_request_for_rejects_the_root_path() {
        assert!(ContentPages::request_for("/", Some(&locales()), false).is_none());
    }
}
