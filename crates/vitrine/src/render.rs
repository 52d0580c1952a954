//! Rendering of a resolved content page.
use maud::{Markup, PreEscaped, html};

use crate::GENERATOR;
use crate::commerce::Page;

/// Renders a page's HTML body inside a constrained-width centered container.
///
/// An absent or empty body renders the empty container. There is no error
/// path here: the build-time failure in [`resolve_page`](crate::resolve_page)
/// already guards against a wholly missing page.
///
/// The body is backend-authored HTML and is emitted as-is, not escaped.
pub fn page_body(page: Option<&Page>) -> Markup {
    let body = page
        .and_then(|page| page.body.as_deref())
        .filter(|body| !body.is_empty());

    html! {
        div class="max-w-2xl mx-8 sm:mx-auto py-20" {
            @if let Some(body) = body {
                (PreEscaped(body))
            }
        }
    }
}

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}
