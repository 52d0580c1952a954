use maud::{DOCTYPE, Markup, html};
use vitrine::render::generator;
use vitrine::route::Chrome;

/// Site-wide chrome shared by every page: navigation and footer.
pub struct SiteChrome;

impl Chrome for SiteChrome {
    fn wrap(&self, main: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { "Acme Storefront" }
                    (generator())
                }
                body {
                    header {
                        nav {
                            a href="/" { "Acme Storefront" }
                        }
                    }
                    main { (main) }
                    footer {
                        p { "Acme Storefront" }
                    }
                }
            }
        }
    }
}
