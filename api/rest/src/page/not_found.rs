use maud::{html, Markup};

use super::{
    layout::{layout, PageMeta},
    theme::Theme,
};
use crate::context::ApiRestSiteCtx;

pub fn not_found(site: &ApiRestSiteCtx, theme: &Theme, path: &str) -> Markup {
    layout(
        site,
        theme,
        &PageMeta::new(Some("Not found"), "This page could not be found.", path),
        html! {
            section.not-found {
                h1 { "404" }
                p { "Nothing lives at " code { (path) } "." }
                p {
                    a href="/" { "Back home" }
                    " or "
                    a href="/blog" { "read the blog" }
                }
            }
        },
    )
}
