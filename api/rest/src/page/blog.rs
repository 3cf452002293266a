use maud::{html, Markup};
use pf_content::model::blog::BlogPost;

use super::{
    component::{blog_card, published_label, tag_list},
    layout::{layout, PageMeta},
    theme::Theme,
};
use crate::context::ApiRestSiteCtx;

pub fn blog_index(site: &ApiRestSiteCtx, theme: &Theme, posts: &[&BlogPost]) -> Markup {
    layout(
        site,
        theme,
        &PageMeta::new(Some("Blog"), "Notes on building for the web.", "/blog"),
        html! {
            section.blog {
                h1 { "Blog" }
                @if posts.is_empty() {
                    p.muted { "Nothing published yet." }
                } @else {
                    div.grid {
                        @for post in posts {
                            (blog_card(post))
                        }
                    }
                }
            }
        },
    )
}

pub fn blog_post(site: &ApiRestSiteCtx, theme: &Theme, post: &BlogPost) -> Markup {
    let path = format!("/blog/{}", post.slug());

    layout(
        site,
        theme,
        &PageMeta::new(Some(post.title()), post.excerpt(), &path),
        html! {
            article.post {
                p { a href="/blog" { "← All posts" } }
                h1 { (post.title()) }
                p.muted {
                    time datetime=(post.published()) { (published_label(post)) }
                    " · " (post.reading_minutes().to_string()) " min read"
                }
                (tag_list(post.tags()))
                @for paragraph in post.body() {
                    p { (paragraph) }
                }
            }
        },
    )
}
