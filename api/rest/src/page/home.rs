use maud::{html, Markup};
use pf_content::filter::{facets, ProjectFilter};

use super::{
    component::{
        blog_card, contact_links, project_filter_form, project_grid, skill_group,
        testimonial_card,
    },
    layout::{layout, PageMeta},
    script,
    theme::Theme,
};
use crate::context::ApiRestCtx;

const LATEST_POSTS: usize = 3;

pub fn home(ctx: &ApiRestCtx, theme: &Theme, filter: &ProjectFilter) -> Markup {
    let catalog = ctx.catalog();
    let projects = filter.apply(catalog.projects());
    let facets = facets(catalog.projects());
    let posts = catalog.blog_posts_newest_first();

    layout(
        ctx.site(),
        theme,
        &PageMeta::new(
            None,
            "Projects, writing and contact details.",
            "/",
        ),
        html! {
            section.hero {
                h1 { "Hi, I'm " (ctx.site().author()) "." }
                p.muted {
                    "I design and build fast, accessible web applications. "
                    "Here are a few things I have shipped."
                }
            }
            section id="projects" {
                h2 { "Projects" }
                (project_filter_form(filter, &facets, ctx.search_debounce()))
                div id="project-results" aria-live="polite" {
                    (project_grid(&projects))
                }
            }
            section id="skills" {
                h2 { "Skills" }
                div.grid {
                    @for (group, skills) in catalog.skill_groups() {
                        (skill_group(group, &skills))
                    }
                }
            }
            @if !catalog.testimonials().is_empty() {
                section id="testimonials" {
                    h2 { "Kind words" }
                    div.grid {
                        @for testimonial in catalog.testimonials() {
                            (testimonial_card(testimonial))
                        }
                    }
                }
            }
            section id="writing" {
                h2 { "Latest writing" }
                div.grid {
                    @for post in posts.iter().take(LATEST_POSTS) {
                        (blog_card(post))
                    }
                }
                p { a href="/blog" { "All posts →" } }
            }
            section id="contact" {
                h2 { "Get in touch" }
                (contact_links(catalog.contacts()))
            }
            (script::project_search())
        },
    )
}
