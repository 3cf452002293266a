use std::time::Duration;

use maud::{html, Markup};
use pf_content::{
    filter::{Facets, ProjectFilter},
    model::{
        blog::BlogPost, contact::Contact, project::Project, skill::Skill,
        testimonial::Testimonial,
    },
};

pub fn tag_list(tags: &[&str]) -> Markup {
    html! {
        ul.tags {
            @for tag in tags {
                li { (tag) }
            }
        }
    }
}

pub fn project_card(project: &Project) -> Markup {
    html! {
        article.card {
            img src=(project.image()) alt=(project.title()) loading="lazy";
            h3 {
                a href={ "/projects/" (project.slug()) } { (project.title()) }
            }
            p { (project.description()) }
            (tag_list(project.tags()))
        }
    }
}

/// Empty results are shown as a message, never an error.
pub fn project_grid(projects: &[&Project]) -> Markup {
    html! {
        @if projects.is_empty() {
            p.muted.empty { "No projects match these filters." }
        } @else {
            div.grid {
                @for project in projects {
                    (project_card(project))
                }
            }
        }
    }
}

pub fn project_filter_form(filter: &ProjectFilter, facets: &Facets, debounce: &Duration) -> Markup {
    let category = filter.category().as_str();
    let tag = filter.tag().as_str();

    html! {
        form.filter id="project-filter" method="get" action="/"
            data-debounce-ms=(debounce.as_millis().to_string()) {
            select name="category" aria-label="Category" {
                option value="all" selected[filter.category().is_all()] { "All categories" }
                @for choice in facets.categories() {
                    option value=(choice) selected[*choice == category] { (choice) }
                }
            }
            select name="tag" aria-label="Tag" {
                option value="all" selected[filter.tag().is_all()] { "All tags" }
                @for choice in facets.tags() {
                    option value=(choice) selected[*choice == tag] { (choice) }
                }
            }
            input type="search" name="q" placeholder="Search projects" value=(filter.text());
            noscript { button type="submit" { "Filter" } }
        }
    }
}

pub fn blog_card(post: &BlogPost) -> Markup {
    html! {
        article.card {
            h3 {
                a href={ "/blog/" (post.slug()) } { (post.title()) }
            }
            p.muted { (published_label(post)) " · " (post.reading_minutes().to_string()) " min read" }
            p { (post.excerpt()) }
        }
    }
}

pub fn published_label(post: &BlogPost) -> String {
    match post.published_on() {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => post.published().to_owned(),
    }
}

pub fn skill_group(group: &str, skills: &[&Skill]) -> Markup {
    html! {
        div.card {
            h3 { (group) }
            @for skill in skills {
                div.skill {
                    span { (skill.name()) }
                    div.bar role="meter" aria-valuemin="0" aria-valuemax="100"
                        aria-valuenow=(skill.proficiency().to_string()) aria-label=(skill.name()) {
                        span style={ "width: " (skill.proficiency().to_string()) "%" } {}
                    }
                }
            }
        }
    }
}

pub fn testimonial_card(testimonial: &Testimonial) -> Markup {
    html! {
        figure.card {
            blockquote { "“" (testimonial.quote()) "”" }
            figcaption.muted {
                (testimonial.author()) ", " (testimonial.role()) " at " (testimonial.company())
            }
        }
    }
}

pub fn contact_links(contacts: &[Contact]) -> Markup {
    html! {
        ul.tags.contacts {
            @for contact in contacts {
                li {
                    @if contact.is_external() {
                        a href=(contact.href()) target="_blank" rel="noopener noreferrer"
                            data-kind=(contact.kind().as_ref()) { (contact.label()) }
                    } @else {
                        a href=(contact.href()) data-kind=(contact.kind().as_ref()) { (contact.label()) }
                    }
                }
            }
        }
    }
}
