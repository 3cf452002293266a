use maud::{html, Markup};
use pf_content::model::project::Project;

use super::{
    component::tag_list,
    layout::{layout, PageMeta},
    theme::Theme,
};
use crate::context::ApiRestSiteCtx;

pub fn project_page(site: &ApiRestSiteCtx, theme: &Theme, project: &Project) -> Markup {
    let path = format!("/projects/{}", project.slug());

    layout(
        site,
        theme,
        &PageMeta::new(Some(project.title()), project.description(), &path),
        html! {
            article.project {
                p { a href="/#projects" { "← All projects" } }
                h1 { (project.title()) }
                p.muted { (project.category()) }
                img src=(project.image()) alt=(project.title());
                p { (project.description()) }
                (tag_list(project.tags()))
                @if let Some(links) = project.links() {
                    p.links {
                        @if let Some(live) = links.live() {
                            a href=(live) target="_blank" rel="noopener noreferrer" { "Live site" }
                            " "
                        }
                        @if let Some(source) = links.source() {
                            a href=(source) target="_blank" rel="noopener noreferrer" { "Source" }
                        }
                    }
                }
                @if let Some(case_study) = project.case_study() {
                    section.case-study {
                        h2 { "Case study" }
                        dl {
                            dt { "Role" } dd { (case_study.role()) }
                            dt { "Duration" } dd { (case_study.duration()) }
                        }
                        h3 { "Challenge" }
                        p { (case_study.challenge()) }
                        h3 { "Solution" }
                        p { (case_study.solution()) }
                        h3 { "Outcome" }
                        p { (case_study.outcome()) }
                        h3 { "Stack" }
                        (tag_list(case_study.stack()))
                    }
                }
            }
        },
    )
}
