use pf_content::{
    filter::ProjectFilter,
    model::project::{CaseStudy, Project, ProjectLinks},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Default)]
pub struct FindManyProjectReqQuery {
    category: Option<String>,
    tag: Option<String>,
    q: Option<String>,
}

impl FindManyProjectReqQuery {
    pub fn to_filter(&self) -> ProjectFilter {
        ProjectFilter::new(
            self.category.as_deref(),
            self.tag.as_deref(),
            self.q.as_deref(),
        )
    }
}

#[derive(Deserialize)]
pub struct FindOneProjectReqPath {
    slug: String,
}

impl FindOneProjectReqPath {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Serialize)]
pub struct ProjectResJson {
    slug: &'static str,
    url: String,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<ProjectLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    case_study: Option<CaseStudy>,
}

impl ProjectResJson {
    pub fn new(project: &Project) -> Self {
        Self {
            slug: project.slug(),
            url: format!("/projects/{}", project.slug()),
            title: project.title(),
            description: project.description(),
            image: project.image(),
            category: project.category(),
            tags: project.tags(),
            links: *project.links(),
            case_study: *project.case_study(),
        }
    }
}
