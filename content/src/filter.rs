use serde::Serialize;

use crate::model::project::Project;

/// Sentinel accepted for category and tag that disables the check.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// A missing or blank value selects everything, the same as `"all"`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL) => Self::All,
            Some(value) => Self::Only(value.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Category, tag and free-text criteria combined with logical AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    category: Selection,
    tag: Selection,
    text: String,
    needle: String,
}

impl ProjectFilter {
    pub fn new(category: Option<&str>, tag: Option<&str>, text: Option<&str>) -> Self {
        let text = text.map(str::trim).unwrap_or_default().to_owned();
        let needle = text.to_lowercase();
        Self {
            category: Selection::parse(category),
            tag: Selection::parse(tag),
            text,
            needle,
        }
    }

    pub fn category(&self) -> &Selection {
        &self.category
    }

    pub fn tag(&self) -> &Selection {
        &self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        !self.category.is_all() || !self.tag.is_all() || !self.needle.is_empty()
    }

    pub fn matches(&self, project: &Project) -> bool {
        let category_ok = match &self.category {
            Selection::All => true,
            Selection::Only(category) => project.category() == category.as_str(),
        };
        let tag_ok = match &self.tag {
            Selection::All => true,
            Selection::Only(tag) => project.has_tag(tag),
        };

        category_ok && tag_ok && self.matches_text(project)
    }

    /// Keeps input order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_text(&self, project: &Project) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let contains = |haystack: &str| haystack.to_lowercase().contains(&self.needle);

        contains(project.title())
            || contains(project.description())
            || project.tags().iter().any(|tag| contains(tag))
    }
}

/// Distinct filter options, in the order they first appear.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Facets {
    categories: Vec<&'static str>,
    tags: Vec<&'static str>,
}

impl Facets {
    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }
}

pub fn facets(projects: &[Project]) -> Facets {
    let mut categories = Vec::new();
    let mut tags = Vec::new();

    for project in projects {
        if !categories.contains(&project.category()) {
            categories.push(project.category());
        }
        for tag in project.tags() {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
    }

    Facets { categories, tags }
}
