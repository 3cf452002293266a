use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub(crate) slug: &'static str,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) image: &'static str,
    pub(crate) category: &'static str,
    pub(crate) tags: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) links: Option<ProjectLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) case_study: Option<CaseStudy>,
}

impl Project {
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn image(&self) -> &'static str {
        self.image
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    pub fn links(&self) -> &Option<ProjectLinks> {
        &self.links
    }

    pub fn case_study(&self) -> &Option<CaseStudy> {
        &self.case_study
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) live: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) source: Option<&'static str>,
}

impl ProjectLinks {
    pub fn live(&self) -> &Option<&'static str> {
        &self.live
    }

    pub fn source(&self) -> &Option<&'static str> {
        &self.source
    }
}

/// Long-form write-up shown on the project page.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub(crate) role: &'static str,
    pub(crate) duration: &'static str,
    pub(crate) challenge: &'static str,
    pub(crate) solution: &'static str,
    pub(crate) outcome: &'static str,
    pub(crate) stack: &'static [&'static str],
}

impl CaseStudy {
    pub fn role(&self) -> &'static str {
        self.role
    }

    pub fn duration(&self) -> &'static str {
        self.duration
    }

    pub fn challenge(&self) -> &'static str {
        self.challenge
    }

    pub fn solution(&self) -> &'static str {
        self.solution
    }

    pub fn outcome(&self) -> &'static str {
        self.outcome
    }

    pub fn stack(&self) -> &'static [&'static str] {
        self.stack
    }
}
