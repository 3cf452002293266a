use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub(crate) slug: &'static str,
    pub(crate) title: &'static str,
    pub(crate) excerpt: &'static str,
    pub(crate) published: &'static str,
    pub(crate) reading_minutes: u16,
    pub(crate) tags: &'static [&'static str],
    pub(crate) body: &'static [&'static str],
}

impl BlogPost {
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn excerpt(&self) -> &'static str {
        self.excerpt
    }

    pub fn published(&self) -> &'static str {
        self.published
    }

    /// `None` when the compiled-in date is not `YYYY-MM-DD`.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    pub fn reading_minutes(&self) -> &u16 {
        &self.reading_minutes
    }

    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    pub fn body(&self) -> &'static [&'static str] {
        self.body
    }
}
