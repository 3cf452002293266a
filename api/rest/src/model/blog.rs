use pf_content::model::blog::BlogPost;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct FindOneBlogPostReqPath {
    slug: String,
}

impl FindOneBlogPostReqPath {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Serialize)]
pub struct BlogPostSummaryResJson {
    slug: &'static str,
    url: String,
    title: &'static str,
    excerpt: &'static str,
    published: &'static str,
    reading_minutes: u16,
    tags: &'static [&'static str],
}

impl BlogPostSummaryResJson {
    pub fn new(post: &BlogPost) -> Self {
        Self {
            slug: post.slug(),
            url: format!("/blog/{}", post.slug()),
            title: post.title(),
            excerpt: post.excerpt(),
            published: post.published(),
            reading_minutes: *post.reading_minutes(),
            tags: post.tags(),
        }
    }
}

#[derive(Serialize)]
pub struct BlogPostResJson {
    #[serde(flatten)]
    summary: BlogPostSummaryResJson,
    body: &'static [&'static str],
}

impl BlogPostResJson {
    pub fn new(post: &BlogPost) -> Self {
        Self {
            summary: BlogPostSummaryResJson::new(post),
            body: post.body(),
        }
    }
}
