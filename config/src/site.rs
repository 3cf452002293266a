use serde::Deserialize;

/// Values rendered into every page and into the sitemap.
#[derive(Deserialize)]
pub struct SiteConfig {
    base_url: String,
    title: String,
    author: String,
    public_path: String,
}

impl SiteConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }
}
