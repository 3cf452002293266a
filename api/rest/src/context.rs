use std::time::Duration;

use pf_content::catalog::Catalog;

pub struct ApiRestCtx {
    catalog: Catalog,
    site: ApiRestSiteCtx,
    search_debounce: Duration,
}

impl ApiRestCtx {
    pub fn new(catalog: Catalog, site: ApiRestSiteCtx, search_debounce: &Duration) -> Self {
        Self {
            catalog,
            site,
            search_debounce: *search_debounce,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn site(&self) -> &ApiRestSiteCtx {
        &self.site
    }

    pub fn search_debounce(&self) -> &Duration {
        &self.search_debounce
    }
}

pub struct ApiRestSiteCtx {
    base_url: String,
    title: String,
    author: String,
}

impl ApiRestSiteCtx {
    pub fn new(base_url: &str, title: &str, author: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            title: title.to_owned(),
            author: author.to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}
