pub mod analytics;
pub mod blog;
pub mod page;
pub mod profile;
pub mod project;
pub mod root;
pub mod sitemap;
pub mod theme;
