use std::path::Path;

use actix_files::Files;
use actix_web::web;

use crate::service::{
    analytics::analytics_api,
    blog::blog_api,
    page::{not_found_page, page_api},
    profile::profile_api,
    project::project_api,
    root::root_api,
    sitemap::sitemap_api,
    theme::theme_api,
};

pub fn configure(cfg: &mut web::ServiceConfig, images_dir: &Path) {
    cfg.configure(page_api)
        .configure(theme_api)
        .configure(sitemap_api)
        .service(
            web::scope("/api/rest")
                .configure(root_api)
                .configure(project_api)
                .configure(blog_api)
                .configure(profile_api)
                .configure(analytics_api),
        )
        .service(Files::new("/images", images_dir))
        .default_service(web::to(not_found_page));
}
