use actix_web::{http::header::ContentType, web, HttpResponse};
use pf_content::sitemap;

use crate::context::ApiRestCtx;

pub fn sitemap_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/sitemap.xml", web::get().to(sitemap_xml))
        .route("/robots.txt", web::get().to(robots_txt));
}

async fn sitemap_xml(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    let entries = sitemap::entries(ctx.site().base_url(), ctx.catalog());

    HttpResponse::Ok()
        .content_type(ContentType::xml())
        .body(sitemap::render(&entries))
}

async fn robots_txt(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
            ctx.site().base_url()
        ))
}
