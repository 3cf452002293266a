use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::{
    context::ApiRestCtx,
    model::project::FindManyProjectReqQuery,
    page::{
        self,
        blog::{blog_index, blog_post},
        component::project_grid,
        home::home,
        not_found::not_found,
        project::project_page,
        theme::Theme,
    },
};

pub fn page_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home_page))
        .route("/fragments/projects", web::get().to(project_fragment))
        .route("/blog", web::get().to(blog_index_page))
        .route("/blog/{slug}", web::get().to(blog_post_page))
        .route("/projects/{slug}", web::get().to(project_detail_page));
}

#[derive(Deserialize)]
pub struct SlugReqPath {
    slug: String,
}

impl SlugReqPath {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

async fn home_page(
    ctx: web::Data<ApiRestCtx>,
    req: HttpRequest,
    query: web::Query<FindManyProjectReqQuery>,
) -> HttpResponse {
    page::html(
        &StatusCode::OK,
        home(&ctx, &Theme::from_request(&req), &query.to_filter()),
    )
}

/// Grid markup only, swapped in by the debounced search script.
async fn project_fragment(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyProjectReqQuery>,
) -> HttpResponse {
    let projects = query.to_filter().apply(ctx.catalog().projects());
    page::html(&StatusCode::OK, project_grid(&projects))
}

async fn blog_index_page(ctx: web::Data<ApiRestCtx>, req: HttpRequest) -> HttpResponse {
    page::html(
        &StatusCode::OK,
        blog_index(
            ctx.site(),
            &Theme::from_request(&req),
            &ctx.catalog().blog_posts_newest_first(),
        ),
    )
}

async fn blog_post_page(
    ctx: web::Data<ApiRestCtx>,
    req: HttpRequest,
    path: web::Path<SlugReqPath>,
) -> HttpResponse {
    match ctx.catalog().blog_post(path.slug()) {
        Some(post) => page::html(
            &StatusCode::OK,
            blog_post(ctx.site(), &Theme::from_request(&req), post),
        ),
        None => not_found_page(ctx, req).await,
    }
}

async fn project_detail_page(
    ctx: web::Data<ApiRestCtx>,
    req: HttpRequest,
    path: web::Path<SlugReqPath>,
) -> HttpResponse {
    match ctx.catalog().project(path.slug()) {
        Some(project) => page::html(
            &StatusCode::OK,
            project_page(ctx.site(), &Theme::from_request(&req), project),
        ),
        None => not_found_page(ctx, req).await,
    }
}

pub async fn not_found_page(ctx: web::Data<ApiRestCtx>, req: HttpRequest) -> HttpResponse {
    pf_log::debug(None, format!("[ApiRestServer] No page at {}", req.path()));

    page::html(
        &StatusCode::NOT_FOUND,
        not_found(ctx.site(), &Theme::from_request(&req), req.path()),
    )
}
