use actix_web::{http::StatusCode, web, HttpResponse};
use pf_error::Error;

use crate::{
    context::ApiRestCtx,
    model::{
        blog::{BlogPostResJson, BlogPostSummaryResJson, FindOneBlogPostReqPath},
        PaginationRes, Response,
    },
};

pub fn blog_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/blog/posts", web::get().to(find_many))
        .route("/blog/post/{slug}", web::get().to(find_one));
}

async fn find_many(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    let posts = ctx.catalog().blog_posts_newest_first();

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&posts.len(), &posts.len())),
        &posts
            .iter()
            .map(|post| BlogPostSummaryResJson::new(post))
            .collect::<Vec<_>>(),
    )
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindOneBlogPostReqPath>,
) -> HttpResponse {
    match ctx.catalog().blog_post(path.slug()) {
        Some(post) => Response::data(&StatusCode::OK, &None, &BlogPostResJson::new(post)),
        None => Response::error(&Error::not_found("Blog post", path.slug())),
    }
}
