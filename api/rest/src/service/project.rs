use actix_web::{http::StatusCode, web, HttpResponse};
use pf_content::filter::facets;
use pf_error::Error;

use crate::{
    context::ApiRestCtx,
    model::{
        project::{FindManyProjectReqQuery, FindOneProjectReqPath, ProjectResJson},
        PaginationRes, Response,
    },
};

pub fn project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/projects", web::get().to(find_many))
        .route("/projects/facets", web::get().to(find_facets))
        .route("/project/{slug}", web::get().to(find_one));
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyProjectReqQuery>,
) -> HttpResponse {
    let projects = ctx.catalog().projects();
    let filtered = query.to_filter().apply(projects);

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&filtered.len(), &projects.len())),
        &filtered
            .iter()
            .map(|project| ProjectResJson::new(project))
            .collect::<Vec<_>>(),
    )
}

async fn find_facets(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    Response::data(&StatusCode::OK, &None, &facets(ctx.catalog().projects()))
}

async fn find_one(ctx: web::Data<ApiRestCtx>, path: web::Path<FindOneProjectReqPath>) -> HttpResponse {
    match ctx.catalog().project(path.slug()) {
        Some(project) => Response::data(&StatusCode::OK, &None, &ProjectResJson::new(project)),
        None => Response::error(&Error::not_found("Project", path.slug())),
    }
}
