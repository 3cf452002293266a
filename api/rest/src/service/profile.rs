use actix_web::{http::StatusCode, web, HttpResponse};

use crate::{context::ApiRestCtx, model::Response};

pub fn profile_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/skills", web::get().to(skills))
        .route("/testimonials", web::get().to(testimonials))
        .route("/contacts", web::get().to(contacts));
}

async fn skills(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    Response::data(&StatusCode::OK, &None, ctx.catalog().skills())
}

async fn testimonials(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    Response::data(&StatusCode::OK, &None, ctx.catalog().testimonials())
}

async fn contacts(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    Response::data(&StatusCode::OK, &None, ctx.catalog().contacts())
}
