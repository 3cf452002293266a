use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, HttpResponseBuilder,
};
use maud::Markup;

pub mod blog;
pub mod component;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod project;
pub mod script;
pub mod theme;

pub fn html(status_code: &StatusCode, markup: Markup) -> HttpResponse {
    HttpResponseBuilder::new(*status_code)
        .content_type(ContentType::html())
        .body(markup.into_string())
}
