use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse,
};
use pf_error::Error;
use serde::Deserialize;

use crate::{
    model::Response,
    page::theme::{Theme, THEME_COOKIE},
};

pub fn theme_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/theme/{theme}", web::get().to(set_theme));
}

#[derive(Deserialize)]
pub struct SetThemeReqPath {
    theme: String,
}

impl SetThemeReqPath {
    pub fn theme(&self) -> &str {
        &self.theme
    }
}

async fn set_theme(req: HttpRequest, path: web::Path<SetThemeReqPath>) -> HttpResponse {
    let theme = match path.theme().parse::<Theme>() {
        Ok(theme) => theme,
        Err(_) => {
            return Response::error(&Error::BadRequest(format!(
                "Unknown theme '{}'",
                path.theme()
            )))
        }
    };

    let cookie = Cookie::build(THEME_COOKIE, theme.as_ref().to_owned())
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .finish();

    HttpResponse::build(StatusCode::SEE_OTHER)
        .cookie(cookie)
        .insert_header((header::LOCATION, back_location(&req)))
        .finish()
}

/// Only same-site paths are followed back; anything else lands on `/`.
fn back_location(req: &HttpRequest) -> String {
    let referer = match req
        .headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
    {
        Some(referer) => referer,
        None => return "/".to_owned(),
    };

    if referer.starts_with('/') && !referer.starts_with("//") {
        return referer.to_owned();
    }

    let host = req.connection_info().host().to_owned();
    for scheme in ["http://", "https://"] {
        if let Some(rest) = referer.strip_prefix(scheme) {
            if let Some(path) = rest.strip_prefix(host.as_str()) {
                if path.starts_with('/') {
                    return path.to_owned();
                }
                if path.is_empty() {
                    return "/".to_owned();
                }
            }
        }
    }

    "/".to_owned()
}
