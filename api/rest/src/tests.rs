use std::{path::Path, time::Duration};

use actix_web::{
    http::{header, StatusCode},
    middleware::ErrorHandlers,
    test, web, App,
};
use pf_content::catalog::Catalog;
use serde_json::Value;

use crate::{
    configure::configure,
    context::{ApiRestCtx, ApiRestSiteCtx},
    error_handler::default_error_handler,
};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .app_data(web::Data::new(ApiRestCtx::new(
                    Catalog::seeded(),
                    ApiRestSiteCtx::new("https://example.dev/", "Jane Doe", "Jane Doe"),
                    &Duration::from_millis(300),
                )))
                .configure(|cfg| configure(cfg, Path::new("/nonexistent/public/images"))),
        )
        .await
    };
}

async fn get_text(uri: &str) -> (StatusCode, String) {
    let app = app!();
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_text(uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

async fn post_metric(body: &'static str, content_type: &str) -> (StatusCode, Value) {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/rest/analytics/web-vitals")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

fn project_links(html: &str) -> Vec<&'static str> {
    ["green-thumb", "vitaflow", "infinitepages"]
        .into_iter()
        .filter(|slug| html.contains(&format!("href=\"/projects/{slug}\"")))
        .collect()
}

#[actix_web::test]
async fn home_lists_every_section() {
    let (status, html) = get_text("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(project_links(&html), vec!["green-thumb", "vitaflow", "infinitepages"]);
    for section in ["projects", "skills", "testimonials", "writing", "contact"] {
        assert!(html.contains(&format!("id=\"{section}\"")), "missing {section}");
    }
    assert!(html.contains("data-debounce-ms=\"300\""));
    assert!(html.contains("/api/rest/analytics/web-vitals"));
}

#[actix_web::test]
async fn home_applies_category_filter() {
    let (status, html) = get_text("/?category=front-end&tag=all&q=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(project_links(&html), vec!["green-thumb", "vitaflow"]);
}

#[actix_web::test]
async fn fragment_searches_text() {
    let (status, html) = get_text("/fragments/projects?q=book").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("<html"));
    assert_eq!(project_links(&html), vec!["infinitepages"]);
}

#[actix_web::test]
async fn fragment_with_unknown_tag_is_empty_not_an_error() {
    let (status, html) = get_text("/fragments/projects?tag=cobol").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No projects match these filters."));
    assert!(project_links(&html).is_empty());
}

#[actix_web::test]
async fn project_page_renders_case_study() {
    let (status, html) = get_text("/projects/green-thumb").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Green Thumb</h1>"));
    assert!(html.contains("Case study"));
    assert!(html.contains("<title>Green Thumb | Jane Doe</title>"));
}

#[actix_web::test]
async fn project_without_case_study_skips_section() {
    let (status, html) = get_text("/projects/vitaflow").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("Case study"));
}

#[actix_web::test]
async fn unknown_project_renders_not_found() {
    let (status, html) = get_text("/projects/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("<h1>404</h1>"));
    assert!(html.contains("/projects/does-not-exist"));
}

#[actix_web::test]
async fn blog_pages() {
    let (status, html) = get_text("/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("href=\"/blog/designing-offline-first-apps\""));

    let (status, html) = get_text("/blog/full-text-search-in-postgres").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("datetime=\"2023-11-27\""));
    assert!(html.contains("November 27, 2023"));

    let (status, _) = get_text("/blog/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unmatched_path_renders_not_found_page() {
    let (status, html) = get_text("/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Nothing lives at"));
}

#[actix_web::test]
async fn api_root_reports_liveness() {
    let (status, json) = get_json("/api/rest").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], "Folio is running");
}

#[actix_web::test]
async fn api_filters_projects() {
    let (status, json) = get_json("/api/rest/projects?category=front-end").await;

    assert_eq!(status, StatusCode::OK);
    let titles = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Green Thumb", "VitaFlow"]);
    assert_eq!(json["pagination"]["count"], 2);
    assert_eq!(json["pagination"]["total"], 3);
    assert_eq!(json["data"][0]["url"], "/projects/green-thumb");
    assert!(json.get("error").is_none());
}

#[actix_web::test]
async fn api_unknown_tag_returns_empty_list() {
    let (status, json) = get_json("/api/rest/projects?tag=cobol").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], Value::Array(Vec::new()));
    assert_eq!(json["pagination"]["count"], 0);
}

#[actix_web::test]
async fn api_facets() {
    let (status, json) = get_json("/api/rest/projects/facets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["categories"][0], "front-end");
    assert_eq!(json["data"]["categories"][1], "full-stack");
}

#[actix_web::test]
async fn api_project_lookup() {
    let (status, json) = get_json("/api/rest/project/infinitepages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["case_study"]["duration"], "3 months");

    let (status, json) = get_json("/api/rest/project/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["status"], "Not Found");
    assert_eq!(json["error"]["message"], "Project 'ghost' does not exist");
}

#[actix_web::test]
async fn api_blog_and_profile_lists() {
    let (status, json) = get_json("/api/rest/blog/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["slug"], "animating-charts-without-jank");
    assert!(json["data"][0].get("body").is_none());

    let (status, json) = get_json("/api/rest/blog/post/animating-charts-without-jank").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["body"].as_array().unwrap().len(), 2);

    for (uri, len) in [
        ("/api/rest/skills", 11),
        ("/api/rest/testimonials", 3),
        ("/api/rest/contacts", 4),
    ] {
        let (status, json) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), len, "{uri}");
    }
}

#[actix_web::test]
async fn analytics_accepts_metric() {
    let (status, json) = post_metric(
        r#"{"name":"LCP","value":1830.2,"rating":"good","id":"v1-1-LCP"}"#,
        "application/json",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Metric received");
}

#[actix_web::test]
async fn analytics_accepts_beacon_content_type() {
    let (status, json) = post_metric(
        r#"{"name":"CLS","value":0.3,"rating":"poor","id":"v1-1-CLS"}"#,
        "text/plain;charset=UTF-8",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}

#[actix_web::test]
async fn analytics_parse_failure_is_500() {
    let (status, json) = post_metric(r#"{"name":"LCP""#, "application/json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to process metric");
}

#[actix_web::test]
async fn sitemap_lists_projects() {
    let (status, xml) = get_text("/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    for slug in ["green-thumb", "vitaflow", "infinitepages"] {
        assert!(xml.contains(&format!("<loc>https://example.dev/projects/{slug}</loc>")));
    }
    assert!(!xml.contains("example.dev//"));
}

#[actix_web::test]
async fn robots_points_at_sitemap() {
    let (status, body) = get_text("/robots.txt").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sitemap: https://example.dev/sitemap.xml"));
}

#[actix_web::test]
async fn theme_route_sets_cookie_and_redirects() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/theme/dark")
        .insert_header((header::REFERER, "/blog"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/blog");
    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == "theme")
        .unwrap();
    assert_eq!(cookie.value(), "dark");
}

#[actix_web::test]
async fn theme_route_ignores_foreign_referer() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/theme/light")
        .insert_header((header::REFERER, "https://evil.example/phish"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn dark_theme_cookie_is_rendered() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/blog")
        .cookie(actix_web::cookie::Cookie::new("theme", "dark"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("href=\"/theme/light\""));
}

#[actix_web::test]
async fn unknown_theme_is_bad_request() {
    let (status, json) = get_json("/theme/neon").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "Unknown theme 'neon'");
}
