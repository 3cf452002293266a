use actix_web::{web, HttpResponse};

use crate::model::analytics::{AnalyticsResJson, WebVitalReqJson};

pub fn analytics_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/analytics/web-vitals", web::post().to(web_vitals));
}

/// Body is read raw: beacons arrive as `text/plain`.
async fn web_vitals(body: web::Bytes) -> HttpResponse {
    let metric = match WebVitalReqJson::from_slice(&body) {
        Ok(metric) => metric,
        Err(err) => {
            pf_log::error(
                None,
                format!("[ApiRestServer] Failed to parse web vital metric: {err}"),
            );
            return HttpResponse::InternalServerError().json(AnalyticsResJson::failed());
        }
    };

    pf_log::info(
        Some("📈"),
        format!(
            "[ApiRestServer] Web vital {} = {} ({}) id={}",
            metric.name(),
            metric.value(),
            metric.rating().as_ref(),
            metric.id()
        ),
    );

    HttpResponse::Ok().json(AnalyticsResJson::received())
}
