use actix_web::{
    body::{to_bytes, MessageBody},
    dev::ServiceResponse,
    http::header,
    middleware::ErrorHandlerResponse,
    Result,
};
use futures::executor;

use crate::model::Response;

/// Responses that already carry a rendered body are left untouched.
const PASSTHROUGH_CONTENT_TYPES: [&str; 3] = ["application/json", "text/html", "application/xml"];

pub fn default_error_handler<B: MessageBody>(
    svc_res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
    if let Some(content_type) = svc_res.response().headers().get(header::CONTENT_TYPE) {
        if let Ok(content_type) = content_type.to_str() {
            let content_type = content_type.to_lowercase();
            if PASSTHROUGH_CONTENT_TYPES
                .iter()
                .any(|passthrough| content_type.starts_with(passthrough))
            {
                return Ok(ErrorHandlerResponse::Response(svc_res.map_into_left_body()));
            }
        }
    }

    let (req, res) = svc_res.into_parts();

    let status_code = res.status();
    let body = executor::block_on(async {
        match to_bytes(res.into_body()).await {
            Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                Ok(str) => str,
                Err(err) => err.to_string(),
            },
            Err(err) => err.into().to_string(),
        }
    });
    let message = if body.is_empty() {
        status_code.canonical_reason().unwrap_or("Unknown error")
    } else {
        body.as_str()
    };

    let res = Response::error_raw(&status_code, message);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
