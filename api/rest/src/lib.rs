use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use configure::configure;
use context::ApiRestCtx;
use error_handler::default_error_handler;
use logger::logger_format;
use pf_config::app::AppConfigMode;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod page;
mod service;

#[cfg(test)]
mod tests;

pub struct ApiRestServer {
    mode: AppConfigMode,
    address: String,
    allowed_origin: Option<String>,
    images_dir: PathBuf,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(
        mode: &AppConfigMode,
        host: &str,
        port: &u16,
        allowed_origin: &Option<String>,
        public_path: &str,
        ctx: ApiRestCtx,
    ) -> Self {
        pf_log::info(Some("⚡"), "[ApiRestServer] Initializing component");

        Self {
            mode: *mode,
            address: format!("{host}:{port}"),
            allowed_origin: allowed_origin.clone(),
            images_dir: PathBuf::from(public_path).join("images"),
            context: web::Data::new(ctx),
        }
    }

    pub fn run(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        pf_log::info(Some("💫"), "[ApiRestServer] Running component");

        let Self {
            mode,
            address,
            allowed_origin,
            images_dir,
            context,
        } = self;

        tokio::spawn((|| async move {
            let server = match HttpServer::new(move || {
                let images_dir = images_dir.clone();
                App::new()
                    .wrap(cors(&mode, &allowed_origin))
                    .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                    .wrap(Logger::new(logger_format()))
                    .app_data(context.clone())
                    .configure(move |cfg| configure(cfg, &images_dir))
            })
            .disable_signals()
            .bind(&address)
            {
                Ok(server) => server.run(),
                Err(err) => {
                    return pf_log::panic(
                        None,
                        format!("[ApiRestServer] Failed to bind {address}: {err}"),
                    )
                }
            };
            let server_handle = server.handle();

            pf_log::info(Some("🌍"), format!("[ApiRestServer] Listening on {address}"));

            tokio::select! {
                _ = cancel_token.cancelled() => {}
                _ = tokio::signal::ctrl_c() => {}
                res = server => {
                    if let Err(err) = res {
                        pf_log::error(None, format!("[ApiRestServer] Server error: {err}"));
                    }
                }
            }

            pf_log::info(None, "[ApiRestServer] Shutting down component");
            server_handle.stop(true).await;
        })())
    }
}

fn cors(mode: &AppConfigMode, allowed_origin: &Option<String>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => match mode {
            AppConfigMode::Development => Cors::permissive(),
            AppConfigMode::Production => Cors::default(),
        },
    }
}
