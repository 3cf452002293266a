use pf_api_rest::{
    context::{ApiRestCtx, ApiRestSiteCtx},
    ApiRestServer,
};
use pf_content::catalog::Catalog;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = match pf_config::from_path(&config_path) {
        Ok(config) => config,
        Err(err) => return pf_log::panic(None, format!("[Folio] {err:#}")),
    };

    pf_log::init(
        config.log().display_level(),
        config.log().level_filter(),
        &!config.app().mode().is_production(),
    );

    pf_log::info(Some("🚀"), "[Folio] Starting");

    let catalog = Catalog::seeded();
    pf_log::info(
        None,
        format!(
            "[Folio] Serving {} projects and {} blog posts",
            catalog.projects().len(),
            catalog.blog_posts().len()
        ),
    );

    let api_rest_server = ApiRestServer::new(
        config.app().mode(),
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        config.site().public_path(),
        ApiRestCtx::new(
            catalog,
            ApiRestSiteCtx::new(
                config.site().base_url(),
                config.site().title(),
                config.site().author(),
            ),
            config.search().debounce(),
        ),
    );

    let cancel_token = CancellationToken::new();

    match api_rest_server.run(cancel_token.clone()).await {
        Ok(_) => pf_log::info(Some("👋"), "[Folio] Turned off"),
        Err(err) => {
            pf_log::warn(None, "[Folio] Shutting down all running components");
            cancel_token.cancel();
            pf_log::warn(Some("👋"), format!("[Folio] Turned off with error: {err}"));
        }
    }
}
