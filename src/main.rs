use std::sync::Arc;

use actix_web::{web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use tenant_drafting_service::config::AppConfig;
use tenant_drafting_service::model::GeminiClient;
use tenant_drafting_service::prompt::PromptComposer;
use tenant_drafting_service::web::routes;
use tenant_drafting_service::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting tenant drafting service");

    let config = AppConfig::from_env();
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; drafting requests will fail until it is provided");
    }
    info!(
        "Using model {} at {}",
        config.gemini_model, config.gemini_api_base
    );

    let composer = PromptComposer::new().context("Failed to register prompt template")?;
    let generator = Arc::new(GeminiClient::new(config.gemini_api_base.clone()));

    let bind = (config.host.clone(), config.port);
    let app_state = Data::new(AppState::new(config, composer, generator));

    info!("Listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(bind)
    .context("Failed to bind HTTP listener")?
    .run()
    .await
    .context("HTTP server terminated")
}
