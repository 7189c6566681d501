mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;
mod views;

use crate::{config::ServerConfig, doc::ApiDoc, state::AppState, utils::shutdown::shutdown_signal};
use database::db::create_connection;
use log::{error, info};
use std::process::ExitCode;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let db = create_connection(&config.database_url).await?;

    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(config.oidc_issuer_url.as_str())
        .build()
        .await
        .map_err(|err| format!("failed to build OAuth2ResourceServer: {err:?}"))?;

    let me = routes::me_router()
        .layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer()));

    let app = routes::router()
        .nest("/me", me)
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
