//! API server entry point with OpenAPI documentation at `/docs`.

use api::config::Config;
use api::server;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    server::init_tracing(&config);

    let metrics_handle = server::install_metrics().expect("failed to install Prometheus recorder");

    let state = api::create_default_state(&config);
    let app = api::create_documented_app(state, metrics_handle);
    tracing::info!(docs = api::openapi::DOCS_PATH, "serving API documentation");

    server::run(app, &config).await.expect("server error");
}
