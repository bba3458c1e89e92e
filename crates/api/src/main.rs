//! API server entry point.

use api::config::Config;
use api::server;

#[tokio::main]
async fn main() {
    // 1. Load .env and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Initialize tracing
    server::init_tracing(&config);

    // 3. Install Prometheus metrics recorder
    let metrics_handle = server::install_metrics().expect("failed to install Prometheus recorder");

    // 4. Build the application
    let state = api::create_default_state(&config);
    let app = api::create_app(state, metrics_handle);

    // 5. Start server
    server::run(app, &config).await.expect("server error");
}
