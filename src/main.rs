mod config;
mod proxy;
mod routes;

use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    let config = match config::DevConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let state = proxy::ProxyState::new(config.proxy.clone()).expect("failed to build upstream client");
    let app = routes::app(state, &config.static_dir);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(
        %addr,
        api_target = %config.proxy.target,
        change_origin = config.proxy.change_origin,
        static_dir = %config.static_dir.display(),
        "itemlist dev server listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
