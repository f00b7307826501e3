mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let port = config.port;
    let state = state::AppState::new(config).expect("http client init failed");
    tracing::info!(
        upstream = %state.config.api_url,
        proxy = state.config.proxy_api,
        "api upstream configured"
    );

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "shortlink-web listening");
    axum::serve(listener, app).await.expect("server failed");
}
