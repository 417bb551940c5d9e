use reqwest::ClientBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use tagfeed_core::{AppConfig, BlogClient, ResponseCache};
use tagfeed_server::{build_router, AppState};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::load();
    let endpoint = Url::parse(&config.upstream.endpoint)
        .expect("invalid upstream endpoint in configuration");
    let client = ClientBuilder::new()
        .timeout(config.upstream.request_timeout())
        .user_agent("tagfeed/0.1")
        .build()
        .expect("failed to build HTTP client");

    let state = AppState {
        client: BlogClient::new(client, endpoint),
        cache: ResponseCache::new(config.cache.ttl()),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .expect("failed to bind server address");
    info!(addr = %config.server.bind_addr, "tagfeed listening");
    axum::serve(listener, app).await.expect("server error");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
