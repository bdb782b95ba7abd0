use std::sync::Arc;

use advencheer_backend::config::AppConfig;
use advencheer_backend::routes;
use advencheer_backend::state::AppState;
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("AdvenCheers travel chat running at http://{bind_addr}");
    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
