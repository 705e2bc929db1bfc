use std::sync::Arc;

use cayo::env_config;
use cayo::server::create_router;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_config::init_tracing();
    let port = env_config::server_port();
    let ctx = env_config::planner_context();
    tracing::info!(
        hard_mode_bps = ctx.rules.hard_mode_bps,
        safe_value = ?ctx.rules.safe_value,
        "starting cayo planner API"
    );

    let app = create_router(Arc::new(ctx));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("listening on port {} (Ctrl+C to stop)", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
