//! titleforge gateway — JSON-RPC 2.0 tool server over WebSocket.
//! Dispatches `generateTitles` calls into titleforge-core.

mod config;
mod rpc;
mod server;

use std::net::SocketAddr;

use config::GatewayConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!(
        "{} v{} listening on ws://{}",
        rpc::AGENT_NAME,
        titleforge_core::version(),
        addr
    );

    axum::serve(
        listener,
        server::router().into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .unwrap();
}

/// Resolves on SIGINT (ctrl-c) or, on unix, SIGTERM — the signal service
/// managers send on stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("ctrl-c handler installation failed");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation failed")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, closing WebSocket server");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_shutdown_signal_resolves_on_sigterm() {
        let handle = tokio::spawn(shutdown_signal());
        // Let the spawned future install its signal handlers first.
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        std::process::Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .expect("kill invocation failed");
        tokio::time::timeout(std::time::Duration::from_secs(2), handle)
            .await
            .expect("shutdown future did not resolve on SIGTERM")
            .expect("shutdown task panicked");
    }
}
