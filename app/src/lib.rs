//! Restart application library

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use restart_api::AppState;
use restart_core::AppConfig;
use wallet_session::SessionController;

/// Environment variable naming the JSON config file
pub const CONFIG_ENV: &str = "RESTART_CONFIG";

/// Config path from the first CLI argument, falling back to `RESTART_CONFIG`
fn config_path(mut args: impl Iterator<Item = String>, env: Option<String>) -> Option<PathBuf> {
    args.nth(1).or(env).map(PathBuf::from)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

/// Run the Restart server
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("restart_lib=debug".parse()?)
                .add_directive("restart_api=debug".parse()?)
                .add_directive("wallet_session=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    tracing::info!("Starting Restart application");

    let path = config_path(std::env::args(), std::env::var(CONFIG_ENV).ok());
    let config = AppConfig::load(path.as_deref()).context("failed to load configuration")?;
    tracing::info!(
        "Network: {}, submit latency: {} ms",
        config.network,
        config.session.submit_latency_ms
    );

    let controller = Arc::new(SessionController::mock(&config.session));
    tracing::info!("Wallet backend: {}", controller.backend_name());

    let port = config.api_port;
    let state = AppState::with_controller(config, controller);
    restart_api::start_server(state, port, shutdown_signal())
        .await
        .with_context(|| format!("API server on port {} failed", port))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_config_path_prefers_argument() {
        let path = config_path(args(&["restart", "a.json"]), Some("b.json".into()));
        assert_eq!(path, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_config_path_falls_back_to_env() {
        let path = config_path(args(&["restart"]), Some("b.json".into()));
        assert_eq!(path, Some(PathBuf::from("b.json")));
        assert_eq!(config_path(args(&["restart"]), None), None);
    }
}
