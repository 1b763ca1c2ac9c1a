//! Server Assembly
//!
//! Config → ruleset → router wiring and the serve loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};

use crate::config::Config;
use crate::rules::{RuleRegistry, ValidationRule};

use super::handlers;

/// Shared handler state: the ordered process ruleset.
///
/// Rules are stateless, so sharing them read-only across every in-flight
/// request is safe.
#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<Vec<Box<dyn ValidationRule>>>,
}

/// Build the application router.
///
/// ```text
/// POST /api/file-validator/upload -> upload_file (multipart)
/// GET  /health                    -> health
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/file-validator/upload", post(handlers::upload_file))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Start the validation server
pub async fn serve() -> Result<()> {
    let config = Config::from_args_and_env()?;
    init_logging(&config);

    let ruleset = config.load_ruleset()?;
    let rules = RuleRegistry::builtin().build_ruleset(&ruleset)?;
    log::info!(
        "loaded ruleset '{}' ({})",
        ruleset.ruleset.name,
        ruleset.ruleset.rules.join(", ")
    );

    let state = AppState {
        rules: Arc::new(rules),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;
    log::info!("listening on {}", config.listen);

    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
}
