//! Local contract harness for the Techo widgets.
//!
//! Serves the demo page and widget bundle from the static directory and
//! answers the lookup and status-change endpoints from in-memory fixtures.

mod config;
mod fixtures;
mod routes;
mod state;

use std::error::Error;

use crate::config::HarnessConfig;
use crate::fixtures::Fixtures;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    tracing_subscriber::fmt::init();

    let config = HarnessConfig::from_env()?;
    let fixtures = match &config.fixtures_path {
        Some(path) => {
            let fixtures = Fixtures::load(path)?;
            tracing::info!(path = %path.display(), "fixtures loaded");
            fixtures
        }
        None => Fixtures::sample(),
    };

    let state = state::AppState::new(fixtures, &config.csrf_token);
    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, static_dir = %config.static_dir.display(), "techo harness listening");
    axum::serve(listener, app).await?;
    Ok(())
}
