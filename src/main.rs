// Binary entry point: wires logging, state, routing, and graceful shutdown

use axum::{extract::Request, serve, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use employee_directory::config::state::AppState;
use employee_directory::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::instance().clone();
    state.init_database().await?;

    // Trailing slashes are trimmed before routing, so /employee/3/ and
    // /employee/3 resolve to the same handler.
    let app = NormalizePathLayer::trim_trailing_slash().layer(server::create_app(state.clone()));

    let listener = server::setup_listener(&state.environment).await?;
    tracing::info!("Employee directory listening on: {}", listener.local_addr()?);

    serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(server::shutdown_signal(state))
        .await?;

    Ok(())
}
