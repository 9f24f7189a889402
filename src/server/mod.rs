//! HTTP server
//!
//! One relay route plus static assets:
//!
//! - `POST /send-email` forwards a contact submission to the mail provider
//! - `GET /` serves the root document
//! - everything else is looked up in the static directory
//!
//! Handlers share nothing mutable; the provider's HTTP client owns its own
//! connection pool.

pub mod routes;
pub mod state;

pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::Method, routing::post, Router};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{Config, ServerConfig};
use crate::error::{Error, Result};
use routes::send_email_handler;

/// Build the application router
pub fn router(server: &ServerConfig, state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/send-email", post(send_email_handler))
        .route_service("/", ServeFile::new(server.index_path()))
        .fallback_service(ServeDir::new(&server.static_dir))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config);
    serve_with_state(&config.server, state).await
}

/// Bind and serve with a prebuilt state
pub async fn serve_with_state(server: &ServerConfig, state: Arc<AppState>) -> Result<()> {
    if !server.static_dir.is_dir() {
        warn!(
            "{}",
            Error::StaticDirMissing {
                path: server.static_dir.clone()
            }
        );
    }

    let app = router(server, state);

    let address = server.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| Error::BindFailed {
            address: address.clone(),
            reason: e.to_string(),
        })?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
