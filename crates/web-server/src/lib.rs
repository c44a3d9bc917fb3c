//! # Spring Aventure Web Server
//!
//! The HTTP face of the admin backend. Requests are parsed into typed inputs
//! (`forms`), handed to a controller (`controllers`) that talks to the entity
//! store, and answered with either a rendered view or a redirect (`view`).
//! Success messages travel across the redirect through the `flash` store.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use configuration::{PaginationSettings, ServerSettings};
use core_types::{Potion, Qualite};
use database::{CrudRepository, PagingRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod controllers;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod view;

use controllers::{PotionController, QualiteController};
use flash::FlashStore;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub potions: PotionController,
    pub qualites: QualiteController,
}

impl AppState {
    pub fn new(
        potion_dao: Arc<dyn CrudRepository<Potion>>,
        qualite_dao: Arc<dyn PagingRepository<Qualite>>,
        pagination: PaginationSettings,
    ) -> Self {
        let flash = FlashStore::new();
        Self {
            potions: PotionController::new(potion_dao, flash),
            qualites: QualiteController::new(qualite_dao, pagination),
        }
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/admin/potion",
            get(handlers::potion_index).post(handlers::potion_store),
        )
        .route("/admin/potion/create", get(handlers::potion_create))
        .route("/admin/potion/update", post(handlers::potion_update))
        .route("/admin/potion/delete", post(handlers::potion_delete))
        .route("/admin/potion/:id", get(handlers::potion_show))
        .route("/admin/potion/:id/edit", get(handlers::potion_edit))
        .route("/admin/qualite", get(handlers::qualite_index))
        .with_state(state)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run_server(settings: &ServerSettings, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    let app = router(Arc::new(state), settings.body_limit_bytes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server started and listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
