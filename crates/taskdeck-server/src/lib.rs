//! taskdeck-server - Static asset server (the HTTP boundary)
//!
//! A generic "serve bytes for a path, 404 otherwise" responder over a
//! single directory. The contract:
//! - a path escaping the served root is rejected with 400 before any
//!   filesystem access
//! - directory paths resolve to a contained `index.html`
//! - hits get the file bytes with a content type from the extension
//!   table and `Cache-Control: no-cache`
//! - misses get the root's `404.html` if present, else plain text
//!
//! The server shares no state with the TUI; it only delivers assets.

pub mod files;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use taskdeck_core::prelude::*;

use files::{mime_for, sanitize_request_path};

/// Default port when neither the flag, PORT env, nor settings give one
pub const DEFAULT_PORT: u16 = 1234;

/// Resolve the port to bind: CLI flag, then `PORT` env, then settings,
/// then [`DEFAULT_PORT`].
pub fn resolve_port(flag: Option<u16>, settings: Option<u16>) -> u16 {
    flag.or_else(|| {
        std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
    })
    .or(settings)
    .unwrap_or(DEFAULT_PORT)
}

/// Build the router serving `root`
pub fn router(root: PathBuf) -> Router {
    Router::new()
        .fallback(get(serve_asset))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(root))
}

/// Serve `root` on `port` until the process is stopped
pub async fn serve(root: PathBuf, port: u16) -> Result<()> {
    if !root.is_dir() {
        return Err(Error::asset_root_missing(root));
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| Error::server(format!("Failed to bind port {port}: {e}")))?;
    info!("Serving {} on http://0.0.0.0:{port}", root.display());

    axum::serve(listener, router(root))
        .await
        .map_err(|e| Error::server(format!("Server stopped: {e}")))
}

/// Blocking wrapper around [`serve`] for the synchronous CLI entry point
pub fn serve_blocking(root: PathBuf, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::server(format!("Failed to start runtime: {e}")))?;
    runtime.block_on(serve(root, port))
}

async fn serve_asset(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let Some(relative) = sanitize_request_path(uri.path()) else {
        return plain(StatusCode::BAD_REQUEST, "Bad Request");
    };

    let mut path = root.join(relative);
    if path.is_dir() {
        path = path.join("index.html");
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let headers = [
                (header::CONTENT_TYPE, mime_for(&path)),
                (header::CACHE_CONTROL, "no-cache"),
            ];
            (StatusCode::OK, headers, Body::from(bytes)).into_response()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => not_found(&root).await,
        Err(e) => {
            warn!("Failed to read {}: {e}", path.display());
            plain(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

/// Serve the root's custom 404 page if one exists
async fn not_found(root: &Path) -> Response {
    let custom = root.join("404.html");
    match tokio::fs::read(&custom).await {
        Ok(bytes) => {
            let headers = [
                (header::CONTENT_TYPE, mime_for(&custom)),
                (header::CACHE_CONTROL, "no-cache"),
            ];
            (StatusCode::NOT_FOUND, headers, Body::from(bytes)).into_response()
        }
        Err(_) => plain(StatusCode::NOT_FOUND, "404 Not Found"),
    }
}

fn plain(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
