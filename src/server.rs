//! docperm HTTP surface
//!
//! Stateless JSON endpoints exposing the document permission codec in the
//! shape web and mobile clients use. Nothing is stored here.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::document::{
    decode_document_permissions, encode_document_permissions, has_any_document_permission,
    DocumentRecord,
};
use crate::error::{DocpermError, Result};
use crate::permission::Permission;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

// ============================================================================
// Config
// ============================================================================

/// Where the server listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `DOCPERM_HOST` and `PORT` from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(host) = lookup("DOCPERM_HOST").filter(|h| !h.is_empty()) {
            cfg.host = host;
        }
        if let Some(port) = lookup("PORT") {
            cfg.port = port.trim().parse().map_err(|_| DocpermError::invalid_var("PORT", &port))?;
        }
        Ok(cfg)
    }

    /// Apply `--host`/`--port` overrides. Returns `None` when `--help` was given.
    pub fn apply_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Result<Option<Self>> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--host" | "-H" => {
                    self.host = args.next().ok_or_else(|| DocpermError::missing_value("--host"))?;
                }
                "--port" | "-p" => {
                    let v = args.next().ok_or_else(|| DocpermError::missing_value("--port"))?;
                    self.port = v.parse().map_err(|_| DocpermError::invalid_var("--port", &v))?;
                }
                "--help" | "-h" => return Ok(None),
                other => return Err(DocpermError::unknown_arg(other)),
            }
        }
        Ok(Some(self))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub const USAGE: &str = "docperm-server - document permission summary service

USAGE:
    docperm-server [OPTIONS]

OPTIONS:
    -H, --host <HOST>     Bind HOST (env DOCPERM_HOST, default: 0.0.0.0)
    -p, --port <PORT>     Listen on PORT (env PORT, default: 3000)
    -h, --help            Show this help message";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HasAnyResponse {
    has_any: bool,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn decode(Json(perms): Json<Vec<Permission>>) -> Json<DocumentRecord> {
    let r = decode_document_permissions(&perms);
    debug!(
        rows = perms.len(),
        org_id = %r.org_id,
        document_id = %r.document_id,
        user_id = %r.user_id,
        edit = r.document_role_edit,
        approve = r.document_role_approve,
        "decoded document permissions"
    );
    Json(r)
}

async fn encode(Json(r): Json<DocumentRecord>) -> Json<Vec<Permission>> {
    let perms = encode_document_permissions(&r);
    debug!(
        org_id = %r.org_id,
        document_id = %r.document_id,
        user_id = %r.user_id,
        rows = perms.len(),
        "encoded document permissions"
    );
    Json(perms)
}

async fn has_any(Json(r): Json<DocumentRecord>) -> Json<HasAnyResponse> {
    Json(HasAnyResponse { has_any: has_any_document_permission(&r) })
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/document/permissions/decode", post(decode))
        .route("/document/permissions/encode", post(encode))
        .route("/document/permissions/any", post(has_any))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `cfg.addr()` and serve until the process stops
pub async fn serve(cfg: &ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!(
        addr = %cfg.addr(),
        version = env!("CARGO_PKG_VERSION"),
        "docperm-server listening"
    );
    axum::serve(listener, router()).await?;
    Ok(())
}
