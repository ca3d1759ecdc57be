use std::sync::Arc;

use crate::catalog::Catalog;
use crate::render::DocumentRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; shared across requests without locking.
    pub catalog: Arc<Catalog>,
    /// Pluggable document backend. Default: PdfRenderer on the configured page size.
    pub renderer: Arc<dyn DocumentRenderer>,
}
