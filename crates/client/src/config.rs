//! Client configuration loaded from environment variables.

/// Where the presentation-generation service lives.
///
/// Defaults suit local development; override via environment
/// variables in production.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service origin without a trailing slash
    /// (default: `http://localhost:5000`).
    pub origin: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `DECKGEN_SERVICE_ORIGIN` | `http://localhost:5000` |
    pub fn from_env() -> Self {
        let origin = std::env::var("DECKGEN_SERVICE_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5000".into());
        Self::new(origin)
    }

    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// Base URL of the versioned REST API.
    pub fn api_base(&self) -> String {
        format!("{}/api/v1", self.origin)
    }

    /// Resolve a relative download path from a record into an absolute
    /// URL a browser can fetch.
    pub fn resolve_download(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}
