//! API configuration.

use std::path::PathBuf;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen port.
    pub port: u16,
    /// Shared secret for bearer and WebSocket token verification.
    pub jwt_secret: String,
    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
    /// Root directory for uploaded files.
    pub upload_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            jwt_secret: "your-secret-key-change-in-production".to_string(),
            cors_origins: vec!["*".to_string()],
            upload_dir: PathBuf::from("uploads"),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            cors_origins: std::env::var("CLIENT_URL")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
        }
    }
}
