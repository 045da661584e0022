// Configuration loading from environment variables

use crate::error::{DirectoryError, Result};

/// Explorer settings resolved from the environment
///
/// Loaded once at startup; nothing is read from the environment after
/// `load` returns, and the value is passed explicitly into whatever needs
/// it. There is no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root URL of the service directory, without a trailing slash
    pub server_url: String,
}

impl Settings {
    /// Load settings from `.env` (if present) and the environment
    ///
    /// Environment Variables:
    /// - ARCGIS_SERVER_URL (required): directory root, e.g.
    ///   `https://server/arcgis/rest/services`
    ///
    /// # Errors
    /// - ARCGIS_SERVER_URL not set
    pub fn load() -> Result<Self> {
        // Load .env file (ignore if not found)
        dotenvy::dotenv().ok();

        let server_url = std::env::var("ARCGIS_SERVER_URL").map_err(|_| {
            DirectoryError::Env("ARCGIS_SERVER_URL environment variable not set".to_string())
        })?;

        Ok(Self {
            // Call sites append path segments themselves
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }
}
