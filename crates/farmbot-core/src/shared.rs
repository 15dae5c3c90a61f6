//! Shared types used by the core and the gateway.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Input modality of a question. Selects the knowledge-base section and matching stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Free-text chat message.
    Text,
    /// Uploaded image; the original filename stands in for the content.
    Image,
    /// Uploaded audio clip; the original filename stands in for the content.
    Voice,
}

impl Category {
    /// Wire name used in response envelopes (`"text"`, `"image"`, `"voice"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Voice => "voice",
        }
    }

    /// All categories in display order.
    pub fn all() -> [Self; 3] {
        [Self::Text, Self::Image, Self::Voice]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gateway configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Name reported by the root info endpoint.
    pub app_name: String,
    /// Interface the gateway binds to.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Directory where accepted uploads are written.
    pub upload_dir: String,
    /// Maximum size of a single uploaded file, in bytes.
    pub max_upload_bytes: usize,
    /// The single browser origin allowed by CORS (the chat frontend).
    pub cors_origin: String,
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "Farmer Chatbot Backend API".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5001,
            upload_dir: "./uploads".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl CoreConfig {
    /// Upload limit for user-facing messages: "16MB", "512KB" or "100 bytes".
    pub fn max_upload_label(&self) -> String {
        const KIB: usize = 1024;
        const MIB: usize = 1024 * KIB;
        match self.max_upload_bytes {
            n if n >= MIB && n % MIB == 0 => format!("{}MB", n / MIB),
            n if n >= KIB && n % KIB == 0 => format!("{}KB", n / KIB),
            n => format!("{} bytes", n),
        }
    }

    /// Load config from file and environment.
    ///
    /// Precedence: defaults < `FARMBOT_CONFIG` path (or `config/gateway`) < `FARMBOT__*` env < `PORT` env.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("FARMBOT_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("upload_dir", defaults.upload_dir)?
            .set_default("max_upload_bytes", defaults.max_upload_bytes as i64)?
            .set_default("cors_origin", defaults.cors_origin)?;

        // `config/gateway` is resolved by the file source with any supported extension.
        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder.add_source(config::File::with_name(&config_path).required(false))
        };

        let port_override = std::env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse::<i64>().ok());

        let built = builder
            .add_source(config::Environment::with_prefix("FARMBOT").separator("__"))
            .set_override_option("port", port_override)?
            .build()?;

        built.try_deserialize()
    }
}
