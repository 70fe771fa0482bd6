//! # Client configuration
//!
//! Two settings drive the client:
//!
//! ```toml
//! [api]
//! origin = "https://familyqapi.hibiscus.biz"   # backend origin, "/api" is appended
//!
//! [debug]
//! controls = false                              # show refresh / skip-to-next buttons
//! ```
//!
//! [`ClientConfig::from_env`] starts from `familyq.toml` in the working directory
//! when one exists (native builds only), then applies `FAMILYQ_API_ORIGIN` and
//! `FAMILYQ_DEBUG_CONTROLS`. Native builds consult the process environment (and a
//! `.env` file via `dotenvy`); wasm builds only see values baked in at compile
//! time. Anything missing falls back to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const DEFAULT_API_ORIGIN: &str = "https://familyqapi.hibiscus.biz";
pub const ORIGIN_VAR: &str = "FAMILYQ_API_ORIGIN";
pub const DEBUG_CONTROLS_VAR: &str = "FAMILYQ_DEBUG_CONTROLS";
pub const CONFIG_FILE: &str = "familyq.toml";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    DEFAULT_API_ORIGIN.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Show debug-only question controls. Off in production.
    #[serde(default)]
    pub controls: bool,
}

impl ClientConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                origin: origin.into(),
            },
            debug: DebugConfig::default(),
        }
    }

    /// Load the config file (if any), then let the environment override it.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Self::from_file().overlay(read_var)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_file() -> Self {
        let Ok(contents) = std::fs::read_to_string(CONFIG_FILE) else {
            return Self::default();
        };
        Self::from_toml(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e);
            Self::default()
        })
    }

    #[cfg(target_arch = "wasm32")]
    fn from_file() -> Self {
        Self::default()
    }

    fn overlay(mut self, read: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(origin) = read(ORIGIN_VAR).filter(|v| !v.trim().is_empty()) {
            self.api.origin = origin;
        }
        if let Some(flag) = read(DEBUG_CONTROLS_VAR) {
            self.debug.controls = parse_flag(&flag);
        }
        self
    }

    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The REST base URL: origin without trailing slash, plus `/api`.
    pub fn base_url(&self) -> Result<String, ApiError> {
        let origin = self.api.origin.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(origin)
            .map_err(|e| ApiError::InvalidConfig(format!("{ORIGIN_VAR}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfig(format!(
                "{ORIGIN_VAR} must be an http(s) origin, got {origin}"
            )));
        }
        Ok(format!("{origin}/api"))
    }
}

fn read_var(name: &str) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(value) = std::env::var(name) {
            return Some(value);
        }
    }
    compile_time_var(name)
}

fn compile_time_var(name: &str) -> Option<String> {
    let value = match name {
        ORIGIN_VAR => option_env!("FAMILYQ_API_ORIGIN"),
        DEBUG_CONTROLS_VAR => option_env!("FAMILYQ_DEBUG_CONTROLS"),
        _ => None,
    };
    value.map(str::to_string)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
