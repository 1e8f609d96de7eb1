//! Dispatch service configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{MapBounds, Worker, DEFAULT_TOP_N};
use crate::infra::random::http::DEFAULT_RANDOM_URL;
use crate::select::RankerKind;

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "DISPATCH_CONFIG";

/// Map dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map width; valid x is `0..width`.
    pub width: i32,
    /// Map height; valid y is `0..height`.
    pub height: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

impl From<MapConfig> for MapBounds {
    fn from(cfg: MapConfig) -> Self {
        Self::new(cfg.width, cfg.height)
    }
}

/// Remote random-number provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomProviderConfig {
    /// Call the remote provider at all; when off only the local generator is used.
    pub enabled: bool,
    /// Provider endpoint.
    pub url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for RandomProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_RANDOM_URL.to_string(),
            timeout_ms: 2_000,
        }
    }
}

/// HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Root dispatch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Maximum dispatches in flight at once.
    pub parallel_limit: u32,
    /// Map dimensions.
    #[serde(default)]
    pub map: MapConfig,
    /// Nearest workers competing in the random pick.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Ranking strategy.
    #[serde(default)]
    pub ranker: RankerKind,
    /// Remote random-number provider.
    #[serde(default)]
    pub random: RandomProviderConfig,
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,
    /// Workers loaded into the in-memory store at startup.
    #[serde(default)]
    pub seed_workers: Vec<Worker>,
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            parallel_limit: 10,
            map: MapConfig::default(),
            top_n: DEFAULT_TOP_N,
            ranker: RankerKind::default(),
            random: RandomProviderConfig::default(),
            server: ServerConfig::default(),
            seed_workers: Vec::new(),
        }
    }
}

impl DispatchConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Describes the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.parallel_limit == 0 {
            return Err("parallel_limit must be greater than 0".into());
        }
        if self.map.width <= 0 || self.map.height <= 0 {
            return Err(format!(
                "map must have positive dimensions, got {}x{}",
                self.map.width, self.map.height
            ));
        }
        if self.top_n == 0 {
            return Err("top_n must be greater than 0".into());
        }
        if self.random.enabled {
            if self.random.url.trim().is_empty() {
                return Err("random.url must be set when the provider is enabled".into());
            }
            if self.random.timeout_ms == 0 {
                return Err("random.timeout_ms must be greater than 0".into());
            }
        }
        if self.server.bind.trim().is_empty() {
            return Err("server.bind must not be empty".into());
        }
        let bounds = MapBounds::from(self.map);
        if let Some(w) = self.seed_workers.iter().find(|w| !bounds.contains(w.position())) {
            return Err(format!(
                "seed worker {} at ({}, {}) is outside the map",
                w.id, w.x, w.y
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// I/O, parse or validation failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Load configuration for the process.
    ///
    /// Reads `.env` if present, starts from the file named by `DISPATCH_CONFIG` (or the
    /// defaults), then applies `DISPATCH_*` overrides and validates.
    ///
    /// # Errors
    ///
    /// I/O, parse, override or validation failure.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }
        let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `DISPATCH_*` overrides from `lookup`.
    ///
    /// # Errors
    ///
    /// An override value that does not parse.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DISPATCH_PARALLEL_LIMIT") {
            self.parallel_limit = parse_var("DISPATCH_PARALLEL_LIMIT", &v)?;
        }
        if let Some(v) = lookup("DISPATCH_MAP_WIDTH") {
            self.map.width = parse_var("DISPATCH_MAP_WIDTH", &v)?;
        }
        if let Some(v) = lookup("DISPATCH_MAP_HEIGHT") {
            self.map.height = parse_var("DISPATCH_MAP_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("DISPATCH_TOP_N") {
            self.top_n = parse_var("DISPATCH_TOP_N", &v)?;
        }
        if let Some(v) = lookup("DISPATCH_RANKER") {
            self.ranker = RankerKind::parse(&v)
                .ok_or_else(|| format!("DISPATCH_RANKER: unknown ranker `{v}`"))?;
        }
        if let Some(v) = lookup("DISPATCH_RANDOM_ENABLED") {
            self.random.enabled = parse_var("DISPATCH_RANDOM_ENABLED", &v)?;
        }
        if let Some(v) = lookup("DISPATCH_RANDOM_URL") {
            self.random.url = v;
        }
        if let Some(v) = lookup("DISPATCH_RANDOM_TIMEOUT_MS") {
            self.random.timeout_ms = parse_var("DISPATCH_RANDOM_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = lookup("DISPATCH_BIND") {
            self.server.bind = v;
        }
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| format!("{key}: invalid value `{value}`: {e}"))
}
