//! System configuration types: sync timing, provider assignment, logging.

use polygpt_common::{Position, ProviderKey, ERROR_BANNER_TTL};
use serde::{Deserialize, Serialize};

/// Timing of the input broadcast and selector self-healing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Minimum interval between two propagated compose values
    /// (valid range: 10-1000).
    pub throttle_ms: u64,
    /// Delay between two selector rescans (valid range: 100-10000).
    pub rescan_interval_ms: u64,
    /// Rescan budget per page load (valid range: 0-100).
    pub rescan_attempts: u32,
    /// Lifetime of the selector-error banner (valid range: 1-60).
    pub error_banner_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 50,
            rescan_interval_ms: 500,
            rescan_attempts: 10,
            error_banner_secs: ERROR_BANNER_TTL.as_secs(),
        }
    }
}

/// Provider shown at each position on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub top_left: ProviderKey,
    pub top_right: ProviderKey,
    pub bottom_left: ProviderKey,
    pub bottom_right: ProviderKey,
}

impl ProvidersConfig {
    /// The configured provider for a position.
    pub fn at(&self, position: Position) -> ProviderKey {
        match position {
            Position::TopLeft => self.top_left,
            Position::TopRight => self.top_right,
            Position::BottomLeft => self.bottom_left,
            Position::BottomRight => self.bottom_right,
        }
    }

    /// Every position paired with its startup provider, in grid order.
    pub fn assignment(&self) -> [(Position, ProviderKey); 4] {
        Position::ALL.map(|p| (p, self.at(p)))
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            top_left: ProviderKey::Claude,
            top_right: ProviderKey::Perplexity,
            bottom_left: ProviderKey::ChatGpt,
            bottom_right: ProviderKey::Gemini,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
