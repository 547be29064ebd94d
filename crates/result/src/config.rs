//! Capture configuration

use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// Default limit for captured fault messages, in bytes
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 4096;

static GLOBAL: LazyLock<ArcSwap<CaptureConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(CaptureConfig::from_env()));

/// How captured faults are reported and stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Emit a tracing event for every captured fault
    pub trace: bool,

    /// Level of that event
    pub level: Level,

    /// Truncate fault messages longer than this many bytes (`None` = keep all)
    pub max_message_len: Option<usize>,
}

/// Tracing level for capture events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Trace => write!(f, "trace"),
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// Error returned when a level name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capture level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            trace: true,
            level: Level::Debug,
            max_message_len: Some(DEFAULT_MAX_MESSAGE_LEN),
        }
    }
}

impl CaptureConfig {
    /// Create configuration from `PAW_CAPTURE_*` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unparsable values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(trace) = lookup("PAW_CAPTURE_TRACE") {
            config.trace = !matches!(
                trace.trim().to_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        if let Some(level) = lookup("PAW_CAPTURE_LEVEL")
            && let Ok(level) = level.parse()
        {
            config.level = level;
        }

        if let Some(max) = lookup("PAW_CAPTURE_MAX_MESSAGE") {
            let max = max.trim();
            if max.eq_ignore_ascii_case("none") || max == "0" {
                config.max_message_len = None;
            } else if let Ok(max) = max.parse() {
                config.max_message_len = Some(max);
            }
        }

        config
    }

    /// Quiet configuration: no events, no truncation
    #[must_use]
    pub fn silent() -> Self {
        Self {
            trace: false,
            level: Level::Debug,
            max_message_len: None,
        }
    }

    /// Set the event level
    #[must_use = "builder methods must be chained or built"]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the message limit
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_message_len(mut self, max: Option<usize>) -> Self {
        self.max_message_len = max;
        self
    }
}

/// Current process-wide capture configuration
pub fn config() -> Arc<CaptureConfig> {
    GLOBAL.load_full()
}

/// Replace the process-wide capture configuration
pub fn set_config(config: CaptureConfig) {
    GLOBAL.store(Arc::new(config));
}
