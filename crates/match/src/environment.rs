//! Deployment environment selection

use serde::{Deserialize, Serialize};

/// Variable read by [`Environment::detect`]
pub const ENV_VAR: &str = "PAW_ENV";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (also the default)
    #[default]
    Development,
    /// Test runs
    Test,
    /// Production
    Production,
}

impl Environment {
    /// Parse an environment name; anything unrecognized is development
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "test" => Self::Test,
            "production" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Read [`ENV_VAR`] from the process environment
    #[must_use]
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read [`ENV_VAR`] through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(ENV_VAR).map_or_else(Self::default, |name| Self::parse(&name))
    }

    /// Run the branch for this environment
    pub fn select<T>(
        self,
        development: impl FnOnce() -> T,
        test: impl FnOnce() -> T,
        production: impl FnOnce() -> T,
    ) -> T {
        match self {
            Self::Development => development(),
            Self::Test => test(),
            Self::Production => production(),
        }
    }

    /// Check for [`Environment::Development`]
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    /// Check for [`Environment::Test`]
    pub fn is_test(self) -> bool {
        self == Self::Test
    }

    /// Check for [`Environment::Production`]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Test => write!(f, "test"),
            Self::Production => write!(f, "production"),
        }
    }
}
