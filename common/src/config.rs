//! Configuration management via environment variables
//!
//! Reads environment variables with fallback to deprecated variable names.
//! Nothing is logged while reading: the subscriber is not installed yet, so
//! callers report deprecated names themselves once logging is up.
//!
//! Configuration only ever affects diagnostics. The endpoint catalog and the
//! listing format are fixed.

/// Preferred log level variable
pub const LOG_LEVEL_ENV: &str = "ENDPOINT_LISTER_LOG_LEVEL";

/// Deprecated log level variable
pub const LEGACY_LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Filter used when nothing is configured
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Value read by [`get_env_with_fallback`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvValue {
    /// Trimmed, non-empty value
    pub value: String,
    /// True when only the deprecated name was set
    pub deprecated: bool,
}

fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Get an environment variable with fallback to a deprecated name
///
/// Blank values count as unset. The new name takes precedence.
///
/// # Example
/// ```
/// use endpoint_lister_common::config::get_env_with_fallback;
///
/// let level = get_env_with_fallback("ENDPOINT_LISTER_LOG_LEVEL", "LOG_LEVEL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<EnvValue> {
    if let Some(value) = non_blank_var(new_name) {
        return Some(EnvValue {
            value,
            deprecated: false,
        });
    }
    non_blank_var(old_name).map(|value| EnvValue {
        value,
        deprecated: true,
    })
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string
    pub filter: String,
    /// Set when the filter came from [`LEGACY_LOG_LEVEL_ENV`]
    pub deprecated_var: Option<&'static str>,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables.
    ///
    /// Order: `ENDPOINT_LISTER_LOG_LEVEL`, `LOG_LEVEL` (deprecated), `RUST_LOG`,
    /// then [`DEFAULT_LOG_FILTER`]. Blank values are skipped.
    pub fn from_env() -> Self {
        if let Some(env) = get_env_with_fallback(LOG_LEVEL_ENV, LEGACY_LOG_LEVEL_ENV) {
            return Self {
                filter: env.value,
                deprecated_var: env.deprecated.then_some(LEGACY_LOG_LEVEL_ENV),
            };
        }

        Self {
            filter: non_blank_var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            deprecated_var: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            deprecated_var: None,
        }
    }
}
