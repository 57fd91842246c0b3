// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Logging setup and encoder diagnostics.
//!
//! Encoders never fail on a type mismatch or an undersized source buffer;
//! they repair the input and say so here. Messages go through `tracing`, so
//! the sink is whatever subscriber the host application installs. Binaries
//! and tests that want output without wiring their own subscriber can call
//! [`init_logging`].
//!
//! ## Severities
//!
//! - `warn` - a source buffer was coerced to another element kind, or grown
//!   to the texture's capacity
//! - `debug` - a single-channel buffer is being exploded into RGBA texels

use crate::buffer::ElementKind;
use std::sync::Once;

/// Tracing target for encoder diagnostics.
pub const ENCODER_TARGET: &str = "texture_encoder::encoder";

/// Configuration for logging initialization.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default log level when `RUST_LOG` is not set.
    pub default_level: LogLevel,
    /// Include timestamps in log output.
    pub with_timestamps: bool,
    /// Include target (module path) in log output.
    pub with_target: bool,
    /// Include source file and line numbers.
    pub with_file_line: bool,
    /// Use ANSI colors (disable for file output).
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Info,
            with_timestamps: true,
            with_target: true,
            with_file_line: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a new logging configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default log level.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Configuration preset for development.
    ///
    /// Shows the `debug` explode messages as well as warnings.
    #[must_use]
    pub fn development() -> Self {
        Self {
            default_level: LogLevel::Debug,
            with_timestamps: true,
            with_target: true,
            with_file_line: true,
            with_ansi: true,
        }
    }

    /// Configuration preset for production.
    #[must_use]
    pub fn production() -> Self {
        Self {
            default_level: LogLevel::Info,
            with_timestamps: true,
            with_target: false,
            with_file_line: false,
            with_ansi: false,
        }
    }

    /// Configuration preset for testing.
    #[must_use]
    pub fn testing() -> Self {
        Self {
            default_level: LogLevel::Warn,
            with_timestamps: false,
            with_target: false,
            with_file_line: false,
            with_ansi: false,
        }
    }
}

/// Log level enumeration.
///
/// Maps to tracing levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and above.
    Warn,
    /// Informational messages and above.
    #[default]
    Info,
    /// Debug messages and above.
    Debug,
    /// All messages including trace.
    Trace,
}

impl LogLevel {
    fn as_filter_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

static INIT_LOGGING: Once = Once::new();

/// Install a global `tracing-subscriber` fmt subscriber.
///
/// Safe to call more than once; only the first call has any effect. The
/// `RUST_LOG` environment variable takes precedence over
/// `config.default_level`. If another subscriber is already installed the
/// call leaves it in place.
///
/// ## Example
///
/// ```rust
/// use texture_encoder::{init_logging, LogConfig};
///
/// init_logging(&LogConfig::testing());
/// ```
pub fn init_logging(config: &LogConfig) {
    INIT_LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.default_level.as_filter_str())
            });

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .with_file(config.with_file_line)
            .with_line_number(config.with_file_line);

        // try_init: a host may already own the global subscriber
        let _ = if config.with_timestamps {
            builder.try_init()
        } else {
            builder.without_time().try_init()
        };
    });
}

/// Report that a source buffer was converted to the encoder's element kind.
pub fn log_coercion(from: ElementKind, to: ElementKind) {
    tracing::warn!(
        target: ENCODER_TARGET,
        from = from.name(),
        to = to.name(),
        "data-type is not {}; converting",
        to.name()
    );
}

/// Report that an undersized source was copied into a zero-filled buffer.
pub fn log_reallocation(available: usize, required: usize) {
    tracing::warn!(
        target: ENCODER_TARGET,
        available,
        required,
        "source data too small; allocating larger array"
    );
}

/// Report that a single-channel buffer is being spread across RGBA texels.
pub fn log_explode(elements: usize) {
    tracing::debug!(
        target: ENCODER_TARGET,
        elements,
        "exploding single-channel data into RGBA texels"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert!(matches!(config.default_level, LogLevel::Info));
        assert!(config.with_timestamps);
        assert!(config.with_ansi);
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_level(LogLevel::Debug)
            .with_timestamps(false)
            .with_ansi(false);

        assert!(matches!(config.default_level, LogLevel::Debug));
        assert!(!config.with_timestamps);
        assert!(!config.with_ansi);
    }

    #[test]
    fn test_log_config_presets() {
        assert!(matches!(
            LogConfig::development().default_level,
            LogLevel::Debug
        ));
        assert!(!LogConfig::production().with_ansi);
        assert!(!LogConfig::testing().with_timestamps);
    }

    #[test]
    fn test_log_level_filter_str() {
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
        assert_eq!(LogLevel::Warn.as_filter_str(), "warn");
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
    }

    #[test]
    fn test_diagnostics_do_not_panic() {
        init_logging(&LogConfig::testing());
        init_logging(&LogConfig::development());
        log_coercion(ElementKind::U32, ElementKind::F32);
        log_reallocation(2, 4);
        log_explode(3);
    }
}
