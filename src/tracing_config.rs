//! Diagnostic logging for the rewriter.
//!
//! `DTS_LOG` takes a filter in `RUST_LOG` syntax (`RUST_LOG` itself is the
//! fallback). The driver opens a span per run, the parser traces each
//! declaration it models, and the transformer logs one `debug!` line per
//! rewrite. `DTS_LOG_FORMAT` picks the layout: `text`, `tree` or `json`.
//!
//! ```bash
//! DTS_LOG=dts_emitter=debug downlevel-dts types out
//! DTS_LOG=trace DTS_LOG_FORMAT=tree downlevel-dts types/index.d.ts out
//! ```
//!
//! With neither variable set no subscriber is installed. Logs go to stderr;
//! stdout only carries `--listFiles` output.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event.
    Text,
    /// Indented span tree.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Unknown values select `Text`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter and layout taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Settings from `DTS_LOG` (or `RUST_LOG`) and `DTS_LOG_FORMAT`; `None`
    /// when logging was not requested.
    #[must_use]
    pub fn from_vars(
        dts_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<LogSettings> {
        let filter = dts_log.or(rust_log)?;
        Some(LogSettings {
            filter,
            format: format.as_deref().map_or(LogFormat::Text, LogFormat::parse),
        })
    }

    fn from_env() -> Option<LogSettings> {
        Self::from_vars(
            std::env::var("DTS_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var("DTS_LOG_FORMAT").ok(),
        )
    }
}

/// Install the global subscriber when logging was requested.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(&settings.filter);

    match settings.format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LogFormat, LogSettings};

    #[test]
    fn test_parses_known_formats() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("xml"), LogFormat::Text);
    }

    #[test]
    fn test_no_filter_means_no_logging() {
        assert_eq!(LogSettings::from_vars(None, None, Some("tree".into())), None);
    }

    #[test]
    fn test_dts_log_wins_over_rust_log() {
        let settings = LogSettings::from_vars(
            Some("dts_emitter=debug".into()),
            Some("warn".into()),
            Some("json".into()),
        )
        .unwrap();
        assert_eq!(settings.filter, "dts_emitter=debug");
        assert_eq!(settings.format, LogFormat::Json);

        let fallback = LogSettings::from_vars(None, Some("info".into()), None).unwrap();
        assert_eq!(fallback.filter, "info");
        assert_eq!(fallback.format, LogFormat::Text);
    }
}
