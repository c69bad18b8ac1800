use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

static INIT: OnceCell<()> = OnceCell::new();

const ENABLED_KEY: &str = "RESEARCH_OBSERVABILITY_ENABLED";
const LOG_LEVEL_KEY: &str = "RESEARCH_LOG_LEVEL";
const JSON_LOG_PATH_KEY: &str = "RESEARCH_JSON_LOG_PATH";
const DEFAULT_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "research.logs.jsonl";

fn parse_bool_env(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "enabled" => Some(true),
        "0" | "false" | "no" | "off" | "disabled" => Some(false),
        _ => None,
    }
}

fn valid_filter(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && EnvFilter::try_new(s).is_ok())
}

/// Logging settings resolved from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Whether a subscriber is installed at all.
    pub enabled: bool,
    /// `EnvFilter` directive string.
    pub filter: String,
    /// JSONL output file. `None` logs to stdout.
    pub json_log_path: Option<PathBuf>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filter: DEFAULT_FILTER.to_string(),
            json_log_path: None,
        }
    }
}

impl ObservabilityConfig {
    /// Environment variables:
    /// - `RESEARCH_OBSERVABILITY_ENABLED`: enable/disable flag (default enabled).
    /// - `RESEARCH_LOG_LEVEL`: filter override (`info`, `research_core=debug`, ...).
    /// - `RUST_LOG`: fallback filter when `RESEARCH_LOG_LEVEL` is unset or invalid.
    /// - `RESEARCH_JSON_LOG_PATH`: write JSONL to this file instead of stdout.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup(ENABLED_KEY)
            .and_then(|v| parse_bool_env(&v))
            .unwrap_or(true);
        let filter = valid_filter(lookup(LOG_LEVEL_KEY))
            .or_else(|| valid_filter(lookup("RUST_LOG")))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let json_log_path = lookup(JSON_LOG_PATH_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self {
            enabled,
            filter,
            json_log_path,
        }
    }

    /// Directory and file name for the JSONL writer.
    fn json_log_target(&self) -> Option<(PathBuf, String)> {
        let path = self.json_log_path.as_ref()?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_LOG_FILE)
            .to_string();
        Some((dir, file_name))
    }
}

/// Initialize logging once per process from `RESEARCH_*` variables.
pub fn init_observability() {
    init_observability_with(ObservabilityConfig::from_env());
}

/// Initialize logging once per process. Later calls are no-ops.
pub fn init_observability_with(config: ObservabilityConfig) {
    INIT.get_or_init(|| {
        if !config.enabled {
            return;
        }

        let env_filter =
            EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        if let Some((dir, file_name)) = config.json_log_target() {
            let _ = std::fs::create_dir_all(&dir);
            let writer = tracing_appender::rolling::never(&dir, &file_name);
            let json_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(false)
                .with_writer(writer);
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .try_init();
        } else {
            let console_layer = tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stdout);
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .try_init();
        }
        tracing::info!(
            event = "observability.initialized",
            domain = "observability",
            filter = %config.filter,
            json = config.json_log_path.is_some()
        );
    });
}
