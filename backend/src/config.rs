use std::{env, path::Path, str::FromStr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Initialize the environment variables
pub fn init() {
    let _ = dotenvy::from_path(Path::new(
        format!("{}/.env", env!("CARGO_MANIFEST_DIR")).as_str(),
    ));
    dotenvy::dotenv().ok();
}

/// Parse an environment value, falling back to `default` when it is unset or
/// does not parse.
fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(s) if !s.trim().is_empty() => match s.trim().parse() {
            Ok(val) => val,
            Err(_) => {
                tracing::error!("Error parsing {}", key);
                default
            }
        },
        _ => default,
    }
}

/// Listener settings for the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `RESEARCH_HOST` and `RESEARCH_PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: parse_or("RESEARCH_HOST", lookup("RESEARCH_HOST"), DEFAULT_HOST.to_string()),
            port: parse_or("RESEARCH_PORT", lookup("RESEARCH_PORT"), DEFAULT_PORT),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
