//! Server configuration.
//!
//! Read from the TOML file named by `WORKSHEET_CONFIG_PATH` when set; every
//! field is optional and falls back to its default. `PORT` in the environment
//! overrides the port last.

use serde::Deserialize;
use tracing::{error, info};

use crate::worksheet_engine::models::{QuestionLimits, DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub default_question_count: usize,
    pub max_question_count: usize,
    /// Browser origins allowed by CORS. `"*"` allows any.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            default_question_count: DEFAULT_QUESTION_COUNT,
            max_question_count: MAX_QUESTION_COUNT,
            allowed_origins: vec!["http://localhost:3000".into()],
        }
    }
}

impl ServerConfig {
    pub fn question_limits(&self) -> QuestionLimits {
        QuestionLimits {
            default_question_count: self.default_question_count,
            max_question_count: self.max_question_count,
        }
    }

    /// Load from the environment. Read or parse failures are logged and the
    /// defaults are used instead.
    pub fn from_env() -> Self {
        let mut cfg = std::env::var("WORKSHEET_CONFIG_PATH")
            .ok()
            .and_then(|path| load_file(&path))
            .unwrap_or_default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.port = port;
        }
        cfg
    }
}

fn load_file(path: &str) -> Option<ServerConfig> {
    match std::fs::read_to_string(path) {
        Ok(s) => match toml::from_str::<ServerConfig>(&s) {
            Ok(cfg) => {
                info!(%path, "loaded server config (TOML)");
                Some(cfg)
            }
            Err(e) => {
                error!(%path, error = %e, "failed to parse TOML config");
                None
            }
        },
        Err(e) => {
            error!(%path, error = %e, "failed to read TOML config file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let cfg: ServerConfig = toml::from_str("port = 9000\nmax_question_count = 40\n").unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.max_question_count, 40);
        assert_eq!(cfg.default_question_count, 15);
        assert_eq!(cfg.allowed_origins, vec!["http://localhost:3000".to_string()]);
    }

    #[test]
    fn limits_follow_config() {
        let cfg = ServerConfig { default_question_count: 8, max_question_count: 20, ..Default::default() };
        assert_eq!(
            cfg.question_limits(),
            QuestionLimits { default_question_count: 8, max_question_count: 20 }
        );
    }
}
