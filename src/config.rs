// src/config.rs
//
// Engine settings. `parallel` may come from a request body; both come from
// the environment:
//   DOMINOES_PARALLEL         run both passes concurrently (default true)
//   DOMINOES_MAX_LINE_LENGTH  reject longer lines before allocating (default 500000)

use serde::{Deserialize, Serialize};

/// Longest line accepted by default.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 500_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Run the right and left passes on separate rayon workers.
    pub parallel: bool,
    /// Only code and the environment set this; a request body cannot.
    #[serde(skip_deserializing, default = "default_max_line_length")]
    pub max_line_length: usize,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            parallel: true,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl EngineConfig {
    pub fn sequential() -> Self {
        EngineConfig {
            parallel: false,
            ..Self::default()
        }
    }

    /// Defaults overridden by `DOMINOES_*` variables. Unparseable values are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup("DOMINOES_PARALLEL") {
            match parse_flag(&raw) {
                Some(flag) => config.parallel = flag,
                None => tracing::warn!(value = %raw, "ignoring invalid DOMINOES_PARALLEL"),
            }
        }
        if let Some(raw) = lookup("DOMINOES_MAX_LINE_LENGTH") {
            match raw.trim().parse() {
                Ok(max) => config.max_line_length = max,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid DOMINOES_MAX_LINE_LENGTH")
                }
            }
        }
        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
