//! Runtime configuration from the environment and the command line.
//!
//! Environment variables set the defaults; command-line flags override
//! them. Unparseable environment values are ignored, unparseable flags are
//! errors.

use std::env;

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

pub const ENV_SEED: &str = "MEMORY_MATCH_SEED";
pub const ENV_TICK_MS: &str = "MEMORY_MATCH_TICK_MS";
pub const ENV_LOG_PATH: &str = "MEMORY_MATCH_LOG_PATH";
pub const ENV_NO_MOUSE: &str = "MEMORY_MATCH_NO_MOUSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board shuffle seed; `None` draws one from system entropy
    pub seed: Option<u64>,
    /// Frame interval in milliseconds
    pub tick_ms: u32,
    /// Append JSONL events here when set
    pub log_path: Option<String>,
    pub mouse: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            log_path: None,
            mouse: true,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok()) {
            config.seed = Some(seed);
        }
        if let Some(ms) = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
        {
            config.tick_ms = ms;
        }
        config.log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if let Some(v) = lookup(ENV_NO_MOUSE) {
            let v = v.trim();
            config.mouse = v.is_empty() || v == "0";
        }

        config
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = Some(
                        v.parse::<u64>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--tick-ms" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --tick-ms"))?;
                    let ms = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("--tick-ms must be positive"));
                    }
                    self.tick_ms = ms;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                "--no-mouse" => self.mouse = false,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }
}
