//! Session options for the presentation layer.
//!
//! Defaults are overridden by environment variables at startup and by
//! `set <name> <value>` commands at runtime. Names are the same in both
//! places, lowercase at runtime and `PSEUDO_CHESS_`-prefixed uppercase in
//! the environment.

use std::time::Duration;

use log::info;

use crate::chess_errors::{ChessError, ChessResult};

const ENV_PREFIX: &str = "PSEUDO_CHESS_";
pub const OPTION_NAMES: [&str; 4] = ["cooldown_ms", "opponent", "strict", "unicode"];

/// Who plays the side not driven by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMode {
    Human,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Input lock after each applied move.
    pub cooldown: Duration,
    pub opponent: OpponentMode,
    /// Route moves through `apply_checked_move`.
    pub strict_moves: bool,
    pub unicode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(300),
            opponent: OpponentMode::Human,
            strict_moves: false,
            unicode: true,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by any `PSEUDO_CHESS_*` environment variables.
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> ChessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for name in OPTION_NAMES {
            let key = format!("{ENV_PREFIX}{}", name.to_ascii_uppercase());
            if let Some(value) = lookup(&key) {
                config.set_option(name, &value)?;
            }
        }
        Ok(config)
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let trimmed = value.trim();

        match name.to_ascii_lowercase().as_str() {
            "cooldown_ms" => {
                let ms = trimmed.parse::<u64>().map_err(|_| invalid())?;
                self.cooldown = Duration::from_millis(ms);
            }
            "opponent" => {
                self.opponent = match trimmed.to_ascii_lowercase().as_str() {
                    "human" => OpponentMode::Human,
                    "random" => OpponentMode::Random,
                    _ => return Err(invalid()),
                };
            }
            "strict" => self.strict_moves = parse_flag(trimmed).ok_or_else(invalid)?,
            "unicode" => self.unicode = parse_flag(trimmed).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        }

        info!("option {name} set to {trimmed}");
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
