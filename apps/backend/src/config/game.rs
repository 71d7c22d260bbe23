//! Game pacing and bot configuration, read from the environment.

use std::time::Duration;

use crate::ai;
use crate::error::AppError;

const DEFAULT_BOT_DELAY_MS: u64 = 1000;
const DEFAULT_ADVANCE_DELAY_MS: u64 = 1200;
const DEFAULT_BOT_STRATEGY: &str = "heuristic";

/// Pacing knobs for a room.
///
/// `bot_delay` is the "thinking time" before a scheduled bot bid or play;
/// `advance_delay` paces the round-end transition so clients can render the
/// last trick before the next deal arrives.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub bot_delay: Duration,
    pub advance_delay: Duration,
    pub bot_strategy: String,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let bot_delay = read_ms("SPADES_BOT_DELAY_MS", DEFAULT_BOT_DELAY_MS)?;
        let advance_delay = read_ms("SPADES_ADVANCE_DELAY_MS", DEFAULT_ADVANCE_DELAY_MS)?;
        let bot_strategy = std::env::var("SPADES_BOT_STRATEGY")
            .unwrap_or_else(|_| DEFAULT_BOT_STRATEGY.to_string());

        if ai::by_name(&bot_strategy).is_none() {
            return Err(AppError::config(format!(
                "SPADES_BOT_STRATEGY names an unregistered strategy: {bot_strategy:?}"
            )));
        }

        Ok(Self {
            bot_delay: Duration::from_millis(bot_delay),
            advance_delay: Duration::from_millis(advance_delay),
            bot_strategy,
        })
    }

    /// Near-zero delays for tests driving the scheduler directly.
    pub fn for_tests() -> Self {
        Self {
            bot_delay: Duration::from_millis(1),
            advance_delay: Duration::from_millis(1),
            bot_strategy: DEFAULT_BOT_STRATEGY.to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_delay: Duration::from_millis(DEFAULT_BOT_DELAY_MS),
            advance_delay: Duration::from_millis(DEFAULT_ADVANCE_DELAY_MS),
            bot_strategy: DEFAULT_BOT_STRATEGY.to_string(),
        }
    }
}

fn read_ms(var: &str, default: u64) -> Result<u64, AppError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| AppError::config(format!("{var} must be a millisecond count, got {raw:?}"))),
        Err(_) => Ok(default),
    }
}
