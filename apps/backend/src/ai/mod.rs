//! Bot module - automated seat decisions.
//!
//! This module provides:
//! - the `BotStrategy` trait for pluggable implementations
//! - `HeuristicBot`: the default high-card-counting strategy
//! - `RandomBot`: uniformly random legal moves (seedable for tests)
//! - a static registry so strategies are selected by name

mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use heuristic::HeuristicBot;
pub use random::RandomBot;
pub use registry::{by_name, create_bot, registered_bots, BotFactory};
pub use trait_def::{BotError, BotStrategy};
