//! How to register a bot strategy
//!
//! 1) Implement `BotStrategy` for your type in its module.
//! 2) Add a new `BotFactory` entry to the static list with a stable `name`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior.
//!
//! The orchestrator only ever goes through `create_bot`, so new strategies
//! never require orchestrator changes.

use crate::ai::{BotStrategy, HeuristicBot, RandomBot};

/// Factory definition for constructing bot implementations.
pub struct BotFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn BotStrategy>,
}

static BOT_FACTORIES: &[BotFactory] = &[
    BotFactory {
        name: HeuristicBot::NAME,
        version: HeuristicBot::VERSION,
        make: make_heuristic,
    },
    BotFactory {
        name: RandomBot::NAME,
        version: RandomBot::VERSION,
        make: make_random,
    },
];

/// Returns the statically registered bot factories.
pub fn registered_bots() -> &'static [BotFactory] {
    BOT_FACTORIES
}

/// Finds a registered bot factory by its name.
pub fn by_name(name: &str) -> Option<&'static BotFactory> {
    registered_bots().iter().find(|factory| factory.name == name)
}

/// Construct a bot by registry name; `None` for an unknown name.
pub fn create_bot(name: &str, seed: Option<u64>) -> Option<Box<dyn BotStrategy>> {
    by_name(name).map(|factory| (factory.make)(seed))
}

fn make_heuristic(seed: Option<u64>) -> Box<dyn BotStrategy> {
    Box::new(HeuristicBot::new(seed))
}

fn make_random(seed: Option<u64>) -> Box<dyn BotStrategy> {
    Box::new(RandomBot::new(seed))
}

#[cfg(test)]
mod bot_registry_smoke {
    use super::*;

    #[test]
    fn enumerates_registered_bots() {
        let bots = registered_bots();
        assert!(!bots.is_empty());
        assert!(bots.iter().any(|factory| factory.name == RandomBot::NAME));
        assert!(bots
            .iter()
            .any(|factory| factory.name == HeuristicBot::NAME));
    }

    #[test]
    fn lookup_helper_behaves() {
        assert!(by_name(RandomBot::NAME).is_some());
        assert!(by_name(HeuristicBot::NAME).is_some());
        assert!(by_name("not-a-real-bot").is_none());
        assert!(create_bot("not-a-real-bot", None).is_none());
    }

    #[test]
    fn constructs_seeded_bots() {
        let bot = create_bot(RandomBot::NAME, Some(123)).expect("random bot is registered");
        let _: &dyn BotStrategy = bot.as_ref();
    }
}
