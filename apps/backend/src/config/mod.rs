//! Application configuration, environment-variable driven.

pub mod game;

pub use game::GameConfig;
