use std::sync::Arc;

use crate::config::GameConfig;
use crate::services::game_flow::GameFlowService;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    flow: Arc<GameFlowService>,
}

impl AppState {
    pub fn new(flow: Arc<GameFlowService>) -> Self {
        Self { flow }
    }

    pub fn game_flow(&self) -> Arc<GameFlowService> {
        self.flow.clone()
    }

    /// State with fast pacing for tests.
    pub fn for_tests() -> Self {
        Self::new(GameFlowService::new(GameConfig::for_tests()))
    }
}
