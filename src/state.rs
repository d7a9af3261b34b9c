/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - 起動時に作った不変の Config を Arc で持つ (Clone cheap)
 */
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}
