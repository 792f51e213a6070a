pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod web;

use std::sync::Arc;

use config::AppConfig;
use model::TextGenerator;
use prompt::PromptComposer;

// App state structure, shared read-only across workers
pub struct AppState {
    pub config: AppConfig,
    pub composer: PromptComposer,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(config: AppConfig, composer: PromptComposer, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config,
            composer,
            generator,
        }
    }
}
