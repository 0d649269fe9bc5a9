//! Services module
//!
//! This module contains the completion backends and the prompt catalog

pub mod assistant;
pub mod completion;
pub mod openai;
pub mod prompts;

// Re-export commonly used services
pub use assistant::AssistantRunBackend;
pub use completion::{CompletionBackend, create_backend};
pub use openai::ChatCompletionBackend;
pub use prompts::PromptCatalog;

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::utils::errors::{AIFactoryError, Result};

/// Service factory shared by all handlers
#[derive(Clone)]
pub struct ServiceFactory {
    pub completion: Arc<dyn CompletionBackend>,
    pub prompts: Arc<PromptCatalog>,
    /// Web-app menu opened by the "tools" buttons
    pub tools_url: url::Url,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let completion = create_backend(&settings.completion)?;
        Self::with_backend(settings, completion)
    }

    /// Create a ServiceFactory around an already built completion backend
    pub fn with_backend(settings: &Settings, completion: Arc<dyn CompletionBackend>) -> Result<Self> {
        let tools_url = url::Url::parse(&settings.bot.tools_url).map_err(|e| {
            AIFactoryError::Config(format!("Invalid tools URL '{}': {}", settings.bot.tools_url, e))
        })?;

        Ok(Self {
            completion,
            prompts: Arc::new(PromptCatalog::from_config(&settings.prompts)),
            tools_url,
        })
    }
}

impl std::fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceFactory")
            .field("completion", &self.completion.name())
            .field("tools_url", &self.tools_url.as_str())
            .finish_non_exhaustive()
    }
}
