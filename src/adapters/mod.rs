// Adapters layer: concrete implementations for external systems (narrative services, storage).

pub mod chat_client;
pub mod function_client;
pub mod offline;
pub mod session;
pub mod storage;

use crate::domain::ports::{ConfigProvider, NarrativeService, ServiceMode};
use crate::utils::error::{BaziError, Result};
use std::time::Duration;

/// Pick the narrative backend named by the configuration.
pub fn build_service<C: ConfigProvider>(config: &C) -> Result<Box<dyn NarrativeService>> {
    let timeout = Duration::from_secs(config.timeout_seconds());

    let service: Box<dyn NarrativeService> = match config.service_mode() {
        ServiceMode::Function => Box::new(function_client::FunctionClient::new(
            config.service_endpoint(),
            timeout,
        )?),
        ServiceMode::Chat => {
            let api_key = config.api_key().ok_or_else(|| BaziError::MissingConfigError {
                field: "service.api_key".to_string(),
            })?;
            let settings = chat_client::ChatSettings {
                model: config.model().to_string(),
                temperature: config.temperature(),
                max_tokens: config.max_tokens(),
            };
            Box::new(chat_client::ChatCompletionClient::new(
                config.service_endpoint(),
                api_key,
                settings,
                timeout,
            )?)
        }
        ServiceMode::Offline => Box::new(offline::OfflineService),
    };

    tracing::debug!("Narrative service mode: {:?}", config.service_mode());
    Ok(service)
}
