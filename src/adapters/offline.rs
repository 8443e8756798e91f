use crate::domain::ports::{NarrativeRequest, NarrativeService};
use crate::utils::error::{BaziError, Result};
use async_trait::async_trait;

/// Service that is never available, so every analysis uses the template bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineService;

#[async_trait]
impl NarrativeService for OfflineService {
    async fn narrate(&self, _request: &NarrativeRequest) -> Result<String> {
        Err(BaziError::ServiceDisabled)
    }
}
