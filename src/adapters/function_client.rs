use crate::domain::ports::{NarrativeRequest, NarrativeService};
use crate::utils::error::{BaziError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body returned by the hosted analyze function.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// Client for the hosted analyze function: POST `{ baziData, userData }`,
/// receive `{ analysis }`.
pub struct FunctionClient {
    client: Client,
    endpoint: String,
}

impl FunctionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NarrativeService for FunctionClient {
    async fn narrate(&self, request: &NarrativeRequest) -> Result<String> {
        tracing::debug!("Calling analyze function at: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Analyze function response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BaziError::ServiceStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: AnalyzeResponse =
            serde_json::from_str(&body).map_err(|e| BaziError::MalformedResponseError {
                message: e.to_string(),
            })?;

        match parsed.analysis {
            Some(text) => Ok(text),
            None => {
                tracing::info!("Analyze function returned no analysis field");
                Ok(String::new())
            }
        }
    }
}
