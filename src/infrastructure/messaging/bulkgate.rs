use std::{fmt::Display, sync::Arc};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    application::services::provider::ProviderClient,
    domain::{
        errors::{ConnectorError, ConnectorResult},
        models::{ProviderResponse, RequestBody},
    },
};

pub struct BulkGateClient {
    http: Client,
}

impl BulkGateClient {
    pub fn new() -> ConnectorResult<Arc<dyn ProviderClient>> {
        Ok(Arc::new(Self {
            http: Client::builder()
                .user_agent("bulkgate-sender")
                .build()?,
        }) as Arc<dyn ProviderClient>)
    }
}

#[async_trait]
impl ProviderClient for BulkGateClient {
    async fn submit(&self, url: &str, body: &RequestBody) -> ConnectorResult<ProviderResponse> {
        debug!(url, numbers = body.number.len(), "posting batch to bulkgate");
        let response = self.http.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err(ConnectorError::Transport {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let payload = response.bytes().await?;
        Ok(serde_json::from_slice(&payload)?)
    }
}

/// Body text for a [`ConnectorError::Transport`]; a failed read is kept in its place.
fn error_body<E: Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|err| {
        debug!(error = %err, "failed to read provider error body");
        format!("<unreadable body: {err}>")
    })
}
