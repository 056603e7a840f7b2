use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::{
    application::services::{
        batcher,
        decomposer::decompose,
        provider::{Clock, ProviderClient, format_timestamp},
        request_builder::build_request,
    },
    domain::{
        errors::{ConnectorError, ConnectorResult},
        models::{Credentials, EndpointPolicy, RecipientTable, Settings},
        repositories::ResultRepository,
    },
};

pub struct SendMessagesUseCase {
    provider: Arc<dyn ProviderClient>,
    results: Arc<dyn ResultRepository>,
    clock: Arc<dyn Clock>,
    endpoints: EndpointPolicy,
}

pub struct SendMessagesRequest {
    pub credentials: Credentials,
    pub settings: Settings,
    pub table: RecipientTable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendMessagesReport {
    pub batches: usize,
    pub messages: usize,
    pub message_parts: usize,
    pub invalid_numbers: usize,
}

impl SendMessagesUseCase {
    pub fn new(
        provider: Arc<dyn ProviderClient>,
        results: Arc<dyn ResultRepository>,
        clock: Arc<dyn Clock>,
        endpoints: EndpointPolicy,
    ) -> Self {
        Self {
            provider,
            results,
            clock,
            endpoints,
        }
    }

    /// Sends every batch in order. The output tables are finalized whether or
    /// not the run succeeds; rows from completed batches are never rolled back.
    pub async fn execute(&self, request: SendMessagesRequest) -> ConnectorResult<SendMessagesReport> {
        let outcome = self.send_batches(request).await;
        let finalized = self.results.finalize().await;

        match (outcome, finalized) {
            (Ok(report), Ok(())) => Ok(report),
            (Ok(_), Err(err)) => Err(err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(finalize_err)) => {
                error!(error = %finalize_err, "failed to finalize output tables");
                Err(err)
            }
        }
    }

    async fn send_batches(&self, request: SendMessagesRequest) -> ConnectorResult<SendMessagesReport> {
        let SendMessagesRequest {
            credentials,
            settings,
            table,
        } = request;

        if table.rows.is_empty() {
            return Err(ConnectorError::input_shape("input table is empty"));
        }
        if !table.has_button_columns && settings.channel_selection.includes_viber() {
            warn!("input table has no button_caption/button_url columns, viber buttons are disabled");
        }

        let batches = batcher::partition(table.rows)?;
        let url = self.endpoints.url_for(&settings);
        info!(batches = batches.len(), url, "submitting recipient batches");

        let mut report = SendMessagesReport::default();
        for (index, batch) in batches.iter().enumerate() {
            let body = build_request(&credentials, &settings, batch)?;
            debug!(
                batch = index,
                rows = batch.len(),
                schedule = batch.schedule().unwrap_or("immediate"),
                has_button = batch.has_button(),
                "submitting batch"
            );

            let response = self.provider.submit(url, &body).await?;
            let totals = response.data.total.status;
            info!(
                batch = index,
                sent = totals.sent,
                accepted = totals.accepted,
                scheduled = totals.scheduled,
                error = totals.error,
                blacklisted = totals.blacklisted,
                invalid_number = totals.invalid_number,
                invalid_sender = totals.invalid_sender,
                "provider processed batch"
            );

            let decomposed = decompose(&response, &format_timestamp(self.clock.now()))?;
            report.batches += 1;
            report.messages += decomposed.messages.len();
            report.message_parts += decomposed.message_parts.len();
            report.invalid_numbers += decomposed.invalid_numbers.len();
            self.results.append(decomposed).await?;
        }

        Ok(report)
    }
}
