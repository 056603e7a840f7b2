use std::sync::Arc;

use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::{
    application::{
        services::{provider::SystemClock, settings_resolver},
        usecases::send_messages::{SendMessagesReport, SendMessagesRequest, SendMessagesUseCase},
    },
    config::Config,
    domain::errors::ConnectorResult,
    infrastructure::{
        configuration::ConnectorConfig,
        messaging::bulkgate::BulkGateClient,
        repositories::csv_files::CsvResultRepository,
        tables::input::load_recipient_table,
    },
};

/// One connector run against the data directory described by `config`.
///
/// Configuration and the input table are fully validated before the first
/// request leaves the process.
pub async fn run(config: &Config, connector: ConnectorConfig) -> ConnectorResult<SendMessagesReport> {
    let run_id = Uuid::new_v4();

    async move {
        let (credentials, settings) = settings_resolver::resolve(&connector.parameters)?;
        info!(
            message_type = settings.message_type.as_str(),
            channel = settings.channel_selection.as_str(),
            "configuration resolved"
        );

        let mapping = connector.single_input_table()?;
        let table = load_recipient_table(&config.input_tables_dir().join(&mapping.destination))?;

        let results = Arc::new(CsvResultRepository::create(config.output_tables_dir())?);
        let use_case = SendMessagesUseCase::new(
            BulkGateClient::new()?,
            results,
            SystemClock::shared(),
            config.endpoints.clone(),
        );

        let report = use_case
            .execute(SendMessagesRequest {
                credentials,
                settings,
                table,
            })
            .await?;
        info!(
            batches = report.batches,
            messages = report.messages,
            message_parts = report.message_parts,
            invalid_numbers = report.invalid_numbers,
            "run finished"
        );
        Ok(report)
    }
    .instrument(info_span!("run", %run_id))
    .await
}
