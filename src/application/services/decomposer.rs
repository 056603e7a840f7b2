use tracing::warn;

use crate::domain::{
    errors::{ConnectorError, ConnectorResult},
    models::{
        DecomposedResponse, InvalidNumberErrorRow, ItemOutcome, MessagePartRow, MessageRow,
        ProviderResponse, StatsRow,
    },
};

/// Flattens one provider response into rows for the four output tables.
///
/// `timestamp` is the wall-clock time of processing and keys the stats row.
/// An `invalid_sender` item aborts with [`ConnectorError::FatalProvider`] and
/// nothing from this response is kept.
pub fn decompose(
    response: &ProviderResponse,
    timestamp: &str,
) -> ConnectorResult<DecomposedResponse> {
    let mut decomposed = DecomposedResponse {
        stats: StatsRow::new(response.data.total.status, timestamp),
        messages: Vec::new(),
        message_parts: Vec::new(),
        invalid_numbers: Vec::new(),
    };

    for item in &response.data.response {
        match item.outcome() {
            ItemOutcome::InvalidSender => {
                return Err(ConnectorError::FatalProvider("invalid sender".to_string()));
            }
            ItemOutcome::InvalidNumber => {
                decomposed.invalid_numbers.push(InvalidNumberErrorRow {
                    number: item.number.clone().unwrap_or_default(),
                    status: item.status.clone(),
                    timestamp: timestamp.to_string(),
                    response: serde_json::to_string(item)?,
                });
            }
            ItemOutcome::Accepted => {
                let message_id = item.message_id.clone().unwrap_or_default();
                if message_id.is_empty() {
                    warn!(
                        status = %item.status,
                        number = item.number.as_deref().unwrap_or_default(),
                        "provider item has no message_id, its rows share an empty key"
                    );
                }
                decomposed
                    .message_parts
                    .extend(item.part_id.iter().map(|part_id| MessagePartRow {
                        part_id: part_id.clone(),
                        message_id: message_id.clone(),
                    }));
                decomposed.messages.push(MessageRow {
                    message_id,
                    status: item.status.clone(),
                    number: item.number.clone().unwrap_or_default(),
                    channel: item.channel.clone().unwrap_or_default(),
                    timestamp: timestamp.to_string(),
                });
            }
        }
    }

    Ok(decomposed)
}
