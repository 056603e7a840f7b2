use crate::{
    application::services::batcher,
    domain::{
        errors::ConnectorResult,
        models::{
            Batch, ChannelPayload, Credentials, NumberEntry, RequestBody, SMS_SENDER_ID_KIND,
            Settings, SmsChannel, ViberChannel,
        },
    },
};

/// Builds the provider request for one batch. The batch is re-validated first,
/// so a grouping defect never reaches the provider.
pub fn build_request(
    credentials: &Credentials,
    settings: &Settings,
    batch: &Batch,
) -> ConnectorResult<RequestBody> {
    batcher::validate(batch)?;

    let channels = settings.channel_selection;
    let viber = channels.includes_viber().then(|| ViberChannel {
        sender: settings.viber_sender.clone(),
        button: batch.has_button().then(|| batch.button_object()),
    });
    let sms = channels.includes_sms().then(|| SmsChannel {
        sender_id: SMS_SENDER_ID_KIND,
        sender_id_value: settings.sender_id.clone(),
        unicode: settings.unicode,
    });

    Ok(RequestBody {
        application_id: credentials.application_id.clone(),
        application_token: credentials.application_token.clone(),
        number: batch
            .rows
            .iter()
            .map(|row| NumberEntry {
                number: row.number.clone(),
                text: row.text.clone(),
            })
            .collect(),
        channel: ChannelPayload { viber, sms },
        duplicates_check: settings.duplicates_check,
        schedule: batch.schedule().map(str::to_string),
    })
}
