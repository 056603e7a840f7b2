use serde_json::{Map, Value};

use crate::domain::{
    errors::{ConnectorError, ConnectorResult},
    models::{ChannelSelection, Credentials, DuplicatesCheck, MessageType, Settings},
};

pub const KEY_CREDENTIALS: &str = "credentials";
pub const KEY_APPLICATION_ID: &str = "#application_id";
pub const KEY_APPLICATION_TOKEN: &str = "#application_token";

pub const KEY_SETTINGS: &str = "settings";
pub const KEY_SENDER_ID: &str = "sender_id";
pub const KEY_MESSAGE_TYPE: &str = "message_type";
pub const KEY_CHANNEL: &str = "channel";
pub const KEY_LEGACY_VIBER: &str = "viber";
pub const KEY_VIBER_SENDER: &str = "viber_sender";
pub const KEY_SMS_UNICODE: &str = "sms_unicode";
pub const KEY_DUPLICATES_CHECK: &str = "duplicates_check";

/// Turns the loosely typed `parameters` object into validated run records.
///
/// This is the only place raw configuration values are inspected; everything
/// downstream works with [`Credentials`] and [`Settings`].
pub fn resolve(parameters: &Value) -> ConnectorResult<(Credentials, Settings)> {
    let credentials = resolve_credentials(parameters)?;
    let settings = resolve_settings(parameters)?;
    Ok((credentials, settings))
}

pub fn resolve_credentials(parameters: &Value) -> ConnectorResult<Credentials> {
    let section = section(parameters, KEY_CREDENTIALS)?;
    Ok(Credentials {
        application_id: required_string(section, KEY_APPLICATION_ID)?,
        application_token: required_string(section, KEY_APPLICATION_TOKEN)?,
    })
}

pub fn resolve_settings(parameters: &Value) -> ConnectorResult<Settings> {
    let section = section(parameters, KEY_SETTINGS)?;

    let sender_id = required_string(section, KEY_SENDER_ID)?;
    let message_type = MessageType::parse(&required_string(section, KEY_MESSAGE_TYPE)?)
        .ok_or_else(|| invalid_value(KEY_MESSAGE_TYPE))?;
    let channel_selection = channel_selection(section)?;

    let viber_sender = optional_string(section, KEY_VIBER_SENDER)?.unwrap_or_default();
    if channel_selection.includes_viber() && viber_sender.trim().is_empty() {
        return Err(ConnectorError::configuration(format!(
            "{KEY_VIBER_SENDER} required"
        )));
    }

    let unicode = match section.get(KEY_SMS_UNICODE) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(invalid_value(KEY_SMS_UNICODE)),
    };

    let duplicates_check = match optional_string(section, KEY_DUPLICATES_CHECK)? {
        Some(value) if !value.is_empty() => Some(
            DuplicatesCheck::parse(&value).ok_or_else(|| invalid_value(KEY_DUPLICATES_CHECK))?,
        ),
        _ => None,
    };

    Ok(Settings {
        sender_id,
        message_type,
        channel_selection,
        viber_sender,
        unicode,
        duplicates_check,
    })
}

fn channel_selection(section: &Map<String, Value>) -> ConnectorResult<ChannelSelection> {
    if let Some(value) = section.get(KEY_CHANNEL) {
        return value
            .as_str()
            .and_then(ChannelSelection::parse)
            .ok_or_else(|| invalid_value(KEY_CHANNEL));
    }
    // Older configurations only carried a viber on/off switch; sms was always on.
    match section.get(KEY_LEGACY_VIBER) {
        Some(Value::Bool(true)) => Ok(ChannelSelection::ViberSms),
        Some(Value::Bool(false)) => Ok(ChannelSelection::Sms),
        Some(_) => Err(invalid_value(KEY_LEGACY_VIBER)),
        None => Err(missing_field(KEY_CHANNEL)),
    }
}

fn section<'a>(parameters: &'a Value, key: &str) -> ConnectorResult<&'a Map<String, Value>> {
    match parameters.get(key).and_then(Value::as_object) {
        Some(map) if !map.is_empty() => Ok(map),
        _ => Err(ConnectorError::configuration(format!("{key} missing"))),
    }
}

fn required_string(section: &Map<String, Value>, key: &str) -> ConnectorResult<String> {
    optional_string(section, key)?.ok_or_else(|| missing_field(key))
}

fn optional_string(section: &Map<String, Value>, key: &str) -> ConnectorResult<Option<String>> {
    match section.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(_) => Err(invalid_value(key)),
    }
}

fn missing_field(key: &str) -> ConnectorError {
    ConnectorError::configuration(format!("missing field {key}"))
}

fn invalid_value(key: &str) -> ConnectorError {
    ConnectorError::configuration(format!("invalid {key} value"))
}
