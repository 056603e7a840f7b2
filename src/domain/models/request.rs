use serde::Serialize;

use super::{recipient::ButtonObject, settings::DuplicatesCheck};

/// Fixed provider key telling BulkGate that `sender_id_value` is a sender profile id.
pub const SMS_SENDER_ID_KIND: &str = "gProfile";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestBody {
    pub application_id: String,
    pub application_token: String,
    pub number: Vec<NumberEntry>,
    pub channel: ChannelPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicates_check: Option<DuplicatesCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NumberEntry {
    pub number: String,
    pub text: String,
}

// Field order matters to the provider: viber is attempted before the sms fallback.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ChannelPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viber: Option<ViberChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsChannel>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ViberChannel {
    pub sender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonObject>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SmsChannel {
    pub sender_id: &'static str,
    pub sender_id_value: String,
    pub unicode: bool,
}
