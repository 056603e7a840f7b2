use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const STATUS_INVALID_NUMBER: &str = "invalid_number";
pub const STATUS_INVALID_SENDER: &str = "invalid_sender";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProviderResponse {
    pub data: ResponseData,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResponseData {
    pub total: ResponseTotal,
    #[serde(default)]
    pub response: Vec<ResponseItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResponseTotal {
    pub status: StatusTotals,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatusTotals {
    pub sent: u64,
    pub accepted: u64,
    pub scheduled: u64,
    pub error: u64,
    pub blacklisted: u64,
    pub invalid_number: u64,
    pub invalid_sender: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResponseItem {
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_id: Option<String>,
    pub status: String,
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub part_id: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    InvalidNumber,
    InvalidSender,
    Accepted,
}

impl ResponseItem {
    pub fn outcome(&self) -> ItemOutcome {
        match self.status.as_str() {
            STATUS_INVALID_NUMBER => ItemOutcome::InvalidNumber,
            STATUS_INVALID_SENDER => ItemOutcome::InvalidSender,
            _ => ItemOutcome::Accepted,
        }
    }
}

// BulkGate echoes numbers back as JSON numbers or strings depending on input.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
