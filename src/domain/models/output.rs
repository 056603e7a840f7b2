use serde::{Deserialize, Serialize};

use super::response::StatusTotals;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsRow {
    pub timestamp: String,
    pub sent: u64,
    pub accepted: u64,
    pub scheduled: u64,
    pub error: u64,
    pub blacklisted: u64,
    pub invalid_number: u64,
    pub invalid_sender: u64,
}

impl StatsRow {
    pub fn new(totals: StatusTotals, timestamp: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            sent: totals.sent,
            accepted: totals.accepted,
            scheduled: totals.scheduled,
            error: totals.error,
            blacklisted: totals.blacklisted,
            invalid_number: totals.invalid_number,
            invalid_sender: totals.invalid_sender,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRow {
    pub message_id: String,
    pub status: String,
    pub number: String,
    pub channel: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagePartRow {
    pub part_id: String,
    pub message_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvalidNumberErrorRow {
    pub number: String,
    pub status: String,
    pub timestamp: String,
    /// The provider's item as received, JSON encoded.
    pub response: String,
}

/// Everything one provider response contributes to the output tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedResponse {
    pub stats: StatsRow,
    pub messages: Vec<MessageRow>,
    pub message_parts: Vec<MessagePartRow>,
    pub invalid_numbers: Vec<InvalidNumberErrorRow>,
}

/// Output table names and primary keys as the storage layer expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTable {
    Stats,
    Messages,
    MessagesParts,
    InvalidNumberErrors,
}

impl OutputTable {
    pub const ALL: [OutputTable; 4] = [
        OutputTable::Stats,
        OutputTable::Messages,
        OutputTable::MessagesParts,
        OutputTable::InvalidNumberErrors,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            OutputTable::Stats => "stats.csv",
            OutputTable::Messages => "messages.csv",
            OutputTable::MessagesParts => "messages_parts.csv",
            OutputTable::InvalidNumberErrors => "invalid_number_errors.csv",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            OutputTable::Stats => &[
                "timestamp",
                "sent",
                "accepted",
                "scheduled",
                "error",
                "blacklisted",
                "invalid_number",
                "invalid_sender",
            ],
            OutputTable::Messages => &["message_id", "status", "number", "channel", "timestamp"],
            OutputTable::MessagesParts => &["part_id", "message_id"],
            OutputTable::InvalidNumberErrors => &["number", "status", "timestamp", "response"],
        }
    }

    pub fn primary_key(&self) -> &'static [&'static str] {
        match self {
            OutputTable::Stats => &["timestamp"],
            OutputTable::Messages => &["message_id"],
            OutputTable::MessagesParts => &["part_id"],
            OutputTable::InvalidNumberErrors => &["number", "timestamp"],
        }
    }
}
