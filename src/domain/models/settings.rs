use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub application_id: String,
    pub application_token: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MessageType {
    Promotional,
    Transactional,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Promotional => "Promotional",
            MessageType::Transactional => "Transactional",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Promotional" => Some(MessageType::Promotional),
            "Transactional" => Some(MessageType::Transactional),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChannelSelection {
    Sms,
    Viber,
    ViberSms,
}

impl ChannelSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelSelection::Sms => "sms",
            ChannelSelection::Viber => "viber",
            ChannelSelection::ViberSms => "viber_sms",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sms" => Some(ChannelSelection::Sms),
            "viber" => Some(ChannelSelection::Viber),
            "viber_sms" => Some(ChannelSelection::ViberSms),
            _ => None,
        }
    }

    pub fn includes_viber(&self) -> bool {
        matches!(self, ChannelSelection::Viber | ChannelSelection::ViberSms)
    }

    pub fn includes_sms(&self) -> bool {
        matches!(self, ChannelSelection::Sms | ChannelSelection::ViberSms)
    }
}

/// Provider-side filter against re-sending to recipients of earlier sends.
///
/// `"null"` is a literal value the provider accepts; it is forwarded as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DuplicatesCheck {
    #[serde(rename = "none")]
    Disabled,
    #[serde(rename = "same_text")]
    SameText,
    #[serde(rename = "same_number")]
    SameNumber,
    #[serde(rename = "null")]
    LiteralNull,
}

impl DuplicatesCheck {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(DuplicatesCheck::Disabled),
            "same_text" => Some(DuplicatesCheck::SameText),
            "same_number" => Some(DuplicatesCheck::SameNumber),
            "null" => Some(DuplicatesCheck::LiteralNull),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sender_id: String,
    pub message_type: MessageType,
    pub channel_selection: ChannelSelection,
    pub viber_sender: String,
    pub unicode: bool,
    pub duplicates_check: Option<DuplicatesCheck>,
}
