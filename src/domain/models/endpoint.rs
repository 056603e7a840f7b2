use super::settings::{MessageType, Settings};

pub const PROMOTIONAL_URL: &str = "https://portal.bulkgate.com/api/2.0/advanced/promotional";
pub const TRANSACTIONAL_URL: &str = "https://portal.bulkgate.com/api/2.0/advanced/transactional";

/// How the provider URL is chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointPolicy {
    ByMessageType {
        promotional: String,
        transactional: String,
    },
    Fixed(String),
}

impl Default for EndpointPolicy {
    fn default() -> Self {
        EndpointPolicy::ByMessageType {
            promotional: PROMOTIONAL_URL.to_string(),
            transactional: TRANSACTIONAL_URL.to_string(),
        }
    }
}

impl EndpointPolicy {
    pub fn url_for(&self, settings: &Settings) -> &str {
        match self {
            EndpointPolicy::ByMessageType {
                promotional,
                transactional,
            } => match settings.message_type {
                MessageType::Promotional => promotional,
                MessageType::Transactional => transactional,
            },
            EndpointPolicy::Fixed(url) => url,
        }
    }
}
