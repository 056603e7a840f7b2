use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    errors::ConnectorResult,
    models::{ProviderResponse, RequestBody},
};

/// One synchronous exchange with the messaging provider.
///
/// Implementations must turn a non-success status into
/// [`ConnectorError::Transport`](crate::domain::errors::ConnectorError::Transport)
/// and must not retry.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn submit(&self, url: &str, body: &RequestBody) -> ConnectorResult<ProviderResponse>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl SystemClock {
    pub fn shared() -> Arc<dyn Clock> {
        Arc::new(SystemClock) as Arc<dyn Clock>
    }
}

/// Format of the processing time written to the output tables.
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(OUTPUT_TIMESTAMP_FORMAT).to_string()
}
