use async_trait::async_trait;

use crate::domain::{errors::ConnectorResult, models::DecomposedResponse};

/// Append-only sink for the four output tables of a run.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn append(&self, decomposed: DecomposedResponse) -> ConnectorResult<()>;

    /// Makes everything appended so far durable. Called once per run, also when
    /// the run fails, so completed batches can be inspected.
    async fn finalize(&self) -> ConnectorResult<()>;
}
