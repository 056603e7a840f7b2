use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    errors::ConnectorResult,
    models::{DecomposedResponse, InvalidNumberErrorRow, MessagePartRow, MessageRow, StatsRow},
    repositories::ResultRepository,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTables {
    pub stats: Vec<StatsRow>,
    pub messages: Vec<MessageRow>,
    pub message_parts: Vec<MessagePartRow>,
    pub invalid_numbers: Vec<InvalidNumberErrorRow>,
    pub finalized: bool,
}

#[derive(Default)]
pub struct InMemoryResultRepository {
    tables: Arc<RwLock<ResultTables>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> ResultTables {
        self.tables.read().await.clone()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn append(&self, decomposed: DecomposedResponse) -> ConnectorResult<()> {
        let mut tables = self.tables.write().await;
        tables.stats.push(decomposed.stats);
        tables.messages.extend(decomposed.messages);
        tables.message_parts.extend(decomposed.message_parts);
        tables.invalid_numbers.extend(decomposed.invalid_numbers);
        Ok(())
    }

    async fn finalize(&self) -> ConnectorResult<()> {
        self.tables.write().await.finalized = true;
        Ok(())
    }
}
