use std::collections::HashMap;

use crate::domain::{
    errors::{ConnectorError, ConnectorResult},
    models::{Batch, RecipientRow},
};

/// Request-level attributes every row of one provider request must share.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchKey {
    pub timestamp: String,
    pub button_caption: Option<String>,
    pub button_url: Option<String>,
}

impl BatchKey {
    pub fn of(row: &RecipientRow) -> Self {
        Self {
            timestamp: row.timestamp.clone(),
            button_caption: row.button_caption.clone(),
            button_url: row.button_url.clone(),
        }
    }
}

/// Partitions rows into batches keyed by [`BatchKey`].
///
/// Batches come out in the order their key was first seen; rows keep their
/// input order inside a batch. Every batch is checked with [`validate`] before
/// it is returned.
pub fn partition(rows: Vec<RecipientRow>) -> ConnectorResult<Vec<Batch>> {
    let mut positions: HashMap<BatchKey, usize> = HashMap::new();
    let mut batches: Vec<Batch> = Vec::new();

    for row in rows {
        let key = BatchKey::of(&row);
        let index = match positions.get(&key) {
            Some(index) => *index,
            None => {
                positions.insert(key.clone(), batches.len());
                batches.push(Batch {
                    timestamp: key.timestamp,
                    button_caption: key.button_caption,
                    button_url: key.button_url,
                    rows: Vec::new(),
                });
                batches.len() - 1
            }
        };
        batches[index].rows.push(row);
    }

    for batch in &batches {
        validate(batch)?;
    }
    Ok(batches)
}

/// Re-derives the per-row request attributes and fails if any row disagrees
/// with the batch it was placed in.
pub fn validate(batch: &Batch) -> ConnectorResult<()> {
    let button = batch.button_object();
    let has_button = batch.has_button();

    for row in &batch.rows {
        if row.timestamp != batch.timestamp {
            return Err(ConnectorError::GroupingInconsistency { field: "timestamp" });
        }
        if row.button_object() != button {
            return Err(ConnectorError::GroupingInconsistency {
                field: "button_object",
            });
        }
        if row.has_button() != has_button {
            return Err(ConnectorError::GroupingInconsistency { field: "has_button" });
        }
    }
    Ok(())
}
