use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{
    errors::ConnectorResult,
    models::{DecomposedResponse, OutputTable},
    repositories::ResultRepository,
};

struct TableWriters {
    stats: Writer<File>,
    messages: Writer<File>,
    message_parts: Writer<File>,
    invalid_numbers: Writer<File>,
}

impl TableWriters {
    fn flush(&mut self) -> ConnectorResult<()> {
        self.stats.flush()?;
        self.messages.flush()?;
        self.message_parts.flush()?;
        self.invalid_numbers.flush()?;
        Ok(())
    }
}

/// Writes the output tables as CSV files with incremental-load manifests.
///
/// All four files are created with their header row up front, so a run that
/// fails before its first batch still leaves well-formed empty tables.
pub struct CsvResultRepository {
    out_dir: PathBuf,
    writers: Mutex<TableWriters>,
}

impl CsvResultRepository {
    pub fn create(out_dir: impl Into<PathBuf>) -> ConnectorResult<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir)?;

        let writers = TableWriters {
            stats: open_table(&out_dir, OutputTable::Stats)?,
            messages: open_table(&out_dir, OutputTable::Messages)?,
            message_parts: open_table(&out_dir, OutputTable::MessagesParts)?,
            invalid_numbers: open_table(&out_dir, OutputTable::InvalidNumberErrors)?,
        };

        Ok(Self {
            out_dir,
            writers: Mutex::new(writers),
        })
    }

    fn write_manifests(&self) -> ConnectorResult<()> {
        for table in OutputTable::ALL {
            let manifest = json!({
                "incremental": true,
                "primary_key": table.primary_key(),
            });
            let path = self.out_dir.join(format!("{}.manifest", table.file_name()));
            fs::write(&path, serde_json::to_vec_pretty(&manifest)?)?;
        }
        Ok(())
    }
}

fn open_table(out_dir: &Path, table: OutputTable) -> ConnectorResult<Writer<File>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(out_dir.join(table.file_name()))?;
    writer.write_record(table.columns())?;
    Ok(writer)
}

fn write_rows<T: Serialize>(writer: &mut Writer<File>, rows: &[T]) -> ConnectorResult<()> {
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(())
}

#[async_trait]
impl ResultRepository for CsvResultRepository {
    async fn append(&self, decomposed: DecomposedResponse) -> ConnectorResult<()> {
        let mut writers = self.writers.lock().await;
        writers.stats.serialize(&decomposed.stats)?;
        write_rows(&mut writers.messages, &decomposed.messages)?;
        write_rows(&mut writers.message_parts, &decomposed.message_parts)?;
        write_rows(&mut writers.invalid_numbers, &decomposed.invalid_numbers)?;
        // Flushed per batch so a later fatal error cannot lose finished batches.
        writers.flush()
    }

    async fn finalize(&self) -> ConnectorResult<()> {
        self.writers.lock().await.flush()?;
        self.write_manifests()?;
        debug!(out_dir = %self.out_dir.display(), "output tables finalized");
        Ok(())
    }
}
