use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::domain::errors::{ConnectorError, ConnectorResult};

/// The connector's `config.json` as handed over by the orchestrator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub parameters: Value,
    #[serde(default)]
    pub storage: Storage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Storage {
    #[serde(default)]
    pub input: StorageInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageInput {
    #[serde(default)]
    pub tables: Vec<InputMapping>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputMapping {
    #[serde(default)]
    pub source: Option<String>,
    pub destination: String,
}

impl ConnectorConfig {
    pub fn load(path: &Path) -> ConnectorResult<Self> {
        let raw = fs::read(path).map_err(|err| {
            ConnectorError::configuration(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &[u8]) -> ConnectorResult<Self> {
        serde_json::from_slice(raw)
            .map_err(|err| ConnectorError::configuration(format!("malformed config.json: {err}")))
    }

    pub fn debug(&self) -> bool {
        self.parameters
            .get("debug")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The run reads exactly one table.
    pub fn single_input_table(&self) -> ConnectorResult<&InputMapping> {
        match self.storage.input.tables.as_slice() {
            [table] => Ok(table),
            [] => Err(ConnectorError::input_shape(
                "no table specified on the input mapping, exactly one is required",
            )),
            _ => Err(ConnectorError::input_shape(
                "more than one table specified on the input mapping, exactly one is required",
            )),
        }
    }
}
