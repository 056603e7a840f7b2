use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Input table error: {0}")]
    InputShape(String),
    #[error("Batch rows disagree on {field}")]
    GroupingInconsistency { field: &'static str },
    #[error("Provider request failed with {status} {reason}: {body}")]
    Transport {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("Provider rejected the run: {0}")]
    FatalProvider(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConnectorError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ConnectorError::Configuration(message.into())
    }

    pub fn input_shape(message: impl Into<String>) -> Self {
        ConnectorError::InputShape(message.into())
    }

    /// Errors caused by what the user supplied (config, table, provider account)
    /// rather than by a defect in the connector.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConnectorError::Configuration(_)
                | ConnectorError::InputShape(_)
                | ConnectorError::Transport { .. }
                | ConnectorError::FatalProvider(_)
        )
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;
