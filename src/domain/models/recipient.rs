use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipientRow {
    pub number: String,
    pub text: String,
    /// `"0"` sends immediately, anything else is handed to the provider as the schedule.
    pub timestamp: String,
    pub button_caption: Option<String>,
    pub button_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonObject {
    pub caption: Option<String>,
    pub url: Option<String>,
}

impl RecipientRow {
    pub fn button_object(&self) -> ButtonObject {
        ButtonObject {
            caption: self.button_caption.clone(),
            url: self.button_url.clone(),
        }
    }

    pub fn has_button(&self) -> bool {
        self.button_caption.is_some() && self.button_url.is_some()
    }
}

pub const IMMEDIATE_SCHEDULE: &str = "0";

/// Rows that can share one provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub timestamp: String,
    pub button_caption: Option<String>,
    pub button_url: Option<String>,
    pub rows: Vec<RecipientRow>,
}

impl Batch {
    pub fn button_object(&self) -> ButtonObject {
        ButtonObject {
            caption: self.button_caption.clone(),
            url: self.button_url.clone(),
        }
    }

    pub fn has_button(&self) -> bool {
        self.button_caption.is_some() && self.button_url.is_some()
    }

    pub fn schedule(&self) -> Option<&str> {
        (self.timestamp != IMMEDIATE_SCHEDULE).then_some(self.timestamp.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The single input table of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientTable {
    pub rows: Vec<RecipientRow>,
    /// False when the source had neither `button_caption` nor `button_url`.
    pub has_button_columns: bool,
}
