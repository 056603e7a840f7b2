use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::domain::{
    errors::{ConnectorError, ConnectorResult},
    models::{RecipientRow, RecipientTable},
};

pub const COLUMN_NUMBER: &str = "number";
pub const COLUMN_TEXT: &str = "text";
pub const COLUMN_TIMESTAMP: &str = "timestamp";
pub const COLUMN_BUTTON_CAPTION: &str = "button_caption";
pub const COLUMN_BUTTON_URL: &str = "button_url";

struct Columns {
    number: usize,
    text: usize,
    timestamp: usize,
    button_caption: Option<usize>,
    button_url: Option<usize>,
    width: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> ConnectorResult<Self> {
        let find = |name: &str| headers.iter().position(|header| header == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                ConnectorError::input_shape(format!("input table is missing column {name}"))
            })
        };

        Ok(Self {
            number: require(COLUMN_NUMBER)?,
            text: require(COLUMN_TEXT)?,
            timestamp: require(COLUMN_TIMESTAMP)?,
            button_caption: find(COLUMN_BUTTON_CAPTION),
            button_url: find(COLUMN_BUTTON_URL),
            width: headers.len(),
        })
    }

    /// `line` is the 1-based data row, used in error messages.
    fn row(&self, line: usize, record: &StringRecord) -> ConnectorResult<RecipientRow> {
        if record.len() != self.width {
            return Err(ConnectorError::input_shape(format!(
                "row {line} has {} fields, expected {}",
                record.len(),
                self.width
            )));
        }

        let cell = |index: usize| record.get(index).unwrap_or_default().to_string();
        let required = |index: usize, name: &str| {
            let value = cell(index);
            if value.is_empty() {
                return Err(ConnectorError::input_shape(format!(
                    "row {line} has an empty {name}"
                )));
            }
            Ok(value)
        };
        // An empty button cell means "no button", the same as a missing column.
        let optional = |index: Option<usize>| {
            index
                .and_then(|index| record.get(index))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Ok(RecipientRow {
            number: required(self.number, COLUMN_NUMBER)?,
            text: cell(self.text),
            timestamp: required(self.timestamp, COLUMN_TIMESTAMP)?,
            button_caption: optional(self.button_caption),
            button_url: optional(self.button_url),
        })
    }
}

/// Reads the recipient table. Every cell is kept as a string.
pub fn load_recipient_table(path: &Path) -> ConnectorResult<RecipientTable> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(table = %name, "processing input table");

    // Ragged rows are reported by `Columns::row` with their position.
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = Columns::locate(reader.headers()?)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        rows.push(columns.row(index + 1, &record?)?);
    }
    if rows.is_empty() {
        return Err(ConnectorError::input_shape(format!(
            "input table {name} is empty"
        )));
    }

    Ok(RecipientTable {
        rows,
        has_button_columns: columns.button_caption.is_some() || columns.button_url.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_table(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipients.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_rows_as_strings_and_normalizes_empty_buttons() {
        let (_dir, path) = write_table(
            "number,text,timestamp,button_caption,button_url\n\
             00420777,\"Hi, there\",0,Open,https://shop.example\n\
             420888,Bye,1793523600,,\n",
        );

        let table = load_recipient_table(&path).unwrap();

        assert!(table.has_button_columns);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].number, "00420777");
        assert_eq!(table.rows[0].text, "Hi, there");
        assert!(table.rows[0].has_button());
        assert_eq!(table.rows[1].timestamp, "1793523600");
        assert_eq!(table.rows[1].button_caption, None);
        assert_eq!(table.rows[1].button_url, None);
    }

    #[test]
    fn missing_button_columns_are_reported() {
        let (_dir, path) = write_table("timestamp,text,number\n0,a,1\n");

        let table = load_recipient_table(&path).unwrap();

        assert!(!table.has_button_columns);
        assert_eq!(table.rows[0].number, "1");
        assert_eq!(table.rows[0].text, "a");
    }

    #[test]
    fn header_only_table_is_rejected() {
        let (_dir, path) = write_table("number,text,timestamp\n");

        let err = load_recipient_table(&path).unwrap_err();
        assert!(matches!(err, ConnectorError::InputShape(ref m) if m == "input table recipients.csv is empty"));
    }

    #[test]
    fn required_column_is_named() {
        let (_dir, path) = write_table("number,text\n1,a\n");

        let err = load_recipient_table(&path).unwrap_err();
        assert!(matches!(err, ConnectorError::InputShape(ref m) if m.ends_with("column timestamp")));
    }

    #[test]
    fn short_row_is_rejected_with_its_position() {
        let (_dir, path) = write_table("number,text,timestamp\n1,a,0\n2,b\n");

        let err = load_recipient_table(&path).unwrap_err();
        assert!(
            matches!(err, ConnectorError::InputShape(ref m) if m == "row 2 has 2 fields, expected 3")
        );
    }

    #[test]
    fn empty_timestamp_is_rejected() {
        let (_dir, path) = write_table("number,text,timestamp\n1,a,\n");

        let err = load_recipient_table(&path).unwrap_err();
        assert!(
            matches!(err, ConnectorError::InputShape(ref m) if m == "row 1 has an empty timestamp")
        );
    }

    #[test]
    fn empty_number_is_rejected() {
        let (_dir, path) = write_table("number,text,timestamp\n1,a,0\n,b,0\n");

        let err = load_recipient_table(&path).unwrap_err();
        assert!(matches!(err, ConnectorError::InputShape(ref m) if m == "row 2 has an empty number"));
    }
}
