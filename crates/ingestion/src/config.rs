//! Ingestion configuration.
//!
//! Names the three required columns and the field delimiter.

use field_common::{FieldError, Result};
use serde::{Deserialize, Serialize};

/// How a delimited text source maps onto samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Field delimiter byte (`,`, `;` or tab)
    pub delimiter: u8,
    /// Header name of the X column (matched case-insensitively)
    pub x_column: String,
    /// Header name of the Y column
    pub y_column: String,
    /// Header name of the value column
    pub value_column: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            x_column: "X".to_string(),
            y_column: "Y".to_string(),
            value_column: "Value".to_string(),
        }
    }
}

impl IngestConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("FIELD_CSV_DELIMITER") {
            if let Ok(delimiter) = parse_delimiter(&val) {
                config.delimiter = delimiter;
            }
        }

        if let Ok(val) = std::env::var("FIELD_X_COLUMN") {
            config.x_column = val;
        }

        if let Ok(val) = std::env::var("FIELD_Y_COLUMN") {
            config.y_column = val;
        }

        if let Ok(val) = std::env::var("FIELD_VALUE_COLUMN") {
            config.value_column = val;
        }

        config
    }

    /// Override the delimiter from its textual name.
    pub fn with_delimiter(mut self, name: &str) -> Result<Self> {
        self.delimiter = parse_delimiter(name)?;
        Ok(self)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        parse_delimiter(&(self.delimiter as char).to_string())?;

        let columns = [&self.x_column, &self.y_column, &self.value_column];
        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err(FieldError::invalid_argument("column names must not be empty"));
        }

        for (i, a) in columns.iter().enumerate() {
            for b in &columns[i + 1..] {
                if a.trim().eq_ignore_ascii_case(b.trim()) {
                    return Err(FieldError::invalid_argument(format!(
                        "column '{}' is mapped more than once",
                        a
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Parse a delimiter name: `,`, `;`, or tab (`\t`, `tab`).
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "," | "comma" => Ok(b','),
        ";" | "semicolon" => Ok(b';'),
        "\t" | "\\t" => Ok(b'\t'),
        _ if s.eq_ignore_ascii_case("tab") => Ok(b'\t'),
        _ => Err(FieldError::invalid_argument(format!(
            "unsupported delimiter '{}' (expected ',', ';' or tab)",
            s
        ))),
    }
}
