//! Station catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station dataset.
///
/// Any bad record rejects the whole load.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Dataset file could not be read
    #[error("failed to read station dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not a JSON array of objects
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A required field is absent or null
    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A required field has the wrong type or an out-of-range value
    #[error("record {index}: invalid `{field}`: {message}")]
    InvalidField {
        index: usize,
        field: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::MissingField {
            index: 3,
            field: "price_per_gallon",
        };
        assert_eq!(
            err.to_string(),
            "record 3: missing required field `price_per_gallon`"
        );

        let err = CatalogError::InvalidField {
            index: 0,
            field: "latitude",
            message: "expected a number".into(),
        };
        assert_eq!(
            err.to_string(),
            "record 0: invalid `latitude`: expected a number"
        );
    }
}
