/// Errors from the request pipeline and the output sinks.
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a response body cannot be rendered as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvShape {
    /// The body is an object or a scalar.
    NotAList,
    /// The body is `[]`.
    EmptyList,
    /// The element at this index is not an object.
    NotAnObject { index: usize },
    /// The element at this index has a different key set than the first one.
    KeyMismatch { index: usize },
    /// The first element is `{}`, so there is no header to write.
    NoColumns,
}

impl fmt::Display for CsvShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAList | Self::EmptyList => f.write_str("Cannot dump non-list data to CSV."),
            Self::NotAnObject { index } => {
                write!(f, "Cannot dump to CSV: element {index} is not an object.")
            }
            Self::KeyMismatch { index } => write!(
                f,
                "Cannot dump to CSV: element {index} has different keys than the header row."
            ),
            Self::NoColumns => f.write_str("Cannot dump to CSV: objects have no keys."),
        }
    }
}

/// Every way a single invocation can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum ClientError {
    /// POST issued without `-d/--data`.
    #[error("-d/--data is required for the post method.")]
    MissingPayload,

    /// `-d/--data` is not valid JSON.
    #[error("-d/--data is not valid JSON: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// The server answered with a non-2xx status.
    #[error("{body}")]
    HttpError {
        /// Numeric HTTP status.
        status: u16,
        /// Raw response text.
        body: String,
    },

    /// 2xx response whose body is not JSON.
    #[error("Response body is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// CSV output requested for data that is not a uniform list of objects.
    #[error("{0}")]
    UnsupportedCsvShape(CsvShape),

    /// `-o/--output` has neither a `.json` nor a `.csv` extension.
    #[error("Output file format not supported. Please use .json or .csv.")]
    UnsupportedOutputFormat {
        /// The rejected path.
        path: PathBuf,
    },

    /// No complete HTTP response was read.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        /// Set when the status line arrived but the body could not be read.
        status: Option<u16>,
        #[source]
        source: reqwest::Error,
    },

    /// Writing an output file failed.
    #[error("Cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV writer failed mid-stream.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ClientError {
    /// Machine-readable error code (snake_case) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingPayload => "missing_payload",
            Self::InvalidPayload(_) => "invalid_payload",
            Self::HttpError { .. } => "http_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::UnsupportedCsvShape(_) => "unsupported_csv_shape",
            Self::UnsupportedOutputFormat { .. } => "unsupported_output_format",
            Self::Transport { .. } => "transport_error",
            Self::Io { .. } => "io_error",
            Self::Csv(_) => "csv_error",
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_payload_message() {
        assert_eq!(
            ClientError::MissingPayload.to_string(),
            "-d/--data is required for the post method."
        );
    }

    #[test]
    fn test_non_list_csv_message() {
        let err = ClientError::UnsupportedCsvShape(CsvShape::NotAList);
        assert_eq!(err.to_string(), "Cannot dump non-list data to CSV.");
        assert_eq!(err.code(), "unsupported_csv_shape");
    }

    #[test]
    fn test_http_error_carries_body_and_status() {
        let err = ClientError::HttpError {
            status: 404,
            body: "{}".to_owned(),
        };
        assert_eq!(err.to_string(), "{}");
        assert_eq!(err.status(), Some(404));
    }
}
