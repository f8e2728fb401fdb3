use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    InvalidFormat { line: String, fields: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SendError {
    Transport { endpoint: String, message: String },
    Status { status: u16 },
    Decode { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Mismatch {
        key: String,
        expected: String,
        actual: Value,
    },
    MissingField {
        key: String,
    },
}

/// Failure of a single input line. The batch keeps going after any of these.
#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    Parse(ParseError),
    Send(SendError),
    Validation(ValidationError),
}

/// Failures that end a batch run.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchError {
    InputOpen {
        path: String,
        message: String,
    },
    InputRead {
        path: String,
        line_number: usize,
        message: String,
    },
    ClientBuild {
        message: String,
    },
    LogOpen {
        path: String,
        message: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat { line, .. } => write!(f, "Invalid line format: {line}"),
        }
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Transport { endpoint, message } => {
                write!(f, "Request to {endpoint} failed: {message}")
            }
            SendError::Status { status } => {
                write!(f, "Request failed with status code: {status}")
            }
            SendError::Decode { message } => {
                write!(f, "Failed to decode response body: {message}")
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Mismatch { key, .. } => {
                write!(f, "Validation error: Data mismatch for {key}")
            }
            ValidationError::MissingField { key } => {
                write!(f, "Response is missing expected field '{key}'")
            }
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Parse(err) => write!(f, "{err}"),
            LineError::Send(err) => write!(f, "{err}"),
            LineError::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::InputOpen { path, message } => {
                write!(f, "Failed to open input file {path}: {message}")
            }
            BatchError::InputRead {
                path,
                line_number,
                message,
            } => {
                write!(
                    f,
                    "Failed to read input file {path} at line {line_number}: {message}"
                )
            }
            BatchError::ClientBuild { message } => {
                write!(f, "Failed to build HTTP client: {message}")
            }
            BatchError::LogOpen { path, message } => {
                write!(f, "Failed to open log file {path}: {message}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
impl std::error::Error for SendError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for LineError {}
impl std::error::Error for BatchError {}

impl SendError {
    pub fn from_reqwest_error(e: reqwest::Error, endpoint: &str) -> Self {
        if e.is_decode() {
            SendError::Decode {
                message: e.to_string(),
            }
        } else {
            SendError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        }
    }
}

impl ValidationError {
    pub fn key(&self) -> &str {
        match self {
            ValidationError::Mismatch { key, .. } | ValidationError::MissingField { key } => key,
        }
    }
}

impl BatchError {
    pub fn from_io_error(e: std::io::Error, path: &str) -> Self {
        BatchError::InputOpen {
            path: path.to_string(),
            message: e.to_string(),
        }
    }
}

impl From<ParseError> for LineError {
    fn from(err: ParseError) -> Self {
        LineError::Parse(err)
    }
}

impl From<SendError> for LineError {
    fn from(err: SendError) -> Self {
        LineError::Send(err)
    }
}

impl From<ValidationError> for LineError {
    fn from(err: ValidationError) -> Self {
        LineError::Validation(err)
    }
}
