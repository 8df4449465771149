//! ==============================================================================
//! error.rs - request failures and the user-facing error classifier
//! ==============================================================================
//!
//! every failed request ends in a single notification. `classify` turns a
//! failure descriptor into that message with a fixed precedence:
//!     1. http status present  -> status table (unknown codes -> "Unknown Error")
//!     2. exception kind       -> parser / timeout / abort message
//!     3. non-empty message    -> used verbatim
//!     4. otherwise            -> "Unknown Error"
//!
//! ==============================================================================

use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "Unknown Error";

const PARSER_ERROR: &str = "Error. Parsing JSON Request failed.";
const TIMEOUT_ERROR: &str = "Request Time out.";
const ABORT_ERROR: &str = "Request was aborted by the server";

// ==============================================================================
// transport errors
// ==============================================================================

/// why a request to the directory api failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status { status: u16 },
    #[error("request timed out")]
    Timeout,
    #[error("request was aborted")]
    Aborted,
    #[error("invalid response body: {0}")]
    Parse(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

// ==============================================================================
// failure descriptor
// ==============================================================================

/// transport-level exception kinds with their own fixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    ParserError,
    Timeout,
    Abort,
}

impl ExceptionKind {
    pub fn message(self) -> &'static str {
        match self {
            ExceptionKind::ParserError => PARSER_ERROR,
            ExceptionKind::Timeout => TIMEOUT_ERROR,
            ExceptionKind::Abort => ABORT_ERROR,
        }
    }
}

/// everything `classify` looks at
///
/// `status` is only set for real http failures; a present status always
/// wins, even when it is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    pub status: Option<u16>,
    pub exception: Option<ExceptionKind>,
    pub message: String,
}

impl Failure {
    pub fn from_message(message: impl Into<String>) -> Self {
        Failure {
            message: message.into(),
            ..Failure::default()
        }
    }
}

impl From<&ApiError> for Failure {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Status { status } => Failure {
                status: Some(*status),
                ..Failure::default()
            },
            ApiError::Timeout => Failure {
                exception: Some(ExceptionKind::Timeout),
                ..Failure::default()
            },
            ApiError::Aborted => Failure {
                exception: Some(ExceptionKind::Abort),
                ..Failure::default()
            },
            ApiError::Parse(detail) => Failure {
                exception: Some(ExceptionKind::ParserError),
                message: detail.clone(),
                ..Failure::default()
            },
            ApiError::Network(_) | ApiError::InvalidUrl(_) => Failure::from_message(err.to_string()),
        }
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::from_message(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::from_message(message)
    }
}

// ==============================================================================
// classifier
// ==============================================================================

/// fixed http status -> message table
pub fn status_message(status: u16) -> Option<&'static str> {
    let message = match status {
        400 => "Server understood the request, but request content was invalid.",
        401 => "Unauthorized access.",
        403 => "Forbidden resource can't be accessed.",
        404 => "Resource not found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable request header",
        412 => "Precondition Failed",
        415 => "Unsupported Media Type",
        500 => "Internal server error",
        501 => "Not Implemented",
        503 => "Service unavailable",
        _ => return None,
    };
    Some(message)
}

/// map a failure to the message shown to the user
pub fn classify(failure: impl Into<Failure>) -> String {
    let failure = failure.into();

    if let Some(status) = failure.status {
        return status_message(status).unwrap_or(UNKNOWN_ERROR).to_string();
    }
    if let Some(kind) = failure.exception {
        return kind.message().to_string();
    }
    if !failure.message.is_empty() {
        return failure.message;
    }
    UNKNOWN_ERROR.to_string()
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [u16; 11] = [400, 401, 403, 404, 405, 406, 412, 415, 500, 501, 503];

    #[test]
    fn test_every_known_status_has_a_message() {
        for status in TABLE {
            let message = classify(&ApiError::Status { status });
            assert_eq!(Some(message.as_str()), status_message(status));
            assert_ne!(message, UNKNOWN_ERROR);
        }
        assert_eq!(classify(&ApiError::Status { status: 404 }), "Resource not found");
    }

    #[test]
    fn test_unknown_status_is_unknown_error() {
        for status in [0, 204, 302, 402, 418, 429, 502, 504] {
            assert_eq!(classify(&ApiError::Status { status }), UNKNOWN_ERROR);
        }
    }

    #[test]
    fn test_status_wins_over_everything() {
        let failure = Failure {
            status: Some(0),
            exception: Some(ExceptionKind::Timeout),
            message: "ignored".to_string(),
        };
        assert_eq!(classify(failure), UNKNOWN_ERROR);
    }

    #[test]
    fn test_exception_kinds_ignore_message() {
        for (kind, expected) in [
            (ExceptionKind::Timeout, "Request Time out."),
            (ExceptionKind::Abort, "Request was aborted by the server"),
            (ExceptionKind::ParserError, "Error. Parsing JSON Request failed."),
        ] {
            let failure = Failure {
                status: None,
                exception: Some(kind),
                message: "something else".to_string(),
            };
            assert_eq!(classify(failure), expected);
        }
    }

    #[test]
    fn test_parse_error_maps_to_parser_message() {
        let err = ApiError::Parse("expected value at line 1".to_string());
        assert_eq!(classify(&err), PARSER_ERROR);
    }

    #[test]
    fn test_plain_message_is_verbatim() {
        assert_eq!(classify("Fill in a Role Title, please"), "Fill in a Role Title, please");
        assert_eq!(classify(""), UNKNOWN_ERROR);
    }

    #[test]
    fn test_network_error_uses_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(classify(&err), "network error: connection refused");
    }
}
