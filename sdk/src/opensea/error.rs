//! Classification of failed OpenSea requests.

use {
    serde::{Deserialize, Serialize},
    std::{error::Error as StdError, fmt},
    thiserror::Error,
};

/// Boxed cause kept on an [`OpenSeaError`] for diagnostic chaining.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias used by the OpenSea client.
pub type Result<T> = std::result::Result<T, OpenSeaError>;

/// The kinds a failed request is sorted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// HTTP 404
    NotFound,
    /// HTTP 429
    RateLimit,
    /// HTTP 400
    InvalidInput,
    /// Any other HTTP status or an unrecognized failure
    ApiError,
    /// Connection refused or host not found
    NetworkError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "NOT_FOUND"),
            ErrorKind::RateLimit => write!(f, "RATE_LIMIT"),
            ErrorKind::InvalidInput => write!(f, "INVALID_INPUT"),
            ErrorKind::ApiError => write!(f, "API_ERROR"),
            ErrorKind::NetworkError => write!(f, "NETWORK_ERROR"),
        }
    }
}

/// Transport-level failure codes that are recognized by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportCode {
    ConnectionRefused,
    HostNotFound,
    /// Any other failure while establishing the connection.
    ConnectFailed,
}

/// What is known about a failed request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Failure<'a> {
    /// The server answered with a non-2xx status.
    Status { status: u16, message: &'a str },
    /// No response was received (or it could not be read).
    Transport {
        code: Option<TransportCode>,
        message: &'a str,
    },
}

impl ErrorKind {
    /// Maps a failure to its kind.
    pub fn classify(failure: &Failure) -> Self {
        match failure {
            Failure::Status { status, .. } => Self::from_status_code(*status),
            Failure::Transport { code: Some(_), .. } => Self::NetworkError,
            Failure::Transport { code: None, .. } => Self::ApiError,
        }
    }

    /// Maps HTTP status code to our error kind
    pub fn from_status_code(status_code: u16) -> Self {
        match status_code {
            400 => Self::InvalidInput,
            404 => Self::NotFound,
            429 => Self::RateLimit,
            _ => Self::ApiError,
        }
    }
}

const NOT_FOUND_MESSAGE: &str = "Collection or asset not found";

/// User-facing message for a failure.
pub fn user_message(failure: &Failure) -> String {
    match failure {
        Failure::Status { status: 404, .. } => NOT_FOUND_MESSAGE.to_string(),
        Failure::Status { status: 429, .. } => {
            "Rate limit exceeded. Please wait and try again".to_string()
        }
        Failure::Status {
            status: 400,
            message,
        } => format!("Invalid request: {message}"),
        Failure::Status { status, message } => format!("API error ({status}): {message}"),
        Failure::Transport { code: Some(_), .. } => {
            "Network connection failed. Check your internet connection".to_string()
        }
        Failure::Transport {
            code: None,
            message,
        } => format!("Unexpected error: {message}"),
    }
}

/// Non-2xx response, kept as the source of a classified [`OpenSeaError`].
#[derive(Debug, Error)]
#[error("HTTP status {status}: {body}")]
pub struct HttpStatusError {
    pub status: u16,
    pub body: String,
}

/// Contract address whose asset listing came back empty, so there is no
/// collection to resolve it to.
#[derive(Debug, Error)]
#[error("no assets found for contract {contract}")]
pub struct EmptyAssetPage {
    pub contract: String,
}

/// A classified OpenSea failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct OpenSeaError {
    kind: ErrorKind,
    message: String,
    status_code: Option<u16>,
    #[source]
    source: Option<BoxError>,
}

impl OpenSeaError {
    /// Classify a failure and attach its original cause.
    pub fn classify(failure: Failure, source: Option<BoxError>) -> Self {
        let status_code = match failure {
            Failure::Status { status, .. } => Some(status),
            Failure::Transport { .. } => None,
        };

        Self {
            kind: ErrorKind::classify(&failure),
            message: user_message(&failure),
            status_code,
            source,
        }
    }

    /// Classify a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: String) -> Self {
        let message = upstream_message(status, &body);

        Self::classify(
            Failure::Status {
                status,
                message: &message,
            },
            Some(Box::new(HttpStatusError { status, body })),
        )
    }

    /// Classify a [`reqwest::Error`] that occurred before a usable response
    /// was available.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::from_response(status.as_u16(), String::new());
        }

        let message = error.to_string();

        Self::classify(
            Failure::Transport {
                code: transport_code(&error),
                message: &message,
            },
            Some(Box::new(error)),
        )
    }

    /// Classify a response body that could not be decoded.
    pub fn from_decode(error: serde_json::Error) -> Self {
        let message = error.to_string();

        Self::classify(
            Failure::Transport {
                code: None,
                message: &message,
            },
            Some(Box::new(error)),
        )
    }

    /// A lookup that succeeded but returned nothing to work with. No HTTP
    /// status is attached since the server did not answer with one.
    pub fn not_found(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: NOT_FOUND_MESSAGE.to_string(),
            status_code: None,
            source: Some(source.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }
}

/// Extract the upstream explanation from an error body. Prefers the JSON
/// `message` field, then the raw body.
fn upstream_message(status: u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(body) {
        if let Some(serde_json::Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }

    let body = body.trim();

    if body.is_empty() {
        format!("Request failed with status code {status}")
    } else {
        body.to_string()
    }
}

/// Recognize refused connections and DNS failures in a reqwest error chain.
fn transport_code(error: &reqwest::Error) -> Option<TransportCode> {
    if !error.is_connect() {
        return None;
    }

    let mut source = error.source();

    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::ConnectionRefused {
                return Some(TransportCode::ConnectionRefused);
            }
        }

        let text = cause.to_string();

        if text.contains("dns error") || text.contains("failed to lookup address") {
            return Some(TransportCode::HostNotFound);
        }

        source = cause.source();
    }

    Some(TransportCode::ConnectFailed)
}
