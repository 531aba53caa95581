use thiserror::Error;

/// # ErrorWithMessage
/// Details of an [OidcClientError]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorWithMessage {
    /// Description of what went wrong
    pub message: String,
    /// Text of the underlying error, if any
    pub source: Option<String>,
}

impl ErrorWithMessage {
    fn new(message: &str, source: Option<String>) -> Self {
        Self {
            message: message.to_string(),
            source,
        }
    }
}

/// # OidcClientError
/// Error that will be returned to the end user of this library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OidcClientError {
    /// A required argument was missing or unusable
    #[error("InvalidArgument: {}", .0.message)]
    InvalidArgument(ErrorWithMessage),
    /// A JSON document did not match the expected structure
    #[error("MalformedDocument: {}", .0.message)]
    MalformedDocument(ErrorWithMessage),
    /// A transport envelope carried an undecodable response
    #[error("MalformedEnvelope: {}", .0.message)]
    MalformedEnvelope(ErrorWithMessage),
}

/// Return type of every fallible operation in this crate
pub type OidcReturnType<T> = Result<T, Box<OidcClientError>>;

impl OidcClientError {
    /// Creates an [OidcClientError::InvalidArgument]
    pub fn new_invalid_argument(message: &str) -> Box<Self> {
        Box::new(Self::InvalidArgument(ErrorWithMessage::new(message, None)))
    }

    /// Creates an [OidcClientError::MalformedDocument]
    pub fn new_malformed_document(message: &str, source: Option<String>) -> Box<Self> {
        Box::new(Self::MalformedDocument(ErrorWithMessage::new(message, source)))
    }

    /// Creates an [OidcClientError::MalformedEnvelope]
    pub fn new_malformed_envelope(message: &str, source: Option<String>) -> Box<Self> {
        Box::new(Self::MalformedEnvelope(ErrorWithMessage::new(message, source)))
    }

    /// Checks if the error is [OidcClientError::InvalidArgument]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Checks if the error is [OidcClientError::MalformedDocument]
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument(_))
    }

    /// Checks if the error is [OidcClientError::MalformedEnvelope]
    pub fn is_malformed_envelope(&self) -> bool {
        matches!(self, Self::MalformedEnvelope(_))
    }

    /// Returns the [ErrorWithMessage] of an [OidcClientError::InvalidArgument].
    /// Panics if the error is of another kind,
    /// check with [OidcClientError::is_invalid_argument] first.
    pub fn invalid_argument(&self) -> &ErrorWithMessage {
        match self {
            Self::InvalidArgument(e) => e,
            _ => panic!("not an InvalidArgument error"),
        }
    }

    /// Returns the [ErrorWithMessage] of an [OidcClientError::MalformedDocument].
    /// Panics if the error is of another kind.
    pub fn malformed_document(&self) -> &ErrorWithMessage {
        match self {
            Self::MalformedDocument(e) => e,
            _ => panic!("not a MalformedDocument error"),
        }
    }

    /// Returns the [ErrorWithMessage] of an [OidcClientError::MalformedEnvelope].
    /// Panics if the error is of another kind.
    pub fn malformed_envelope(&self) -> &ErrorWithMessage {
        match self {
            Self::MalformedEnvelope(e) => e,
            _ => panic!("not a MalformedEnvelope error"),
        }
    }

    /// Message of the error regardless of its kind
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(e) | Self::MalformedDocument(e) | Self::MalformedEnvelope(e) => {
                &e.message
            }
        }
    }
}
