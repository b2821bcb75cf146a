use thiserror::Error;

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, LookupFailure>;

/// Message shown when neither geolocation service could answer
pub const UNRESOLVABLE_MESSAGE: &str =
    "Unable to retrieve IP information. Please check the IP address and try again.";

/// Errors that can occur while detecting or resolving an address.
///
/// Every `Display` string is meant to be shown to the user as-is.
#[derive(Error, Debug)]
pub enum LookupFailure {
    /// The input is not an address we can look up
    #[error("{0}")]
    Validation(String),

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The service answered but reported a failure
    #[error("{message}")]
    Service {
        /// Message from the service, or a description of the bad response
        message: String,
        /// HTTP status code, when the failure came from a non-success status
        status: Option<u16>,
    },

    /// Both the primary and the fallback service failed
    #[error("{}", UNRESOLVABLE_MESSAGE)]
    AllSourcesExhausted {
        /// Why the primary service failed
        primary: Box<LookupFailure>,
        /// Why the fallback service failed
        fallback: Box<LookupFailure>,
    },

    /// An endpoint or the HTTP client could not be set up
    #[error("configuration error: {0}")]
    Config(String),
}

/// Discriminant of a [`LookupFailure`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// See [`LookupFailure::Validation`]
    Validation,
    /// See [`LookupFailure::Network`]
    Network,
    /// See [`LookupFailure::Service`]
    Service,
    /// See [`LookupFailure::AllSourcesExhausted`]
    AllSourcesExhausted,
    /// See [`LookupFailure::Config`]
    Config,
}

impl LookupFailure {
    /// Build a service failure without an HTTP status
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
            status: None,
        }
    }

    /// Build a service failure for a non-success HTTP status
    pub fn http_status(status: u16) -> Self {
        Self::Service {
            message: format!("service responded with HTTP {status}"),
            status: Some(status),
        }
    }

    /// Returns the kind of this failure
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::Network(_) => FailureKind::Network,
            Self::Service { .. } => FailureKind::Service,
            Self::AllSourcesExhausted { .. } => FailureKind::AllSourcesExhausted,
            Self::Config(_) => FailureKind::Config,
        }
    }

    /// Returns true if a service was reached and the lookup still failed.
    ///
    /// Exhausting both sources counts as a service failure: it is what the
    /// user sees as "the service could not answer".
    #[must_use]
    pub const fn is_service_failure(&self) -> bool {
        matches!(self, Self::Service { .. } | Self::AllSourcesExhausted { .. })
    }

    /// Returns true if the input was rejected before any request was made
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the HTTP status code carried by this failure, if any.
    ///
    /// For exhausted lookups this is the fallback's status.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => *status,
            Self::AllSourcesExhausted { fallback, .. } => fallback.status_code(),
            _ => None,
        }
    }

    /// The message to display to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message_is_fixed() {
        let err = LookupFailure::AllSourcesExhausted {
            primary: Box::new(LookupFailure::Network("connection refused".into())),
            fallback: Box::new(LookupFailure::service("Invalid IP Address")),
        };
        assert_eq!(err.user_message(), UNRESOLVABLE_MESSAGE);
        assert!(err.is_service_failure());
        assert_eq!(err.kind(), FailureKind::AllSourcesExhausted);
    }

    #[test]
    fn test_status_code() {
        assert_eq!(LookupFailure::http_status(503).status_code(), Some(503));
        assert_eq!(LookupFailure::service("invalid query").status_code(), None);
        assert_eq!(LookupFailure::Network("down".into()).status_code(), None);

        let err = LookupFailure::AllSourcesExhausted {
            primary: Box::new(LookupFailure::http_status(500)),
            fallback: Box::new(LookupFailure::http_status(429)),
        };
        assert_eq!(err.status_code(), Some(429));
    }

    #[test]
    fn test_messages_are_user_facing() {
        let err = LookupFailure::Validation("Please enter an IP address".into());
        assert_eq!(err.to_string(), "Please enter an IP address");
        assert!(err.is_validation());
        assert!(!err.is_service_failure());

        let err = LookupFailure::service("private range");
        assert_eq!(err.to_string(), "private range");
    }
}
