//! Error types for rconsole

use thiserror::Error;

/// Main error type for rconsole
///
/// Variants never carry the RCON password; error text is safe to print
/// back to the operator verbatim.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Connecting to the server failed
    #[error("connection error: {0}")]
    Connection(String),

    /// The server rejected the RCON password
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Connect or command exchange timed out
    #[error("timed out after {0}s")]
    Timeout(u64),

    /// Protocol-level failure reported by the RCON client
    #[error("protocol error: {0}")]
    Protocol(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ConsoleError
pub type Result<T> = std::result::Result<T, ConsoleError>;

impl ConsoleError {
    /// Create a connection error from a string
    pub fn connection(msg: impl Into<String>) -> Self {
        ConsoleError::Connection(msg.into())
    }

    /// Create an authentication error from a string
    pub fn auth(msg: impl Into<String>) -> Self {
        ConsoleError::Authentication(msg.into())
    }

    /// Create a protocol error from a string
    pub fn protocol(msg: impl Into<String>) -> Self {
        ConsoleError::Protocol(msg.into())
    }
}

impl From<rcon::Error> for ConsoleError {
    fn from(err: rcon::Error) -> Self {
        match err {
            rcon::Error::Auth => ConsoleError::auth("password rejected by server"),
            rcon::Error::Io(e) => ConsoleError::connection(e.to_string()),
            other => ConsoleError::protocol(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsoleError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "connection error: connection refused");

        let err = ConsoleError::Timeout(3);
        assert_eq!(err.to_string(), "timed out after 3s");
    }

    #[test]
    fn test_auth_mapping() {
        let err = ConsoleError::from(rcon::Error::Auth);
        assert!(matches!(err, ConsoleError::Authentication(_)));
    }

    #[test]
    fn test_io_maps_to_connection() {
        // TCP-level failures (refused connects, resets) surface from the
        // rcon client as Io and belong to the connection kind
        let refused =
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = ConsoleError::from(rcon::Error::Io(refused));
        assert!(matches!(err, ConsoleError::Connection(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
