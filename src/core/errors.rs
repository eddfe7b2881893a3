use std::path::PathBuf;

use serde::Serialize;

/// All domain errors for CipherSphere.
///
/// `UnknownMethod` and `InvalidKey` come from the cipher core itself; the
/// remaining variants belong to the layers that feed it (config, request
/// parsing, file input).
#[derive(Debug, thiserror::Error)]
pub enum CipherSphereError {
    #[error(
        "Unknown cipher method: '{method}'\n\n  \
         Supported methods: ATBASH, CAESAR, VIGENERE.\n  \
         Run 'ciphersphere methods' to see what each one expects."
    )]
    UnknownMethod { method: String },

    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Invalid request: {detail}\n\n  \
         Expected a JSON object such as:\n    \
         {{\"text\": \"HELLO\", \"method\": \"CAESAR\", \"key\": 3, \"decrypt\": false}}"
    )]
    InvalidRequest { detail: String },

    #[error("File not found: {path}\n\n  Check that the path is correct and the file exists.")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a failure, reported alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownMethod,
    InvalidKey,
    InvalidInput,
}

impl CipherSphereError {
    /// Shorthand for building an `InvalidKey` error.
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownMethod { .. } => ErrorKind::UnknownMethod,
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::InvalidConfig { .. }
            | Self::InvalidRequest { .. }
            | Self::FileNotFound { .. }
            | Self::Io(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherSphereError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_display() {
        let err = CipherSphereError::invalid_key("Key cannot be empty");
        assert_eq!(err.to_string(), "Invalid key: Key cannot be empty");
    }

    #[test]
    fn unknown_method_mentions_supported_set() {
        let err = CipherSphereError::UnknownMethod {
            method: "ROT13".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'ROT13'"));
        assert!(msg.contains("ATBASH, CAESAR, VIGENERE"));
    }

    #[test]
    fn kinds_are_classified() {
        assert_eq!(
            CipherSphereError::UnknownMethod {
                method: "x".into()
            }
            .kind(),
            ErrorKind::UnknownMethod
        );
        assert_eq!(
            CipherSphereError::invalid_key("bad").kind(),
            ErrorKind::InvalidKey
        );
        assert_eq!(
            CipherSphereError::InvalidConfig {
                detail: "x".into()
            }
            .kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::UnknownMethod).unwrap();
        assert_eq!(json, "\"unknown_method\"");
    }
}
