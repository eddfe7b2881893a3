use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::core::errors::{CipherSphereError, ErrorKind, Result};
use crate::core::models::cipher_key::CipherKey;
use crate::core::models::cipher_method::{CipherMethod, Direction};

/// One transformation to perform. Built per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    pub method: CipherMethod,
    pub direction: Direction,
    pub key: CipherKey,
    pub text: String,
}

/// JSON request body as sent by external callers:
/// `{"text": "...", "method": "CAESAR", "key": 3, "decrypt": false}`.
///
/// `method` and `key` stay loosely typed here so that a bad method name
/// surfaces as `UnknownMethod` and a bad key as `InvalidKey`, rather than
/// as a generic parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRequest {
    #[serde(default)]
    pub text: String,
    pub method: String,
    #[serde(default)]
    pub key: Value,
    #[serde(default)]
    pub decrypt: bool,
}

impl WireRequest {
    /// Parse a JSON document into a wire request.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| CipherSphereError::InvalidRequest {
            detail: e.to_string(),
        })
    }

    /// Resolve the loosely-typed fields into a `CipherRequest`.
    pub fn into_request(self) -> Result<CipherRequest> {
        let method: CipherMethod = self.method.parse()?;
        let key = CipherKey::from_json(&self.key)?;
        Ok(CipherRequest {
            method,
            direction: Direction::from_decrypt_flag(self.decrypt),
            key,
            text: self.text,
        })
    }
}

/// Result of a single call: the whole transformed text, or a failure.
/// There are no partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherOutcome {
    Success { text: String },
    Failure { kind: ErrorKind, message: String },
}

impl CipherOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CipherOutcome::Success { .. })
    }

    /// The transformed text, if the call succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            CipherOutcome::Success { text } => Some(text.as_str()),
            CipherOutcome::Failure { .. } => None,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CipherOutcome::Success { .. } => None,
            CipherOutcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<Result<String>> for CipherOutcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => CipherOutcome::Success { text },
            Err(e) => CipherOutcome::Failure {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct WireOutcome<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
}

impl Serialize for CipherOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let wire = match self {
            CipherOutcome::Success { text } => WireOutcome {
                success: true,
                result: Some(text.as_str()),
                error: None,
                kind: None,
            },
            CipherOutcome::Failure { kind, message } => WireOutcome {
                success: false,
                result: None,
                error: Some(message.as_str()),
                kind: Some(*kind),
            },
        };
        wire.serialize(serializer)
    }
}
