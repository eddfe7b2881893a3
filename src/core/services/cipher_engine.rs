use tracing::debug;

use crate::adapters::cipher::atbash::Atbash;
use crate::adapters::cipher::caesar::Caesar;
use crate::adapters::cipher::vigenere::Vigenere;
use crate::core::errors::Result;
use crate::core::models::cipher_key::CipherKey;
use crate::core::models::cipher_method::{CipherMethod, Direction};
use crate::core::models::cipher_request::{CipherOutcome, CipherRequest};
use crate::core::traits::cipher::TextCipher;

/// Validates a request and runs the matching strategy over the text.
///
/// Stateless: it holds no caches or key registries, so one engine can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CipherEngine;

impl CipherEngine {
    /// Build the strategy for `method`, validating `key` against it.
    ///
    /// All key checks happen here, before any text is touched.
    pub fn strategy(&self, method: CipherMethod, key: &CipherKey) -> Result<Box<dyn TextCipher>> {
        let cipher: Box<dyn TextCipher> = match method {
            CipherMethod::Atbash => Box::new(Atbash::from_key(key)?),
            CipherMethod::Caesar => Box::new(Caesar::from_key(key)?),
            CipherMethod::Vigenere => Box::new(Vigenere::from_key(key)?),
        };
        Ok(cipher)
    }

    /// Transform a typed request, all-or-nothing.
    pub fn transform(&self, request: &CipherRequest) -> Result<String> {
        let cipher = self.strategy(request.method, &request.key)?;
        debug!(
            method = %cipher.method(),
            direction = %request.direction,
            chars = request.text.chars().count(),
            "applying cipher"
        );
        Ok(cipher.transform(&request.text, request.direction))
    }

    /// Same as [`transform`](Self::transform), folded into a `CipherOutcome`.
    pub fn apply(&self, request: &CipherRequest) -> CipherOutcome {
        self.transform(request).into()
    }

    /// Entry point for callers holding a method *name*.
    ///
    /// An unrecognised name yields an `UnknownMethod` failure; key problems
    /// yield `InvalidKey`. Identical inputs always give identical outcomes.
    pub fn apply_cipher(
        &self,
        text: &str,
        method: &str,
        key: &CipherKey,
        direction: Direction,
    ) -> CipherOutcome {
        let result = method.parse::<CipherMethod>().and_then(|method| {
            self.transform(&CipherRequest {
                method,
                direction,
                key: key.clone(),
                text: text.to_string(),
            })
        });
        if let Err(e) = &result {
            debug!(kind = ?e.kind(), "cipher request rejected");
        }
        result.into()
    }
}
