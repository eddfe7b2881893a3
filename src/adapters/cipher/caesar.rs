use crate::core::alphabet::shift_letter;
use crate::core::errors::{CipherSphereError, Result};
use crate::core::models::cipher_key::CipherKey;
use crate::core::models::cipher_method::{CipherMethod, Direction};
use crate::core::traits::cipher::TextCipher;

/// Largest shift a caller may pass. Out-of-range shifts are rejected,
/// never wrapped.
pub const MAX_SHIFT: i64 = 25;

/// Fixed-shift cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Build from a raw shift, which must lie in `0..=25`.
    pub fn new(shift: i64) -> Result<Self> {
        if !(0..=MAX_SHIFT).contains(&shift) {
            return Err(CipherSphereError::invalid_key(format!(
                "Shift value must be between 0 and {MAX_SHIFT} (got {shift})"
            )));
        }
        Ok(Self { shift: shift as u8 })
    }

    pub fn from_key(key: &CipherKey) -> Result<Self> {
        match key {
            CipherKey::Integer(shift) => Self::new(*shift),
            CipherKey::None | CipherKey::Text(_) => Err(CipherSphereError::invalid_key(
                "Caesar cipher requires a numeric shift value",
            )),
        }
    }
}

impl TextCipher for Caesar {
    fn transform(&self, text: &str, direction: Direction) -> String {
        let shift = direction.signed(i64::from(self.shift));
        text.chars().map(|c| shift_letter(c, shift)).collect()
    }

    fn method(&self) -> CipherMethod {
        CipherMethod::Caesar
    }
}
