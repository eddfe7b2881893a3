use crate::core::models::cipher_method::{CipherMethod, Direction};

/// Port for the per-character substitution strategies.
///
/// Implementations live in `adapters::cipher` (Atbash, Caesar, Vigenère).
/// A strategy is only constructed from a validated key, so `transform`
/// is total: it never fails for any input text.
pub trait TextCipher: Send + Sync {
    /// Transform `text` in the given direction.
    fn transform(&self, text: &str, direction: Direction) -> String;

    /// Which method this strategy implements.
    fn method(&self) -> CipherMethod;
}
