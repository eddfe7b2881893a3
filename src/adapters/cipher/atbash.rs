use crate::core::alphabet::mirror_letter;
use crate::core::errors::{CipherSphereError, Result};
use crate::core::models::cipher_key::CipherKey;
use crate::core::models::cipher_method::{CipherMethod, Direction};
use crate::core::traits::cipher::TextCipher;

/// Mirror substitution: `A`<->`Z`, `B`<->`Y`, ...
///
/// Self-inverse, so the direction is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atbash;

impl Atbash {
    /// Atbash takes no key; any supplied key is a mismatch.
    pub fn from_key(key: &CipherKey) -> Result<Self> {
        if key.is_none() {
            Ok(Atbash)
        } else {
            Err(CipherSphereError::invalid_key(
                "Atbash cipher does not take a key",
            ))
        }
    }
}

impl TextCipher for Atbash {
    fn transform(&self, text: &str, _direction: Direction) -> String {
        text.chars().map(mirror_letter).collect()
    }

    fn method(&self) -> CipherMethod {
        CipherMethod::Atbash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_example() {
        assert_eq!(Atbash.transform("Attack", Direction::Encrypt), "Zggzxp");
    }

    #[test]
    fn full_alphabet_reverses() {
        assert_eq!(
            Atbash.transform("ABCDEFGHIJKLMNOPQRSTUVWXYZ", Direction::Encrypt),
            "ZYXWVUTSRQPONMLKJIHGFEDCBA"
        );
        assert_eq!(
            Atbash.transform("abcdefghijklmnopqrstuvwxyz", Direction::Decrypt),
            "zyxwvutsrqponmlkjihgfedcba"
        );
    }

    #[test]
    fn direction_does_not_matter() {
        let text = "Hello, World! 123";
        assert_eq!(
            Atbash.transform(text, Direction::Encrypt),
            Atbash.transform(text, Direction::Decrypt)
        );
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(Atbash.transform("1, 2; 3! ñ", Direction::Encrypt), "1, 2; 3! ñ");
    }

    #[test]
    fn rejects_supplied_key() {
        assert!(Atbash::from_key(&CipherKey::None).is_ok());
        assert!(Atbash::from_key(&CipherKey::Integer(3)).is_err());
        assert!(Atbash::from_key(&CipherKey::Text("x".into())).is_err());
    }
}
