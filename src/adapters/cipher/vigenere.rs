use crate::core::alphabet::{alphabet_index, shift_letter};
use crate::core::errors::{CipherSphereError, Result};
use crate::core::models::cipher_key::CipherKey;
use crate::core::models::cipher_method::{CipherMethod, Direction};
use crate::core::traits::cipher::TextCipher;

/// Polyalphabetic cipher driven by a repeating keyword.
///
/// The key cursor starts at 0 on every call and only advances on letters
/// of the input, so punctuation and whitespace never desynchronise
/// encryption and decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    /// Per-position shifts (`A` = 0 ... `Z` = 25), never empty.
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Build from a keyword.
    ///
    /// Non-letters are stripped and case is ignored; a keyword with no
    /// letters left is rejected.
    pub fn new(keyword: &str) -> Result<Self> {
        if keyword.is_empty() {
            return Err(CipherSphereError::invalid_key("Key cannot be empty"));
        }
        let shifts: Vec<u8> = keyword.chars().filter_map(alphabet_index).collect();
        if shifts.is_empty() {
            return Err(CipherSphereError::invalid_key(
                "Key must contain at least one alphabetic character",
            ));
        }
        Ok(Self { shifts })
    }

    pub fn from_key(key: &CipherKey) -> Result<Self> {
        match key {
            CipherKey::Text(keyword) => Self::new(keyword),
            CipherKey::None | CipherKey::Integer(_) => Err(CipherSphereError::invalid_key(
                "Vigenère cipher requires a string key",
            )),
        }
    }
}

impl TextCipher for Vigenere {
    fn transform(&self, text: &str, direction: Direction) -> String {
        let mut cursor = 0usize;
        let out: String = text
            .chars()
            .map(|c| {
                if alphabet_index(c).is_none() {
                    return c;
                }
                let shift = i64::from(self.shifts[cursor % self.shifts.len()]);
                cursor += 1;
                shift_letter(c, direction.signed(shift))
            })
            .collect();
        tracing::trace!(letters = cursor, key_len = self.shifts.len(), "vigenere pass done");
        out
    }

    fn method(&self) -> CipherMethod {
        CipherMethod::Vigenere
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vigenere(key: &str) -> Vigenere {
        Vigenere::new(key).unwrap()
    }

    #[test]
    fn known_example() {
        assert_eq!(
            vigenere("LEMON").transform("ATTACKATDAWN", Direction::Encrypt),
            "LXFOPVEFRNHR"
        );
        assert_eq!(
            vigenere("LEMON").transform("LXFOPVEFRNHR", Direction::Decrypt),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn cursor_skips_non_letters() {
        // Same letters as the known example, with separators in between.
        assert_eq!(
            vigenere("LEMON").transform("ATTACK AT DAWN!", Direction::Encrypt),
            "LXFOPV EF RNHR!"
        );
    }

    #[test]
    fn key_case_and_symbols_are_ignored() {
        let a = vigenere("lemon").transform("attack at dawn", Direction::Encrypt);
        let b = vigenere("L-E m0O n!").transform("attack at dawn", Direction::Encrypt);
        assert_eq!(a, "lxfopv ef rnhr");
        assert_eq!(a, b);
        assert_eq!(vigenere("l-e m0O n!"), vigenere("LEMON"));
    }

    #[test]
    fn output_case_follows_input() {
        assert_eq!(vigenere("b").transform("aB cD", Direction::Encrypt), "bC dE");
    }

    #[test]
    fn key_of_a_is_identity() {
        assert_eq!(vigenere("aaa").transform("Unchanged?", Direction::Encrypt), "Unchanged?");
    }

    #[test]
    fn empty_key_rejected() {
        let err = Vigenere::new("").unwrap_err();
        assert!(err.to_string().contains("Key cannot be empty"));
    }

    #[test]
    fn key_without_letters_rejected() {
        let err = Vigenere::new("123").unwrap_err();
        assert!(matches!(err, CipherSphereError::InvalidKey { .. }));
        assert!(err.to_string().contains("at least one alphabetic"));
        assert!(Vigenere::new("!? 42").is_err());
    }

    #[test]
    fn non_text_key_rejected() {
        assert!(Vigenere::from_key(&CipherKey::Integer(3)).is_err());
        assert!(Vigenere::from_key(&CipherKey::None).is_err());
    }
}
