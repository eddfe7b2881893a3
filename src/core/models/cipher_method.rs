use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::errors::CipherSphereError;

/// The classical ciphers CipherSphere knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CipherMethod {
    Atbash,
    Caesar,
    Vigenere,
}

impl CipherMethod {
    pub const ALL: [CipherMethod; 3] = [
        CipherMethod::Atbash,
        CipherMethod::Caesar,
        CipherMethod::Vigenere,
    ];

    /// Canonical upper-case name (e.g. `"VIGENERE"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMethod::Atbash => "ATBASH",
            CipherMethod::Caesar => "CAESAR",
            CipherMethod::Vigenere => "VIGENERE",
        }
    }

    /// What the method expects as a key, for help output.
    pub fn key_requirement(&self) -> &'static str {
        match self {
            CipherMethod::Atbash => "no key",
            CipherMethod::Caesar => "integer shift in 0..=25",
            CipherMethod::Vigenere => "keyword with at least one letter",
        }
    }
}

impl fmt::Display for CipherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMethod {
    type Err = CipherSphereError;

    /// Case-insensitive; `VIGENÈRE` is accepted as an alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ATBASH" => Ok(CipherMethod::Atbash),
            "CAESAR" => Ok(CipherMethod::Caesar),
            "VIGENERE" | "VIGENÈRE" => Ok(CipherMethod::Vigenere),
            _ => Err(CipherSphereError::UnknownMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// Whether letters are shifted forwards or backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn from_decrypt_flag(decrypt: bool) -> Self {
        if decrypt {
            Direction::Decrypt
        } else {
            Direction::Encrypt
        }
    }

    /// Apply the direction's sign to a forward shift.
    pub fn signed(&self, shift: i64) -> i64 {
        match self {
            Direction::Encrypt => shift,
            Direction::Decrypt => -shift,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ATBASH".parse::<CipherMethod>().unwrap(), CipherMethod::Atbash);
        assert_eq!("caesar".parse::<CipherMethod>().unwrap(), CipherMethod::Caesar);
        assert_eq!("Vigenere".parse::<CipherMethod>().unwrap(), CipherMethod::Vigenere);
        assert_eq!("vigenère".parse::<CipherMethod>().unwrap(), CipherMethod::Vigenere);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "ROT13".parse::<CipherMethod>().unwrap_err();
        assert!(matches!(err, CipherSphereError::UnknownMethod { ref method } if method == "ROT13"));
    }

    #[test]
    fn empty_method_is_rejected() {
        assert!("".parse::<CipherMethod>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for method in CipherMethod::ALL {
            assert_eq!(method.to_string().parse::<CipherMethod>().unwrap(), method);
        }
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Encrypt.signed(3), 3);
        assert_eq!(Direction::Decrypt.signed(3), -3);
        assert_eq!(Direction::from_decrypt_flag(true), Direction::Decrypt);
        assert_eq!(Direction::from_decrypt_flag(false), Direction::Encrypt);
    }
}
