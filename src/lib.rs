//! CipherSphere: classical text ciphers with symmetric encrypt/decrypt.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/
//! │   ├── alphabet      # letter classification + mod-26 shift primitive
//! │   ├── models/       # CipherMethod, Direction, CipherKey, request/outcome
//! │   ├── traits/       # TextCipher strategy trait
//! │   ├── services/     # CipherEngine (validation + dispatch)
//! │   └── errors        # CipherSphereError
//! ├── adapters/cipher/  # Atbash, Caesar, Vigenère strategies
//! ├── config/           # optional config.toml
//! └── cli/              # command-line front end
//! ```
//!
//! # Example
//!
//! ```
//! use ciphersphere::{CipherEngine, CipherKey, Direction};
//!
//! let engine = CipherEngine;
//! let outcome = engine.apply_cipher("HELLO", "CAESAR", &CipherKey::Integer(3), Direction::Encrypt);
//! assert_eq!(outcome.text(), Some("KHOOR"));
//!
//! let outcome = engine.apply_cipher("x", "ROT13", &CipherKey::None, Direction::Encrypt);
//! assert!(!outcome.is_success());
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::errors::{CipherSphereError, ErrorKind, Result};
pub use crate::core::models::cipher_key::CipherKey;
pub use crate::core::models::cipher_method::{CipherMethod, Direction};
pub use crate::core::models::cipher_request::{CipherOutcome, CipherRequest};
pub use crate::core::services::cipher_engine::CipherEngine;
