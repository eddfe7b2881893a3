pub mod atbash;
pub mod caesar;
pub mod vigenere;
