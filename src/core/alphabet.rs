//! Shared 26-letter alphabet arithmetic.
//!
//! Every cipher goes through these helpers so that case handling and
//! modular arithmetic stay identical across Atbash, Caesar and Vigenère.
//! Only ASCII `A`-`Z` and `a`-`z` are letters here; everything else
//! (digits, punctuation, whitespace, non-ASCII) passes through untouched.

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// Classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    Upper(u8),
    Lower(u8),
    Other,
}

impl Letter {
    /// Classify `c`, returning its zero-based alphabet position for letters.
    pub fn classify(c: char) -> Self {
        match c {
            'A'..='Z' => Letter::Upper(c as u8 - b'A'),
            'a'..='z' => Letter::Lower(c as u8 - b'a'),
            _ => Letter::Other,
        }
    }

    fn rebuild(self, index: u8) -> Option<char> {
        match self {
            Letter::Upper(_) => Some((b'A' + index) as char),
            Letter::Lower(_) => Some((b'a' + index) as char),
            Letter::Other => None,
        }
    }
}

/// Zero-based position of an ASCII letter (`A`/`a` = 0), `None` otherwise.
pub fn alphabet_index(c: char) -> Option<u8> {
    match Letter::classify(c) {
        Letter::Upper(i) | Letter::Lower(i) => Some(i),
        Letter::Other => None,
    }
}

/// Reduce any shift to `0..26`.
pub fn normalize_shift(shift: i64) -> u8 {
    (((shift % ALPHABET_LEN) + ALPHABET_LEN) % ALPHABET_LEN) as u8
}

/// Move a letter `shift` places along its own-case alphabet.
///
/// `shift` may be any integer; it is reduced modulo 26 first. Non-letters
/// are returned unchanged.
pub fn shift_letter(c: char, shift: i64) -> char {
    let letter = Letter::classify(c);
    match letter {
        Letter::Upper(i) | Letter::Lower(i) => {
            let shifted = (i + normalize_shift(shift)) % ALPHABET_LEN as u8;
            letter.rebuild(shifted).unwrap_or(c)
        }
        Letter::Other => c,
    }
}

/// Reflect a letter to its mirror position (`A`<->`Z`, `b`<->`y`).
pub fn mirror_letter(c: char) -> char {
    let letter = Letter::classify(c);
    match letter {
        Letter::Upper(i) | Letter::Lower(i) => letter.rebuild(25 - i).unwrap_or(c),
        Letter::Other => c,
    }
}
