//! The fixed sampling alphabet.

use crate::settings::GeneratorConfig;

/// Letters first, then digits, then symbols. Pools are prefixes of this, so
/// the order matters.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
~`!@#$%^&*()_-+={[}],|:;<>.?/";

/// Length of the letters-only prefix.
pub const LETTERS: usize = 52;

/// Index where the symbols start.
pub const SYMBOLS_START: usize = LETTERS + 10;

/// The slice of the alphabet a generation draws from.
pub fn pool(config: &GeneratorConfig) -> &'static [u8] {
    if config.include_symbols_and_numbers {
        ALPHABET
    } else {
        &ALPHABET[..LETTERS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(ALPHABET.len(), 91);
        assert!(ALPHABET[..26].iter().all(u8::is_ascii_uppercase));
        assert!(ALPHABET[26..LETTERS].iter().all(u8::is_ascii_lowercase));
        assert_eq!(&ALPHABET[LETTERS..SYMBOLS_START], b"0123456789");
        assert!(ALPHABET[SYMBOLS_START..].iter().all(u8::is_ascii_punctuation));
    }

    #[test]
    fn no_duplicates() {
        let mut seen = [false; 128];
        for &c in ALPHABET {
            assert!(!seen[c as usize], "duplicate {:?}", c as char);
            seen[c as usize] = true;
        }
    }

    #[test]
    fn pool_follows_flag() {
        let mut config = GeneratorConfig::default();
        assert_eq!(pool(&config), ALPHABET);
        config.include_symbols_and_numbers = false;
        assert_eq!(pool(&config).len(), LETTERS);
        assert!(pool(&config).iter().all(u8::is_ascii_alphabetic));
    }
}
