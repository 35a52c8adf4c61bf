//! Generator configuration.

mod length;

pub use length::Length;

/// Length used until the user changes it.
pub const DEFAULT_LENGTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: Length,
    pub include_symbols_and_numbers: bool,
}

impl GeneratorConfig {
    /// Replace the length with whatever `raw` parses to.
    ///
    /// Unparseable input is stored as [`Length::NotANumber`] rather than
    /// rejected, so the next generation comes out empty.
    pub fn set_length(&mut self, raw: &str) {
        self.length = Length::parse(raw);
    }

    /// Flip between the full alphabet and the letters-only pool.
    pub fn toggle_symbols_and_numbers(&mut self) {
        self.include_symbols_and_numbers = !self.include_symbols_and_numbers;
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: Length::default(),
            include_symbols_and_numbers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length, Length::Chars(15));
        assert!(config.include_symbols_and_numbers);
    }

    #[test]
    fn set_length_replaces_value() {
        let mut config = GeneratorConfig::default();
        config.set_length("42");
        assert_eq!(config.length.count(), 42);
        config.set_length("7");
        assert_eq!(config.length.count(), 7);
    }

    #[test]
    fn set_length_garbage_zeroes_output() {
        let mut config = GeneratorConfig::default();
        config.set_length("twenty");
        assert_eq!(config.length, Length::NotANumber);
        assert_eq!(config.length.count(), 0);
    }

    #[test]
    fn toggle_flips_every_call() {
        let mut config = GeneratorConfig::default();
        config.toggle_symbols_and_numbers();
        assert!(!config.include_symbols_and_numbers);
        config.toggle_symbols_and_numbers();
        assert!(config.include_symbols_and_numbers);
    }

    #[test]
    fn toggle_leaves_length_alone() {
        let mut config = GeneratorConfig::default();
        config.set_length("9");
        config.toggle_symbols_and_numbers();
        assert_eq!(config.length, Length::Chars(9));
    }
}
