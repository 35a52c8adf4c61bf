use std::fmt;

/// Requested password length as read from a text control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Chars(usize),
    /// A negative number was entered. Generates nothing.
    Negative,
    /// Nothing numeric could be read. Generates nothing.
    NotANumber,
}

impl Length {
    /// Parse a base-10 integer prefix.
    ///
    /// Leading whitespace is skipped, one `+` or `-` is accepted, and digits
    /// are read up to the first non-digit, so `"12abc"` is 12 and `"3.9"` is
    /// 3. No digits, or a value past `usize::MAX`, is [`Length::NotANumber`].
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let end = s.bytes().take_while(u8::is_ascii_digit).count();
        if end == 0 {
            return Length::NotANumber;
        }

        match s[..end].parse::<usize>() {
            Ok(0) => Length::Chars(0),
            Ok(_) if negative => Length::Negative,
            Ok(n) => Length::Chars(n),
            Err(_) => Length::NotANumber,
        }
    }

    /// Number of characters a generation will produce.
    pub fn count(self) -> usize {
        match self {
            Length::Chars(n) => n,
            Length::Negative | Length::NotANumber => 0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Chars(super::DEFAULT_LENGTH)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Chars(n) => write!(f, "{n}"),
            Length::Negative => f.write_str("negative"),
            Length::NotANumber => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(Length::parse("15"), Length::Chars(15));
        assert_eq!(Length::parse("0"), Length::Chars(0));
        assert_eq!(Length::parse("+8"), Length::Chars(8));
    }

    #[test]
    fn leading_whitespace_and_trailing_junk() {
        assert_eq!(Length::parse("   20"), Length::Chars(20));
        assert_eq!(Length::parse("12abc"), Length::Chars(12));
        assert_eq!(Length::parse("3.9"), Length::Chars(3));
        assert_eq!(Length::parse("10 "), Length::Chars(10));
    }

    #[test]
    fn hex_prefix_reads_only_the_zero() {
        assert_eq!(Length::parse("0x10"), Length::Chars(0));
    }

    #[test]
    fn negatives_generate_nothing() {
        assert_eq!(Length::parse("-4"), Length::Negative);
        assert_eq!(Length::parse("-4").count(), 0);
        assert_eq!(Length::parse("-0"), Length::Chars(0));
    }

    #[test]
    fn not_a_number() {
        for raw in ["", "   ", "abc", "-", "+", ".5", "x12"] {
            assert_eq!(Length::parse(raw), Length::NotANumber, "{raw:?}");
        }
    }

    #[test]
    fn overflow_is_not_a_number() {
        let huge = "9".repeat(40);
        assert_eq!(Length::parse(&huge), Length::NotANumber);
    }

    #[test]
    fn display() {
        assert_eq!(Length::Chars(15).to_string(), "15");
        assert_eq!(Length::NotANumber.to_string(), "NaN");
    }
}
