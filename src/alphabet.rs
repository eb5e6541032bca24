//! Symbol sets that candidates are drawn from

use crate::error::{Result, SearchError};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "@#$";

/// An ordered, non-empty sequence of symbols.
///
/// Duplicates are kept as-is: a repeated symbol is reachable through more
/// than one index, which only enlarges the search space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`, in order.
    pub fn new(symbols: &str) -> Result<Self> {
        Self::from_symbols(symbols.chars().collect())
    }

    pub fn from_symbols(symbols: Vec<char>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(SearchError::EmptyAlphabet);
        }
        Ok(Self { symbols })
    }

    /// Number of symbols, i.e. the radix of the candidate counter. Always >= 1.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Charset::Default.alphabet()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Named symbol-set presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Lowercase, uppercase, digits and `@#$` (65 symbols)
    #[default]
    Default,
    Lower,
    Upper,
    Digits,
    Symbols,
    /// Lowercase, uppercase and digits (62 symbols)
    Alnum,
}

impl Charset {
    pub fn symbols(&self) -> String {
        match self {
            Charset::Default => [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat(),
            Charset::Lower => LOWERCASE.to_string(),
            Charset::Upper => UPPERCASE.to_string(),
            Charset::Digits => DIGITS.to_string(),
            Charset::Symbols => SYMBOLS.to_string(),
            Charset::Alnum => [LOWERCASE, UPPERCASE, DIGITS].concat(),
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        // Presets are never empty.
        Alphabet {
            symbols: self.symbols().chars().collect(),
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Charset::Default => write!(f, "default"),
            Charset::Lower => write!(f, "lower"),
            Charset::Upper => write!(f, "upper"),
            Charset::Digits => write!(f, "digits"),
            Charset::Symbols => write!(f, "symbols"),
            Charset::Alnum => write!(f, "alnum"),
        }
    }
}

impl std::str::FromStr for Charset {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" | "full" => Ok(Charset::Default),
            "lower" | "lowercase" => Ok(Charset::Lower),
            "upper" | "uppercase" => Ok(Charset::Upper),
            "digits" | "numeric" => Ok(Charset::Digits),
            "symbols" => Ok(Charset::Symbols),
            "alnum" | "alphanumeric" => Ok(Charset::Alnum),
            _ => Err(SearchError::UnknownCharset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet_has_65_symbols() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 3);
        assert_eq!(alphabet.len(), 65);
        assert_eq!(alphabet.symbol(0), 'a');
        assert_eq!(alphabet.symbol(26), 'A');
        assert_eq!(alphabet.symbol(52), '0');
        assert_eq!(alphabet.symbol(62), '@');
        assert_eq!(alphabet.symbol(64), '$');
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert_eq!(Alphabet::new(""), Err(SearchError::EmptyAlphabet));
        assert_eq!(
            Alphabet::from_symbols(Vec::new()),
            Err(SearchError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let alphabet = Alphabet::new("aab").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.symbols(), &['a', 'a', 'b']);
        assert_eq!(alphabet.to_string(), "aab");
    }

    #[test]
    fn test_non_ascii_symbols() {
        let alphabet = Alphabet::new("ñé€").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert!(alphabet.contains('€'));
        assert!(!alphabet.contains('e'));
    }

    #[test]
    fn test_charset_parsing() {
        assert_eq!("lower".parse::<Charset>().unwrap(), Charset::Lower);
        assert_eq!("ALNUM".parse::<Charset>().unwrap(), Charset::Alnum);
        assert_eq!("full".parse::<Charset>().unwrap(), Charset::Default);
        assert!(matches!(
            "hex".parse::<Charset>(),
            Err(SearchError::UnknownCharset(name)) if name == "hex"
        ));
    }

    #[test]
    fn test_charset_sizes() {
        assert_eq!(Charset::Lower.alphabet().len(), 26);
        assert_eq!(Charset::Digits.alphabet().len(), 10);
        assert_eq!(Charset::Symbols.alphabet().len(), 3);
        assert_eq!(Charset::Alnum.alphabet().len(), 62);
    }
}
