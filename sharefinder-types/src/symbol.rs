//! Validated ticker symbol.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SharefinderError;

/// Upper-cased, trimmed ticker symbol (e.g. `SPY`, `ARKK`, `BRK.B`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse user input into a symbol.
    ///
    /// Surrounding whitespace is removed and ASCII letters are upper-cased.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the input is empty after trimming or contains
    /// anything other than ASCII letters, digits, and `.-^=_`.
    pub fn new(raw: &str) -> Result<Self, SharefinderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SharefinderError::InvalidArg(
                "ticker symbol must not be empty".to_string(),
            ));
        }
        if let Some(bad) = trimmed.chars().find(|c| !is_symbol_char(*c)) {
            return Err(SharefinderError::InvalidArg(format!(
                "ticker symbol {trimmed:?} contains {bad:?}"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Borrow the canonical symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=' | '_')
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = SharefinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = SharefinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
