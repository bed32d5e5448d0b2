use std::fmt;

use crate::error::{EngineError, Result};
use crate::parser::parse_term;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Positive => value,
            Sign::Negative => -value,
        }
    }
}

/// Written coefficient of a term. `x` and `-x` carry an implicit magnitude of 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    Explicit(f64),
    Implicit,
}

/// A signed coefficient attached to at most one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub sign: Sign,
    pub magnitude: Magnitude,
    pub variable: Option<char>,
}

impl Term {
    pub fn parse(input: &str) -> Result<Self> {
        parse_term(input)
    }

    /// Signed numeric value of the coefficient.
    pub fn value(&self) -> f64 {
        let magnitude = match self.magnitude {
            Magnitude::Explicit(v) => v,
            Magnitude::Implicit => 1.0,
        };
        self.sign.apply(magnitude)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        if let Magnitude::Explicit(v) = self.magnitude {
            write!(f, "{v}")?;
        }
        if let Some(var) = self.variable {
            write!(f, "{var}")?;
        }
        Ok(())
    }
}

/// Coefficient of `var` in a single term string. A term without any symbol is a
/// constant; a term naming another symbol is rejected.
pub fn extract_coefficient(term: &str, var: char) -> Result<f64> {
    let parsed = Term::parse(term)?;
    match parsed.variable {
        None => Ok(parsed.value()),
        Some(v) if v == var => Ok(parsed.value()),
        Some(other) => Err(EngineError::UnknownSymbol {
            symbol: other,
            expected: var.to_string(),
        }),
    }
}
