//! nom combinators for the two input grammars: linear terms and polynomial terms.
//!
//! Input reaching these parsers is already stripped of whitespace and
//! lower-cased, so none of the combinators skip blanks.

use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, satisfy};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, verify};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{pair, preceded};

use crate::equation::{Magnitude, Sign, Term};
use crate::error::{EngineError, Result};
use crate::polynomial::Polynomial;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parse one linear term such as `3x`, `-x`, `2.5*y` or `-7`.
pub fn parse_term(input: &str) -> Result<Term> {
    match all_consuming(linear_term)(input) {
        Ok((_, term)) => Ok(term),
        Err(_) => Err(EngineError::InvalidTerm(input.to_string())),
    }
}

/// Parse a bare real literal, optionally signed (`-2`, `0.5`, `+3.`).
pub fn parse_number(input: &str) -> Result<f64> {
    let parsed = all_consuming(pair(sign, unsigned_decimal))(input);
    match parsed {
        Ok((_, (sign, value))) => Ok(sign.apply(value)),
        Err(_) => Err(EngineError::InvalidNumber(input.to_string())),
    }
}

/// Parse a whole polynomial in `var`, summing coefficients of equal powers.
pub fn parse_polynomial_terms(input: &str, var: char) -> Result<Polynomial> {
    let (rest, first) = match poly_term(var, false)(input) {
        Ok(parsed) => parsed,
        Err(_) => return Err(unmatched(input)),
    };
    let folded = fold_many0(
        poly_term(var, true),
        move || Polynomial::monomial(first.1, first.0),
        |acc, (power, coeff)| acc + Polynomial::monomial(coeff, power),
    )(rest);
    match folded {
        Ok(("", poly)) => Ok(poly),
        Ok((leftover, _)) => Err(unmatched(leftover)),
        Err(_) => Err(unmatched(rest)),
    }
}

fn unmatched(rest: &str) -> EngineError {
    EngineError::InvalidPolynomial(format!("no se reconoce '{rest}'"))
}

fn linear_term(input: &str) -> ParseResult<'_, Term> {
    let (rest, sign) = sign(input)?;
    alt((
        map(
            pair(unsigned_decimal, opt(preceded(opt(char('*')), symbol))),
            move |(value, variable)| Term {
                sign,
                magnitude: Magnitude::Explicit(value),
                variable,
            },
        ),
        map(symbol, move |variable| Term {
            sign,
            magnitude: Magnitude::Implicit,
            variable: Some(variable),
        }),
    ))(rest)
}

/// `±coeff*x^power`, `±coeff*x`, `±x^power` or `±coeff`, yielding `(power, coeff)`.
/// When `signed` is set the leading sign is mandatory, which is what separates
/// consecutive terms.
fn poly_term<'a>(var: char, signed: bool) -> impl FnMut(&'a str) -> ParseResult<'a, (u32, f64)> {
    move |input: &'a str| {
        let (rest, sign) = if signed {
            required_sign(input)?
        } else {
            sign(input)?
        };
        alt((
            map(
                pair(
                    unsigned_decimal,
                    opt(preceded(opt(char('*')), var_power(var))),
                ),
                move |(coeff, power)| (power.unwrap_or(0), sign.apply(coeff)),
            ),
            map(var_power(var), move |power| (power, sign.apply(1.0))),
        ))(rest)
    }
}

/// `x` or `x^power`, yielding the power.
fn var_power<'a>(var: char) -> impl FnMut(&'a str) -> ParseResult<'a, u32> {
    map(pair(char(var), opt(exponent)), |(_, power)| power.unwrap_or(1))
}

fn exponent(input: &str) -> ParseResult<'_, u32> {
    preceded(char('^'), map_res(digit1, str::parse::<u32>))(input)
}

fn sign(input: &str) -> ParseResult<'_, Sign> {
    map(opt(alt((char('+'), char('-')))), |c| match c {
        Some('-') => Sign::Negative,
        _ => Sign::Positive,
    })(input)
}

fn required_sign(input: &str) -> ParseResult<'_, Sign> {
    map(alt((char('+'), char('-'))), |c| match c {
        '-' => Sign::Negative,
        _ => Sign::Positive,
    })(input)
}

fn symbol(input: &str) -> ParseResult<'_, char> {
    satisfy(|c| c.is_ascii_alphabetic())(input)
}

/// Digit strings too long for `f64` would parse as infinity; those are rejected.
fn unsigned_decimal(input: &str) -> ParseResult<'_, f64> {
    verify(
        map_res(
            recognize(alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            ))),
            str::parse::<f64>,
        ),
        |value: &f64| value.is_finite(),
    )(input)
}
