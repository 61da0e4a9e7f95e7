//! Default value formatters for literals appearing in parsed test cases.
//!
//! Each formatter converts the source text of one literal into the textual
//! representation used in generated test code. All six are pure functions,
//! total over well-formed input; a language plugin may shadow any subset of
//! them (see [`crate::callbacks::ValueFormatter`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The semantic tokens a formatter set covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatterToken {
    /// An integral numeral.
    Int,
    /// A decimal or hexadecimal floating-point numeral.
    FloatingPointNumber,
    /// A string literal.
    String,
    /// A dotted qualified name, e.g. an operation identifier.
    QualifiedIdentifier,
    /// The name of a generated input variable, `inp_<test>_<ordinal>`.
    InputVariableName,
    /// The name of a generated output variable, `outp_<test>_<ordinal>`.
    OutputVariableName,
}

impl FormatterToken {
    /// Returns the token's name as it appears in plugin contracts.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterToken::Int => "int",
            FormatterToken::FloatingPointNumber => "floatingPointNumber",
            FormatterToken::String => "string",
            FormatterToken::QualifiedIdentifier => "qualifiedIdentifier",
            FormatterToken::InputVariableName => "inputVariableName",
            FormatterToken::OutputVariableName => "outputVariableName",
        }
    }

    /// Returns all tokens.
    pub fn all() -> &'static [FormatterToken] {
        &[
            FormatterToken::Int,
            FormatterToken::FloatingPointNumber,
            FormatterToken::String,
            FormatterToken::QualifiedIdentifier,
            FormatterToken::InputVariableName,
            FormatterToken::OutputVariableName,
        ]
    }
}

impl std::fmt::Display for FormatterToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by value formatters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The text is not a numeral of the token's expected form.
    #[error("invalid {token} numeral: '{text}'")]
    InvalidNumeral {
        /// The token being formatted.
        token: FormatterToken,
        /// The offending source text.
        text: String,
    },
}

fn invalid(token: FormatterToken, text: &str) -> FormatError {
    FormatError::InvalidNumeral {
        token,
        text: text.to_owned(),
    }
}

/// Formats an integral numeral through floating-point semantics.
///
/// Integral literals are represented as floating-point values in generated
/// code: `"42"` becomes `"42.0"`.
pub fn int(text: &str) -> Result<String, FormatError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| invalid(FormatterToken::Int, text))?;
    Ok(render(value))
}

/// Formats a floating-point numeral, decimal or hexadecimal.
///
/// A binary-exponent marker (`p`, case-insensitive) selects
/// hexadecimal-float parsing: `"0x1.8p3"` becomes `"12.0"`. Anything else is
/// parsed as a decimal floating-point literal.
pub fn floating_point_number(text: &str) -> Result<String, FormatError> {
    let trimmed = text.trim();
    let value = if trimmed.bytes().any(|b| b == b'p' || b == b'P') {
        parse_hex_float(trimmed)
            .ok_or_else(|| invalid(FormatterToken::FloatingPointNumber, text))?
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| invalid(FormatterToken::FloatingPointNumber, text))?
    };
    Ok(render(value))
}

/// Formats a string literal: identity.
pub fn string(text: &str) -> Result<String, FormatError> {
    Ok(text.to_owned())
}

/// Flattens a dotted qualified name into a lowercase identifier.
///
/// `"Foo.Bar.Baz"` becomes `"foo_bar_baz"`. Idempotent.
pub fn qualified_identifier(text: &str) -> Result<String, FormatError> {
    Ok(text.replace('.', "_").to_lowercase())
}

/// Formats an input variable name: identity.
pub fn input_variable_name(text: &str) -> Result<String, FormatError> {
    Ok(text.to_owned())
}

/// Formats an output variable name: identity.
pub fn output_variable_name(text: &str) -> Result<String, FormatError> {
    Ok(text.to_owned())
}

/// Shortest round-trip rendering; integral values keep a trailing `.0`.
fn render(value: f64) -> String {
    format!("{:?}", value)
}

/// Parses a hexadecimal floating-point literal.
///
/// Accepts an optional sign, an optional `0x`/`0X` prefix, hexadecimal
/// digits with an optional point, and a mandatory decimal binary exponent
/// after `p`/`P`. Returns `None` for anything else, including a mantissa too
/// long to hold exactly.
fn parse_hex_float(text: &str) -> Option<f64> {
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1.0, &text[1..]),
        b'-' => (-1.0, &text[1..]),
        _ => (1.0, text),
    };
    let lower = rest.to_ascii_lowercase();
    let digits = lower.strip_prefix("0x").unwrap_or(&lower);
    let (mantissa_text, exponent_text) = digits.split_once('p')?;
    let exponent: i32 = exponent_text.parse().ok()?;

    let (int_part, frac_part) = match mantissa_text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa_text, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    // Accumulate the mantissa as an integer so the value is rounded exactly
    // once, when converted to f64.
    let mut mantissa: u128 = 0;
    for c in int_part.chars().chain(frac_part.chars()) {
        let digit = c.to_digit(16)? as u128;
        mantissa = mantissa.checked_mul(16)?.checked_add(digit)?;
    }
    let scale = exponent - 4 * frac_part.len() as i32;
    Some(sign * mantissa as f64 * 2f64.powi(scale))
}
