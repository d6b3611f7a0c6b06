use std::fmt;

use bracefmt_utils::ctfe::digits::{DigitError, parse_decimal};
use serde::Serialize;

use super::{
    error::{MalformedReason, TemplateError},
    scan::Span,
};

/// The largest precision a `{.N}` directive may request.
pub const MAX_PRECISION: u32 = 64;

// === Radix === //

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    HexLower,
    HexUpper,
}

impl Radix {
    /// The marker written before the digits. Empty for decimal.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Decimal => "",
            Self::HexLower | Self::HexUpper => "0x",
        }
    }

    /// Bits encoded by a single digit, or `None` for decimal.
    pub const fn bits_per_digit(self) -> Option<u32> {
        match self {
            Self::Binary => Some(1),
            Self::Octal => Some(3),
            Self::Decimal => None,
            Self::HexLower | Self::HexUpper => Some(4),
        }
    }

    pub const fn is_upper(self) -> bool {
        matches!(self, Self::HexUpper)
    }
}

// === FormatSpec === //

/// How the argument bound to a placeholder should be rendered.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSpec {
    /// No directive: decimal for integers and the default textual form for everything else.
    #[default]
    Unspecified,
    Integer(Radix),
    Float { precision: u32 },
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::Unspecified => f.write_str("unspecified"),
            FormatSpec::Integer(Radix::Binary) => f.write_str("bin"),
            FormatSpec::Integer(Radix::Octal) => f.write_str("oct"),
            FormatSpec::Integer(Radix::Decimal) => f.write_str("dec"),
            FormatSpec::Integer(Radix::HexLower) => f.write_str("hex"),
            FormatSpec::Integer(Radix::HexUpper) => f.write_str("HEX"),
            FormatSpec::Float { precision } => write!(f, "float(.{precision})"),
        }
    }
}

/// Decodes the directive body of the placeholder at `span`.
///
/// | Body           | Result                 |
/// |----------------|------------------------|
/// | *(empty)*      | `Unspecified`          |
/// | `0x` / `0X`    | lower / upper hex      |
/// | `0o` / `0b`    | octal / binary         |
/// | `0.N` / `.N`   | `Float { precision: N }` |
/// | `:`...         | error                  |
/// | anything else  | `Unspecified`          |
pub const fn parse_spec(
    template: &str,
    span: Span,
    index: usize,
) -> Result<FormatSpec, TemplateError> {
    let bytes = template.as_bytes();
    let (body, end) = span.body();
    let len = end - body;

    if len == 0 {
        return Ok(FormatSpec::Unspecified);
    }

    match bytes[body] {
        b'0' if len >= 2 => match bytes[body + 1] {
            b'x' => Ok(FormatSpec::Integer(Radix::HexLower)),
            b'X' => Ok(FormatSpec::Integer(Radix::HexUpper)),
            b'o' => Ok(FormatSpec::Integer(Radix::Octal)),
            b'b' => Ok(FormatSpec::Integer(Radix::Binary)),
            b'.' if len >= 3 => parse_precision(bytes, body + 2, end, index),
            _ => Ok(FormatSpec::Unspecified),
        },
        b'.' if len >= 2 => parse_precision(bytes, body + 1, end, index),
        b':' => Err(TemplateError::malformed(
            index,
            body,
            MalformedReason::UnsupportedDirective,
        )),
        _ => Ok(FormatSpec::Unspecified),
    }
}

const fn parse_precision(
    bytes: &[u8],
    begin: usize,
    end: usize,
    index: usize,
) -> Result<FormatSpec, TemplateError> {
    match parse_decimal(bytes, begin, end) {
        Ok(precision) if precision <= MAX_PRECISION => Ok(FormatSpec::Float { precision }),
        Ok(_) => Err(TemplateError::malformed(
            index,
            begin,
            MalformedReason::PrecisionTooLarge,
        )),
        Err(DigitError::Overflow { .. }) => Err(TemplateError::malformed(
            index,
            begin,
            MalformedReason::PrecisionTooLarge,
        )),
        Err(DigitError::NotADigit { offset }) => Err(TemplateError::InvalidDigit {
            placeholder: index,
            offset,
        }),
    }
}
