use std::fmt;

use bracefmt_utils::ctfe::digits::RadixDigits;

use super::traits::Render;
use crate::template::spec::{FormatSpec, MAX_PRECISION, Radix};

// === Integers === //

/// Writes `bits` with the radix marker followed by the minimal digit sequence.
///
/// Decimal falls back to the plain unsigned value.
fn write_radix(f: &mut fmt::Formatter<'_>, bits: u128, radix: Radix) -> fmt::Result {
    let Some(bits_per_digit) = radix.bits_per_digit() else {
        return fmt::Display::fmt(&bits, f);
    };

    f.write_str(radix.prefix())?;
    f.write_str(RadixDigits::new(bits, bits_per_digit, radix.is_upper()).as_str())
}

// Signed values are reinterpreted at their own width before widening, so negative numbers
// show their two's complement bit pattern (`-1i8` is `0xff`).
macro_rules! impl_int_render {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl Render for $ty {
            fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match spec {
                    FormatSpec::Unspecified | FormatSpec::Integer(Radix::Decimal) => {
                        fmt::Display::fmt(self, f)
                    }
                    FormatSpec::Integer(radix) => {
                        write_radix(f, *self as $unsigned as u128, radix)
                    }
                    FormatSpec::Float { precision } => write_fixed(f, &self.to_string(), precision),
                }
            }
        }
    )*};
}

impl_int_render!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

// === Booleans === //

// Booleans are the integers 0 and 1 under every directive.
impl Render for bool {
    fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (*self as u8).render(spec, f)
    }
}

// === Floats === //

/// Writes the decimal text of a finite number cut to `precision` fractional digits.
///
/// `decimal` must be plain positional notation (as produced by `Display` for integers and
/// floats). The integer part is kept verbatim, sign included. Fractional digits past
/// `precision` are dropped, never rounded, and missing ones are filled with `0`. The
/// precision is clamped to [`MAX_PRECISION`].
fn write_fixed(f: &mut fmt::Formatter<'_>, decimal: &str, precision: u32) -> fmt::Result {
    let precision = precision.min(MAX_PRECISION) as usize;
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));

    f.write_str(whole)?;

    if precision == 0 {
        return Ok(());
    }

    // `Display` only emits ASCII here, so byte slicing stays on char boundaries.
    let fraction = &fraction[..fraction.len().min(precision)];

    write!(f, ".{fraction:0<precision$}")
}

macro_rules! impl_float_render {
    ($($ty:ty),* $(,)?) => {$(
        impl Render for $ty {
            fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match spec {
                    FormatSpec::Float { precision } if self.is_finite() => {
                        write_fixed(f, &self.to_string(), precision)
                    }
                    FormatSpec::Float { .. } | FormatSpec::Unspecified | FormatSpec::Integer(_) => {
                        fmt::Display::fmt(self, f)
                    }
                }
            }
        }
    )*};
}

impl_float_render!(f32, f64);
