//! Number helpers usable in `const` contexts.

use super::format::sub_slice;

// === Decimal parsing === //

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum DigitError {
    /// The byte at `offset` is not an ASCII decimal digit.
    NotADigit { offset: usize },
    /// The value no longer fits a `u32` once the digit at `offset` is added.
    Overflow { offset: usize },
}

pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Parses `bytes[begin..end]` as an unsigned decimal number.
///
/// An empty range parses as zero. Offsets in errors are absolute indices into `bytes`.
pub const fn parse_decimal(bytes: &[u8], begin: usize, end: usize) -> Result<u32, DigitError> {
    assert!(begin <= end && end <= bytes.len());

    let mut value = 0u32;
    let mut i = begin;

    while i < end {
        let byte = bytes[i];

        if !is_digit(byte) {
            return Err(DigitError::NotADigit { offset: i });
        }

        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((byte - b'0') as u32) {
                Some(v) => v,
                None => return Err(DigitError::Overflow { offset: i }),
            },
            None => return Err(DigitError::Overflow { offset: i }),
        };

        i += 1;
    }

    Ok(value)
}

// === Bit length === //

/// The number of bits needed to represent `val`. Zero needs zero bits.
pub const fn bit_length(val: u128) -> u32 {
    u128::BITS - val.leading_zeros()
}

// === Radix rendering === //

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Minimal-width digits of a `u128` in a power-of-two base.
///
/// The buffer is sized for the worst case (128 binary digits) so rendering never writes out of
/// bounds regardless of the input.
#[derive(Copy, Clone)]
pub struct RadixDigits {
    buffer: [u8; u128::BITS as usize],
    start: usize,
}

impl RadixDigits {
    /// Renders `val` using `bits_per_digit` bits per digit (1 = binary, 3 = octal, 4 = hex).
    pub const fn new(val: u128, bits_per_digit: u32, upper: bool) -> Self {
        assert!(bits_per_digit >= 1 && bits_per_digit <= 4);

        let charset = if upper { UPPER_DIGITS } else { LOWER_DIGITS };
        let mask = (1u128 << bits_per_digit) - 1;

        let mut count = bit_length(val).div_ceil(bits_per_digit) as usize;
        if count == 0 {
            count = 1;
        }

        let mut buffer = [0u8; u128::BITS as usize];
        let start = buffer.len() - count;

        let mut i = 0;
        while i < count {
            let digit = (val >> (i as u32 * bits_per_digit)) & mask;
            buffer[buffer.len() - 1 - i] = charset[digit as usize];
            i += 1;
        }

        Self { buffer, start }
    }

    pub const fn len(&self) -> usize {
        self.buffer.len() - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn as_str(&self) -> &str {
        // Safety: the buffer past `start` only holds bytes from the ASCII digit tables.
        unsafe { std::str::from_utf8_unchecked(sub_slice(&self.buffer, self.start, self.len())) }
    }
}
