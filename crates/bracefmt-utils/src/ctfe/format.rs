/// A fixed-capacity text buffer that can be written to inside `const` contexts.
///
/// Used to build diagnostics during constant evaluation, where `String` and `format!` are not
/// available. Text that does not fit is cut at the last complete character and the formatter is
/// marked as truncated; every later write is ignored.
pub struct CtfeFormatter<const CAP: usize> {
    buffer: [u8; CAP],
    len: usize,
    truncated: bool,
}

impl<const CAP: usize> CtfeFormatter<CAP> {
    #[expect(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            buffer: [0u8; CAP],
            len: 0,
            truncated: false,
        }
    }

    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub const fn write_str(&mut self, str: &str) {
        if self.truncated {
            return;
        }

        let src = str.as_bytes();
        let mut take = src.len();

        if take > CAP - self.len {
            take = CAP - self.len;

            // Never split a multi-byte character.
            while take > 0 && take < src.len() && is_continuation_byte(src[take]) {
                take -= 1;
            }

            self.truncated = true;
        }

        sub_slice_mut(&mut self.buffer, self.len, take).copy_from_slice(sub_slice(src, 0, take));
        self.len += take;
    }

    pub const fn write_char(&mut self, ch: char) {
        let mut dst = [0u8; 4];
        self.write_str(ch.encode_utf8(&mut dst));
    }

    pub const fn write_u128(&mut self, mut val: u128) {
        // u128::MAX has 39 decimal digits.
        let mut digits = [0u8; 39];
        let mut start = digits.len();

        loop {
            start -= 1;
            digits[start] = b'0' + (val % 10) as u8;
            val /= 10;

            if val == 0 {
                break;
            }
        }

        let digits = sub_slice(&digits, start, digits.len() - start);

        // Safety: only ASCII digits were written.
        self.write_str(unsafe { std::str::from_utf8_unchecked(digits) });
    }

    pub const fn write_usize(&mut self, val: usize) {
        self.write_u128(val as u128);
    }

    #[must_use]
    pub const fn finish(&self) -> &str {
        // Safety: `write_str` only ever copies whole UTF-8 sequences out of `&str`s.
        unsafe { std::str::from_utf8_unchecked(sub_slice(&self.buffer, 0, self.len)) }
    }
}

const fn is_continuation_byte(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

pub(crate) const fn sub_slice<T>(parent: &[T], start: usize, len: usize) -> &[T] {
    assert!(start <= parent.len());
    assert!(len <= parent.len() - start);

    unsafe { std::slice::from_raw_parts(parent.as_ptr().add(start), len) }
}

const fn sub_slice_mut<T>(parent: &mut [T], start: usize, len: usize) -> &mut [T] {
    assert!(start <= parent.len());
    assert!(len <= parent.len() - start);

    unsafe { std::slice::from_raw_parts_mut(parent.as_mut_ptr().add(start), len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_number() {
        fn check_num(v: u128) {
            let mut f = CtfeFormatter::<48>::new();
            f.write_u128(v);
            assert_eq!(f.finish(), v.to_string());
        }

        check_num(0);
        check_num(1);
        check_num(7);
        check_num(10);
        check_num(11);
        check_num(10003);
        check_num(u128::MAX);
        check_num(u128::MAX - 1);
    }

    #[test]
    fn evaluates_in_const() {
        const MSG: CtfeFormatter<32> = {
            let mut fmt = CtfeFormatter::new();
            fmt.write_str("placeholder #");
            fmt.write_usize(3);
            fmt
        };

        assert_eq!(MSG.finish(), "placeholder #3");
        assert!(!MSG.is_truncated());
    }

    #[test]
    fn truncates_on_char_boundary() {
        let mut f = CtfeFormatter::<6>::new();
        f.write_str("abcd");
        f.write_str("éé");
        assert!(f.is_truncated());
        assert_eq!(f.finish(), "abcdé");

        f.write_str("x");
        assert_eq!(f.finish(), "abcdé");
    }
}
