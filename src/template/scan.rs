use super::error::{MalformedReason, TemplateError};

/// Byte offsets of a `{`...`}` pair within a template.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Span {
    /// Offset of the opening `{`.
    pub begin: usize,
    /// Offset of the closing `}`.
    pub end: usize,
}

impl Span {
    /// The directive body, i.e. the offsets strictly between the braces.
    pub const fn body(self) -> (usize, usize) {
        (self.begin + 1, self.end)
    }
}

const fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    let mut i = from;

    while i < bytes.len() {
        if bytes[i] == needle {
            return Some(i);
        }

        i += 1;
    }

    None
}

/// Finds the first placeholder at or after `cursor`.
///
/// `index` is the ordinal of the placeholder being looked for and is only used to annotate
/// errors. Returns `Ok(None)` once the template has no further `{`.
pub const fn next_placeholder(
    template: &str,
    cursor: usize,
    index: usize,
) -> Result<Option<Span>, TemplateError> {
    let bytes = template.as_bytes();

    let Some(begin) = find_byte(bytes, cursor, b'{') else {
        return Ok(None);
    };

    let Some(end) = find_byte(bytes, begin + 1, b'}') else {
        return Err(TemplateError::malformed(
            index,
            begin,
            MalformedReason::UnterminatedPlaceholder,
        ));
    };

    Ok(Some(Span { begin, end }))
}

/// Counts the placeholders of `template`, validating that each of them is closed.
pub const fn count_placeholders(template: &str) -> Result<usize, TemplateError> {
    let mut cursor = 0;
    let mut count = 0;

    loop {
        match next_placeholder(template, cursor, count) {
            Ok(Some(span)) => {
                cursor = span.end + 1;
                count += 1;
            }
            Ok(None) => return Ok(count),
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_placeholders_in_order() {
        let template = "a {} b {0x} c";

        let first = next_placeholder(template, 0, 0).unwrap().unwrap();
        assert_eq!(first, Span { begin: 2, end: 3 });

        let second = next_placeholder(template, first.end + 1, 1).unwrap().unwrap();
        assert_eq!(second, Span { begin: 7, end: 10 });
        assert_eq!(second.body(), (8, 10));

        assert_eq!(next_placeholder(template, second.end + 1, 2), Ok(None));
    }

    #[test]
    fn stray_closing_brace_is_literal() {
        assert_eq!(
            next_placeholder("} {}", 0, 0),
            Ok(Some(Span { begin: 2, end: 3 }))
        );
        assert_eq!(count_placeholders("}}"), Ok(0));
    }

    #[test]
    fn counts() {
        assert_eq!(count_placeholders(""), Ok(0));
        assert_eq!(count_placeholders("plain text"), Ok(0));
        assert_eq!(count_placeholders("{}{}{.3} and {0b}"), Ok(4));
        assert_eq!(count_placeholders("{a{b}"), Ok(1));
    }

    #[test]
    fn unterminated_placeholder() {
        assert_eq!(
            count_placeholders("ok {} then {0x"),
            Err(TemplateError::malformed(
                1,
                11,
                MalformedReason::UnterminatedPlaceholder
            ))
        );
    }
}
