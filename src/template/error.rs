use bracefmt_utils::ctfe::format::CtfeFormatter;

/// Capacity of the compile-time diagnostic buffer. Long enough for every message this module
/// can produce with 20-digit offsets.
pub const DIAGNOSTIC_CAP: usize = 160;

// === MalformedReason === //

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, thiserror::Error)]
pub enum MalformedReason {
    #[error("`{{` is never closed by a `}}`")]
    UnterminatedPlaceholder,
    #[error("the template ran out of placeholders")]
    MissingPlaceholder,
    #[error("`:` directives are not supported")]
    UnsupportedDirective,
    #[error("float precision is too large")]
    PrecisionTooLarge,
}

impl MalformedReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnterminatedPlaceholder => "`{` is never closed by a `}`",
            Self::MissingPlaceholder => "the template ran out of placeholders",
            Self::UnsupportedDirective => "`:` directives are not supported",
            Self::PrecisionTooLarge => "float precision is too large",
        }
    }
}

// === TemplateError === //

/// Everything that can be wrong with a template or with the arguments bound to it.
///
/// The type is `Copy` and all of its accessors are `const` so that it can be produced and
/// reported during constant evaluation.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("malformed template at placeholder #{placeholder} (offset {offset}): {reason}")]
    Malformed {
        placeholder: usize,
        offset: usize,
        reason: MalformedReason,
    },
    #[error("invalid digit in the precision of placeholder #{placeholder} (offset {offset})")]
    InvalidDigit { placeholder: usize, offset: usize },
    #[error("template has {placeholders} placeholder(s) but {arguments} argument(s) were supplied")]
    ArityMismatch { placeholders: usize, arguments: usize },
}

impl TemplateError {
    pub const fn malformed(placeholder: usize, offset: usize, reason: MalformedReason) -> Self {
        Self::Malformed {
            placeholder,
            offset,
            reason,
        }
    }

    /// The byte offset into the template that the error points at, if it points at one.
    pub const fn offset(&self) -> Option<usize> {
        match *self {
            Self::Malformed { offset, .. } | Self::InvalidDigit { offset, .. } => Some(offset),
            Self::ArityMismatch { .. } => None,
        }
    }

    /// Renders the same message as `Display`, but in a `const` context.
    pub const fn describe(&self) -> CtfeFormatter<DIAGNOSTIC_CAP> {
        let mut fmt = CtfeFormatter::new();

        match *self {
            Self::Malformed {
                placeholder,
                offset,
                reason,
            } => {
                fmt.write_str("malformed template at placeholder #");
                fmt.write_usize(placeholder);
                fmt.write_str(" (offset ");
                fmt.write_usize(offset);
                fmt.write_str("): ");
                fmt.write_str(reason.as_str());
            }
            Self::InvalidDigit {
                placeholder,
                offset,
            } => {
                fmt.write_str("invalid digit in the precision of placeholder #");
                fmt.write_usize(placeholder);
                fmt.write_str(" (offset ");
                fmt.write_usize(offset);
                fmt.write_char(')');
            }
            Self::ArityMismatch {
                placeholders,
                arguments,
            } => {
                fmt.write_str("template has ");
                fmt.write_usize(placeholders);
                fmt.write_str(" placeholder(s) but ");
                fmt.write_usize(arguments);
                fmt.write_str(" argument(s) were supplied");
            }
        }

        fmt
    }

    /// Aborts evaluation with this error's message. Inside a `const` item this surfaces as a
    /// compile error.
    #[track_caller]
    pub const fn raise(&self) -> ! {
        let msg = self.describe();
        panic!("{}", msg.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_message_matches_display() {
        let errors = [
            TemplateError::malformed(2, 17, MalformedReason::UnterminatedPlaceholder),
            TemplateError::malformed(0, 1, MalformedReason::UnsupportedDirective),
            TemplateError::malformed(4, 40, MalformedReason::MissingPlaceholder),
            TemplateError::malformed(1, 9, MalformedReason::PrecisionTooLarge),
            TemplateError::InvalidDigit {
                placeholder: 1,
                offset: 9,
            },
            TemplateError::ArityMismatch {
                placeholders: 3,
                arguments: 1,
            },
        ];

        for err in errors {
            let described = err.describe();
            assert!(!described.is_truncated());
            assert_eq!(described.finish(), err.to_string());
        }
    }

    #[test]
    fn reports_offsets() {
        assert_eq!(
            TemplateError::InvalidDigit {
                placeholder: 0,
                offset: 3
            }
            .offset(),
            Some(3)
        );
        assert_eq!(
            TemplateError::ArityMismatch {
                placeholders: 1,
                arguments: 0
            }
            .offset(),
            None
        );
    }

    #[test]
    #[should_panic(expected = "template has 2 placeholder(s) but 1 argument(s) were supplied")]
    fn raise_panics_with_message() {
        TemplateError::ArityMismatch {
            placeholders: 2,
            arguments: 1,
        }
        .raise();
    }
}
