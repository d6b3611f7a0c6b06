use std::fmt;

use serde::Serialize;

use super::{
    error::{MalformedReason, TemplateError},
    scan::{count_placeholders, next_placeholder},
    spec::{FormatSpec, parse_spec},
};
use crate::util::format::{FmtJoin, lazy_format};

// === Placeholder === //

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize)]
pub struct Placeholder {
    /// Offset of the opening `{`.
    pub begin: usize,
    /// Offset of the closing `}`.
    pub end: usize,
    pub spec: FormatSpec,
}

impl Placeholder {
    const EMPTY: Self = Self {
        begin: 0,
        end: 0,
        spec: FormatSpec::Unspecified,
    };

    /// The placeholder's text in `template`, braces included.
    pub fn source<'a>(&self, template: &'a str) -> &'a str {
        &template[self.begin..=self.end]
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}] {}", self.begin, self.end, self.spec)
    }
}

/// Scans `template` and fills every slot of `out`, one placeholder per slot.
///
/// Surplus placeholders are an [`ArityMismatch`](TemplateError::ArityMismatch). Running out of
/// placeholders before every slot is filled is a [`MissingPlaceholder`](MalformedReason) error
/// at the end of the template.
const fn fill_placeholders(template: &str, out: &mut [Placeholder]) -> Result<(), TemplateError> {
    let found = match count_placeholders(template) {
        Ok(found) => found,
        Err(err) => return Err(err),
    };

    if found > out.len() {
        return Err(TemplateError::ArityMismatch {
            placeholders: found,
            arguments: out.len(),
        });
    }

    let mut cursor = 0;
    let mut i = 0;

    while i < out.len() {
        let span = match next_placeholder(template, cursor, i) {
            Ok(Some(span)) => span,
            Ok(None) => {
                return Err(TemplateError::malformed(
                    i,
                    template.len(),
                    MalformedReason::MissingPlaceholder,
                ));
            }
            Err(err) => return Err(err),
        };

        let spec = match parse_spec(template, span, i) {
            Ok(spec) => spec,
            Err(err) => return Err(err),
        };

        out[i] = Placeholder {
            begin: span.begin,
            end: span.end,
            spec,
        };

        cursor = span.end + 1;
        i += 1;
    }

    Ok(())
}

// === PlaceholderTable === //

/// The placeholders of a template whose arity is known at compile time.
///
/// [`format!`](crate::format) builds one of these in a `const` item, so every call site parses
/// its template exactly once, during compilation.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct PlaceholderTable<const K: usize> {
    template: &'static str,
    placeholders: [Placeholder; K],
}

impl<const K: usize> PlaceholderTable<K> {
    pub const fn parse(template: &'static str) -> Result<Self, TemplateError> {
        let mut placeholders = [Placeholder::EMPTY; K];

        match fill_placeholders(template, &mut placeholders) {
            Ok(()) => Ok(Self {
                template,
                placeholders,
            }),
            Err(err) => Err(err),
        }
    }

    /// Like [`parse`](Self::parse) but panics on error, which turns into a compile error when
    /// evaluated in a `const` item.
    #[track_caller]
    pub const fn compile(template: &'static str) -> Self {
        match Self::parse(template) {
            Ok(table) => table,
            Err(err) => err.raise(),
        }
    }

    pub const fn template(&self) -> &'static str {
        self.template
    }

    pub const fn placeholders(&self) -> &[Placeholder; K] {
        &self.placeholders
    }

    pub const fn as_table_ref(&self) -> TableRef<'_> {
        TableRef {
            template: self.template,
            placeholders: &self.placeholders,
        }
    }
}

// === DynTable === //

/// The placeholders of a template whose arity is only known at run time.
///
/// Usually obtained through a [`TableCache`](super::cache::TableCache) so that it is built once
/// per template.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct DynTable {
    template: &'static str,
    placeholders: Box<[Placeholder]>,
}

impl DynTable {
    pub fn parse(template: &'static str, arity: usize) -> Result<Self, TemplateError> {
        let mut placeholders = vec![Placeholder::EMPTY; arity].into_boxed_slice();
        fill_placeholders(template, &mut placeholders)?;

        Ok(Self {
            template,
            placeholders,
        })
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn as_table_ref(&self) -> TableRef<'_> {
        TableRef {
            template: self.template,
            placeholders: &self.placeholders,
        }
    }
}

// === TableRef === //

/// A borrowed view of either kind of table.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize)]
pub struct TableRef<'a> {
    pub template: &'a str,
    pub placeholders: &'a [Placeholder],
}

impl TableRef<'_> {
    pub fn arity(&self) -> usize {
        self.placeholders.len()
    }
}

impl fmt::Display for TableRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} ({} placeholders)", self.template, self.arity())?;

        let lines = FmtJoin::new(
            self.placeholders
                .iter()
                .enumerate()
                .map(|(i, p)| lazy_format!("  #{i} {p}")),
            "\n",
        );

        fmt::Display::fmt(&lines, f)
    }
}
