use either::Either;
use smallvec::SmallVec;

use crate::{
    render::traits::{Render, render_to_string},
    template::{
        error::TemplateError,
        table::{DynTable, Placeholder, PlaceholderTable, TableRef},
    },
};

/// Rendered arguments of a single call. Most templates have only a handful of placeholders.
pub type RenderedArgs = SmallVec<[String; 8]>;

// === Segments === //

/// Walks a template left to right, yielding literal text and placeholders in turn.
///
/// Empty literal runs (between adjacent placeholders, or at either end) are skipped.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    template: &'a str,
    placeholders: std::slice::Iter<'a, Placeholder>,
    cursor: usize,
    pending: Option<&'a Placeholder>,
}

impl<'a> Segments<'a> {
    pub fn new(table: TableRef<'a>) -> Self {
        Self {
            template: table.template,
            placeholders: table.placeholders.iter(),
            cursor: 0,
            pending: None,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Either<&'a str, &'a Placeholder>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(placeholder) = self.pending.take() {
            self.cursor = placeholder.end + 1;
            return Some(Either::Right(placeholder));
        }

        match self.placeholders.next() {
            Some(placeholder) => {
                let literal = &self.template[self.cursor..placeholder.begin];

                if literal.is_empty() {
                    self.cursor = placeholder.end + 1;
                    Some(Either::Right(placeholder))
                } else {
                    self.pending = Some(placeholder);
                    Some(Either::Left(literal))
                }
            }
            None => {
                let tail = &self.template[self.cursor..];
                self.cursor = self.template.len();

                (!tail.is_empty()).then_some(Either::Left(tail))
            }
        }
    }
}

// === Assembly === //

/// Renders each argument with the directive of the placeholder at the same index.
///
/// Fails when the argument count differs from the placeholder count.
pub fn render_arguments(
    table: TableRef<'_>,
    args: &[&dyn Render],
) -> Result<RenderedArgs, TemplateError> {
    check_arity(table, args.len())?;
    Ok(render_all(table, args))
}

/// Substitutes `rendered[i]` for placeholder `i`, keeping all literal text byte-for-byte.
///
/// Fails when the number of rendered arguments differs from the placeholder count.
pub fn assemble<S: AsRef<str>>(
    table: TableRef<'_>,
    rendered: &[S],
) -> Result<String, TemplateError> {
    check_arity(table, rendered.len())?;
    Ok(splice(table, rendered))
}

fn check_arity(table: TableRef<'_>, arguments: usize) -> Result<(), TemplateError> {
    if table.arity() != arguments {
        return Err(TemplateError::ArityMismatch {
            placeholders: table.arity(),
            arguments,
        });
    }

    Ok(())
}

// Both helpers below expect `table.arity()` items.

fn render_all(table: TableRef<'_>, args: &[&dyn Render]) -> RenderedArgs {
    table
        .placeholders
        .iter()
        .zip(args)
        .map(|(placeholder, arg)| {
            let text = render_to_string(*arg, placeholder.spec);
            log::trace!(
                "`{}` rendered as {text:?}",
                placeholder.source(table.template)
            );
            text
        })
        .collect()
}

fn splice<S: AsRef<str>>(table: TableRef<'_>, rendered: &[S]) -> String {
    let placeholder_len = table
        .placeholders
        .iter()
        .map(|p| p.end + 1 - p.begin)
        .sum::<usize>();

    let rendered_len = rendered.iter().map(|s| s.as_ref().len()).sum::<usize>();

    let mut output = String::with_capacity(table.template.len() - placeholder_len + rendered_len);
    let mut rendered = rendered.iter();

    for segment in Segments::new(table) {
        match segment {
            Either::Left(literal) => output.push_str(literal),
            Either::Right(_) => {
                if let Some(text) = rendered.next() {
                    output.push_str(text.as_ref());
                }
            }
        }
    }

    output
}

impl TableRef<'_> {
    pub fn format(&self, args: &[&dyn Render]) -> Result<String, TemplateError> {
        let rendered = render_arguments(*self, args)?;
        Ok(splice(*self, &rendered))
    }
}

impl DynTable {
    pub fn format(&self, args: &[&dyn Render]) -> Result<String, TemplateError> {
        self.as_table_ref().format(args)
    }
}

impl<const K: usize> PlaceholderTable<K> {
    /// Formats `args` into the template. The argument count is checked by the type system.
    pub fn format(&self, args: [&dyn Render; K]) -> String {
        let table = self.as_table_ref();
        splice(table, &render_all(table, &args))
    }
}
