use std::fmt;

/// Adapts a closure over a [`fmt::Formatter`] into a [`fmt::Display`] value.
#[derive(Copy, Clone)]
pub struct FormatterFn<F>(pub F);

impl<F> fmt::Display for FormatterFn<F>
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

pub fn format_closure<F>(f: F) -> FormatterFn<F>
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result,
{
    FormatterFn(f)
}

#[doc(hidden)]
pub mod lazy_format_internals {
    pub use {
        super::format_closure,
        std::{fmt::Formatter, write},
    };
}

macro_rules! lazy_format {
	($($tt:tt)*) => {
		$crate::util::format::lazy_format_internals::format_closure(move |f: &mut $crate::util::format::lazy_format_internals::Formatter| {
			$crate::util::format::lazy_format_internals::write!(f, $($tt)*)
		})
	};
}

pub(crate) use lazy_format;

/// Displays every item of an iterator, with `sep` between consecutive items.
#[derive(Debug)]
pub struct FmtJoin<I> {
    iter: I,
    sep: &'static str,
}

impl<I> FmtJoin<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>, sep: &'static str) -> Self {
        Self {
            iter: iter.into_iter(),
            sep,
        }
    }
}

impl<I> fmt::Display for FmtJoin<I>
where
    I: Clone + Iterator,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter.clone().enumerate() {
            if i > 0 {
                f.write_str(self.sep)?;
            }

            fmt::Display::fmt(&item, f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_lazily_formatted_items() {
        let values = [1, 2, 3];
        let items = FmtJoin::new(values.iter().map(|v| lazy_format!("<{v}>")), ", ");
        assert_eq!(items.to_string(), "<1>, <2>, <3>");
        assert_eq!(FmtJoin::new(std::iter::empty::<u8>(), ", ").to_string(), "");
    }
}
