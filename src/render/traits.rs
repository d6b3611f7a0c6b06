use std::{borrow::Cow, fmt, rc::Rc, sync::Arc};

use crate::{template::spec::FormatSpec, util::format::format_closure};

// === Render === //

/// A value that can be substituted into a template placeholder.
///
/// Built-in numbers and `bool` honor the placeholder's [`FormatSpec`]. Everything else renders
/// its ordinary textual form and ignores the directive. Types implementing [`fmt::Display`] can
/// opt in with [`render_via_display!`](crate::render_via_display).
///
/// Passing a value that does not implement `Render` is rejected at compile time:
///
/// ```compile_fail
/// struct Opaque;
///
/// let _ = bracefmt::format!("{}", Opaque);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not printable in a template placeholder",
    label = "this argument has no textual conversion",
    note = "implement `bracefmt::Render`, or use `bracefmt::render_via_display!` if it implements `Display`"
)]
pub trait Render {
    fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Produces the owned text of one argument.
pub fn render_to_string(arg: &dyn Render, spec: FormatSpec) -> String {
    format_closure(|f| arg.render(spec, f)).to_string()
}

// === Forwarding === //

impl<T: ?Sized + Render> Render for &T {
    fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(spec, f)
    }
}

impl<T: ?Sized + Render> Render for &mut T {
    fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(spec, f)
    }
}

macro_rules! impl_forwarding_render {
    ($($ptr:ident),* $(,)?) => {$(
        impl<T: ?Sized + Render> Render for $ptr<T> {
            fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (**self).render(spec, f)
            }
        }
    )*};
}

impl_forwarding_render!(Box, Rc, Arc);

// === Display-backed === //

/// Implements [`Render`] for types whose rendering is their [`Display`](std::fmt::Display)
/// output, regardless of the placeholder's directive.
///
/// ```
/// use std::fmt;
///
/// struct Pair(i32, f32);
///
/// impl fmt::Display for Pair {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "[val1: {}, val2: {}]", self.0, self.1)
///     }
/// }
///
/// bracefmt::render_via_display!(Pair);
///
/// assert_eq!(
///     bracefmt::format!("This {} is a object.", Pair(1, 2.0)),
///     "This [val1: 1, val2: 2] is a object.",
/// );
/// ```
#[macro_export]
macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Render for $ty {
            fn render(
                &self,
                _spec: $crate::FormatSpec,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    )*};
}

render_via_display!(str, String, char, Cow<'_, str>, std::path::Display<'_>);

impl<T: ?Sized> Render for *const T {
    fn render(&self, _spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(self, f)
    }
}

impl<T: ?Sized> Render for *mut T {
    fn render(&self, _spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(self, f)
    }
}
