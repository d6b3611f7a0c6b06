//! Compile-time parsed string templates.
//!
//! A template is a string literal with `{...}` placeholders. [`format!`] parses it while the
//! crate is being compiled into a [`PlaceholderTable`], rejecting malformed templates and
//! argument-count mismatches as compile errors, then renders each argument through [`Render`]
//! and splices the results into the literal text.
//!
//! ```
//! let text = bracefmt::format!("{} items at {0X}", 3, 0xbeefu16);
//! assert_eq!(text, "3 items at 0xBEEF");
//! ```
//!
//! Templates used with an argument count only known at run time go through a [`TableCache`],
//! which parses each template once and reports problems as [`TemplateError`]s.

pub mod assemble;
mod macros;
pub mod render;
pub mod template;
mod util;

pub use {
    assemble::{RenderedArgs, Segments, assemble, render_arguments},
    bracefmt_utils::{ctfe::branch, switch},
    render::traits::{Render, render_to_string},
    template::{
        cache::TableCache,
        error::{MalformedReason, TemplateError},
        spec::{FormatSpec, MAX_PRECISION, Radix},
        table::{DynTable, Placeholder, PlaceholderTable, TableRef},
    },
};
