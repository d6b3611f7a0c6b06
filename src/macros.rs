/// Formats its arguments into a template literal that is parsed at compile time.
///
/// Placeholders are `{...}` spans matched to the arguments left to right. The directive between
/// the braces controls numeric rendering:
///
/// | Directive     | Effect                                   |
/// |---------------|------------------------------------------|
/// | `{}`          | default text (decimal for integers)      |
/// | `{0x}` `{0X}` | lower / upper case hex with `0x` marker  |
/// | `{0o}` `{0b}` | octal / binary with `0o` / `0b` marker   |
/// | `{.N}` `{0.N}`| `N` truncated fractional digits          |
///
/// ```
/// let text = bracefmt::format!("{} is {0x} or {0b}, and pi is about {.2}", "252", 252, 252, 3.14159);
/// assert_eq!(text, "252 is 0xfc or 0b11111100, and pi is about 3.14");
/// ```
///
/// A malformed template, or a placeholder count that differs from the argument count, is a
/// compile error:
///
/// ```compile_fail
/// let _ = bracefmt::format!("{} and {}", 1);
/// ```
///
/// ```compile_fail
/// let _ = bracefmt::format!("{.3x}", 1.0);
/// ```
#[macro_export]
macro_rules! format {
    ($template:literal $(, $arg:expr)* $(,)?) => {{
        const __BRACEFMT_TABLE: $crate::PlaceholderTable<{ $crate::__count_args!($($arg),*) }> =
            $crate::PlaceholderTable::compile($template);

        __BRACEFMT_TABLE.format([$(&$arg as &dyn $crate::Render),*])
    }};
}

/// Like [`format!`](crate::format), but writes the result to standard output followed by a
/// newline.
#[macro_export]
macro_rules! formatln {
    ($($tt:tt)*) => {
        ::std::println!("{}", $crate::format!($($tt)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __count_args {
    ($($arg:expr),*) => {
        <[()]>::len(&[$($crate::__unit!($arg)),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit {
    ($_:expr) => {
        ()
    };
}
