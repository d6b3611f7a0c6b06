use std::fmt;

use bracefmt::{
    FormatSpec, MalformedReason, PlaceholderTable, Radix, Render, TableCache, TemplateError,
    branch::{case, default, if_},
    render_via_display, switch,
};

struct Celsius(f64);

impl Render for Celsius {
    fn render(&self, spec: FormatSpec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(spec, f)?;
        f.write_str("°C")
    }
}

struct TestStruct {
    val1: i32,
    val2: f32,
}

impl fmt::Display for TestStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[val1: {}, val2: {}]", self.val1, self.val2)
    }
}

render_via_display!(TestStruct);

#[test]
fn no_placeholders_round_trip() {
    assert_eq!(bracefmt::format!("plain text"), "plain text");
    assert_eq!(bracefmt::format!(""), "");
    assert_eq!(bracefmt::format!("a } b"), "a } b");
}

#[test]
fn decimal_default() {
    assert_eq!(bracefmt::format!("{}", 252), "252");
    assert_eq!(bracefmt::format!("{}", -252i64), "-252");
    assert_eq!(bracefmt::format!("{} {}", true, false), "1 0");
}

#[test]
fn base_conversions() {
    assert_eq!(bracefmt::format!("{0x}", 252), "0xfc");
    assert_eq!(bracefmt::format!("{0X}", 252), "0xFC");
    assert_eq!(bracefmt::format!("{0b}", 252), "0b11111100");
    assert_eq!(bracefmt::format!("{0o}", 252), "0o374");
}

#[test]
fn float_precision() {
    assert_eq!(bracefmt::format!("{.3}", 3.1234123), "3.123");
    assert_eq!(bracefmt::format!("{0.3}", 3.1234123), "3.123");
    assert_eq!(bracefmt::format!("{.3}", 0.05), "0.050");
    assert_eq!(
        bracefmt::format!("{.20}", 0.9999999999999999),
        "0.99999999999999990000"
    );
}

#[test]
fn reference_usage() {
    assert_eq!(
        bracefmt::format!(
            "Test and stuff {} {} but also {0x} and {0X} and {0b} and {0o} or {.3}",
            "and this",
            252,
            252,
            252,
            252,
            252,
            3.1234123,
        ),
        "Test and stuff and this 252 but also 0xfc and 0xFC and 0b11111100 and 0o374 or 3.123",
    );

    assert_eq!(
        bracefmt::format!("This {} is a object.", TestStruct { val1: 1, val2: 2.0 }),
        "This [val1: 1, val2: 2] is a object.",
    );

    let value = 7;
    let ptr: *const i32 = &value;
    assert_eq!(
        bracefmt::format!("Pointer address = {}", ptr),
        format!("Pointer address = {ptr:p}"),
    );
}

#[test]
fn custom_render_sees_directive() {
    assert_eq!(
        bracefmt::format!("{} / {.1}", Celsius(21.75), Celsius(21.75)),
        "21.75°C / 21.7°C"
    );
}

#[test]
fn owned_and_borrowed_arguments() {
    let name = String::from("bracefmt");
    let name_ref = &name;

    assert_eq!(
        bracefmt::format!("{}:{}:{}", name, name_ref, String::from("tmp")),
        "bracefmt:bracefmt:tmp"
    );
}

#[test]
fn fewer_arguments_than_placeholders() {
    assert_eq!(
        PlaceholderTable::<1>::parse("{} and {}"),
        Err(TemplateError::ArityMismatch {
            placeholders: 2,
            arguments: 1
        })
    );

    let mut cache = TableCache::new();
    assert_eq!(
        cache.format("{} and {}", &[&1]),
        Err(TemplateError::ArityMismatch {
            placeholders: 2,
            arguments: 1
        })
    );
}

#[test]
fn more_arguments_than_placeholders() {
    assert_eq!(
        PlaceholderTable::<3>::parse("{} only one"),
        Err(TemplateError::malformed(
            1,
            11,
            MalformedReason::MissingPlaceholder
        ))
    );

    let mut cache = TableCache::new();
    assert_eq!(
        cache.format("{}", &[&1, &2]),
        Err(TemplateError::malformed(
            1,
            2,
            MalformedReason::MissingPlaceholder
        ))
    );
}

#[test]
fn table_construction_is_pure() {
    const TEMPLATE: &str = "{0b}{0o}{.4}";

    assert_eq!(
        PlaceholderTable::<3>::parse(TEMPLATE),
        PlaceholderTable::<3>::parse(TEMPLATE)
    );
    assert_eq!(
        PlaceholderTable::<3>::compile(TEMPLATE).placeholders()[2].spec,
        FormatSpec::Float { precision: 4 }
    );
    assert_eq!(
        PlaceholderTable::<3>::compile(TEMPLATE).placeholders()[0].spec,
        FormatSpec::Integer(Radix::Binary)
    );
}

#[test]
fn branch_utilities_are_reexported() {
    const HEX: bool = true;

    let text: String = if_::<HEX, _, _>(|| bracefmt::format!("{0x}", 255), || 255);
    assert_eq!(text, "0xff");

    let picked: &str = switch!(case::<false, _>(|| 0u8), default(|| "fallback"));
    assert_eq!(picked, "fallback");
}

#[test]
fn formatln_compiles() {
    bracefmt::formatln!("{} + {} = {}", 1, 1, 2);
}
