use std::fmt;

use bracefmt::{PlaceholderTable, TableCache, branch::when, formatln, render_via_display};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DUMP_TABLES: bool = cfg!(debug_assertions);

const REFERENCE: &str = "Test and stuff {} {} but also {0x} and {0X} and {0b} and {0o} or {.3}";

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

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    formatln!(
        "Test and stuff {} {} but also {0x} and {0X} and {0b} and {0o} or {.3}",
        "and this",
        252,
        252,
        252,
        252,
        252,
        3.1234123,
    );

    let val = Box::new(0i32);
    let ptr: *const i32 = &*val;
    formatln!("Pointer address = {}", ptr);

    formatln!("This {} is a object.", TestStruct { val1: 1, val2: 2.0 });

    let mut cache = TableCache::new();
    for (name, count) in [("apples", 3u32), ("pears", 12)] {
        println!("{}", cache.format("{} in stock: {} ({0b})", &[&name, &count, &count])?);
    }

    when::<DUMP_TABLES, _>(|| dump_tables(&cache));

    Ok(())
}

fn dump_tables(cache: &TableCache) {
    const TABLE: PlaceholderTable<7> = PlaceholderTable::compile(REFERENCE);

    tracing::info!("reference table:\n{}", TABLE.as_table_ref());

    match serde_json::to_string(&TABLE.as_table_ref()) {
        Ok(json) => tracing::debug!("reference table as JSON: {json}"),
        Err(err) => tracing::warn!("failed to serialize the reference table: {err}"),
    }

    tracing::info!("{} cached table(s)", cache.len());
}
