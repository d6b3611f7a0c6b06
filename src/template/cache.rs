use derive_where::derive_where;
use hashbrown::{HashMap, hash_map::Entry};

use super::{error::TemplateError, table::DynTable};
use crate::render::traits::Render;

/// Identifies a template by the address and length of its text plus the arity it is used with.
///
/// Two equal literals at different addresses get separate entries, which only costs a second
/// parse.
#[derive(Debug, Copy, Clone)]
#[derive_where(Hash, Eq, PartialEq)]
struct TemplateKey {
    #[derive_where(skip)]
    text: &'static str,
    addr: usize,
    len: usize,
    arity: usize,
}

impl TemplateKey {
    fn new(text: &'static str, arity: usize) -> Self {
        Self {
            text,
            addr: text.as_ptr() as usize,
            len: text.len(),
            arity,
        }
    }
}

/// Memoizes [`DynTable`]s for templates whose arity is only known at run time.
///
/// Each distinct (template, arity) pair is parsed once; later lookups reuse the stored table.
/// Failed parses are not stored.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: HashMap<TemplateKey, DynTable>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(
        &mut self,
        template: &'static str,
        arity: usize,
    ) -> Result<&DynTable, TemplateError> {
        match self.tables.entry(TemplateKey::new(template, arity)) {
            Entry::Occupied(entry) => {
                log::trace!("reusing table for {:?}", entry.key().text);
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let table = DynTable::parse(template, arity)?;
                log::debug!("built table with {arity} placeholder(s) for {template:?}");
                Ok(&*entry.insert(table))
            }
        }
    }

    pub fn format(
        &mut self,
        template: &'static str,
        args: &[&dyn Render],
    ) -> Result<String, TemplateError> {
        self.table(template, args.len())?.format(args)
    }
}
