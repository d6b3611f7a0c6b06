pub mod cache;
pub mod error;
pub mod scan;
pub mod spec;
pub mod table;
