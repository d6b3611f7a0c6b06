pub mod branch;
pub mod digits;
pub mod format;
