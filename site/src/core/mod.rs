//! Pure page logic: records, escaping, formatters and the page registry.

pub mod escape;
pub mod format;
pub mod records;
pub mod registry;
pub mod settings;
