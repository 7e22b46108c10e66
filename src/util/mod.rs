//! Small shared helpers: display formatting and browser DOM access.

pub mod dom;
pub mod format;
