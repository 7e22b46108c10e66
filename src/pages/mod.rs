//! Page-level components.

pub mod search;
