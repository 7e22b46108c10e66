//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The whole page is driven by one `SearchState` provided via Leptos
//! context, so the form, panels, and result grid stay in sync without
//! prop drilling.

pub mod search;
