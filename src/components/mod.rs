//! UI components for the search page.

pub mod result_card;
pub mod results_panel;
pub mod search_form;
pub mod status_panels;
