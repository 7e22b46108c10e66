//! Display formatting for result cards and the count label.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Delay between consecutive card entrance animations.
pub const CARD_DELAY_STEP_MS: u64 = 50;

/// Format a similarity score to 4 decimal places.
///
/// Absent, zero, and NaN scores all render as `"N/A"`: a zero score is
/// deliberately indistinguishable from a missing one. See DESIGN.md
/// before changing that.
#[allow(clippy::float_cmp)]
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s != 0.0 && !s.is_nan() => format!("{s:.4}"),
        _ => "N/A".to_owned(),
    }
}

/// Pick the card title: `filename`, else `name`, else `"Untitled"`.
/// Empty strings count as absent.
pub fn display_name(filename: Option<&str>, name: Option<&str>) -> String {
    non_empty(filename)
        .or_else(|| non_empty(name))
        .unwrap_or("Untitled")
        .to_owned()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Count label under the results heading: `"1 result"`, `"5 results"`.
pub fn results_count_label(count: u64) -> String {
    if count == 1 {
        "1 result".to_owned()
    } else {
        format!("{count} results")
    }
}

/// Entrance-animation delay for the card at `index` (server rank).
/// Non-decreasing in index for the cascading reveal.
pub fn card_delay_ms(index: usize) -> u64 {
    index as u64 * CARD_DELAY_STEP_MS
}
