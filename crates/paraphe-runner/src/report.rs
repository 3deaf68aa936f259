//! Conformance matrix row rendering.
//!
//! Every implementation in the matrix prints one row in the same fixed
//! format, so rows from independent runs concatenate into a readable
//! comparison table:
//!
//! ```text
//! |ring           | V | X | V |
//! ```

use paraphe_core::Outcome;

/// Marker cell for an accepted vector.
pub const ACCEPT_MARKER: &str = " V |";

/// Marker cell for a rejected vector.
pub const REJECT_MARKER: &str = " X |";

/// Width of the implementation-label cell.
pub const LABEL_WIDTH: usize = 15;

/// Render one matrix row: a labelled cell followed by one marker per
/// outcome, in corpus order.
#[must_use]
pub fn render_row(label: &str, outcomes: &[Outcome]) -> String {
    let mut row = format!("|{label:<LABEL_WIDTH$}|");
    for outcome in outcomes {
        row.push_str(if outcome.is_accept() {
            ACCEPT_MARKER
        } else {
            REJECT_MARKER
        });
    }
    row
}
