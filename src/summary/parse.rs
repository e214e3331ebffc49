//! Splitting a raw completion into the MOM and Action Items sections.

use serde::Serialize;

/// Literal section marker the model is instructed to emit.
pub const ACTION_ITEMS_MARKER: &str = "Action Items:";

/// Shown when the completion carries no "Action Items:" section.
pub const NO_ACTION_ITEMS_FALLBACK: &str = "No action items identified.";

/// The two sections of a generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MomSummary {
    pub minutes: String,
    pub action_items: String,
}

/// Partition a raw completion into minutes and action items.
///
/// Splits on the first occurrence of [`ACTION_ITEMS_MARKER`], trimming both
/// halves. When the marker is absent the whole trimmed text becomes the
/// minutes and the action items fall back to a fixed literal. Total over all
/// inputs, including the empty string. The "MOM:" header, when present, is
/// left in the minutes as-is.
pub fn split_completion(raw: &str) -> MomSummary {
    match raw.split_once(ACTION_ITEMS_MARKER) {
        Some((minutes, action_items)) => MomSummary {
            minutes: minutes.trim().to_string(),
            action_items: action_items.trim().to_string(),
        },
        None => MomSummary {
            minutes: raw.trim().to_string(),
            action_items: NO_ACTION_ITEMS_FALLBACK.to_string(),
        },
    }
}
