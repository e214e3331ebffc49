//! Prompt construction and response parsing for MOM generation.
//!
//! Both halves are pure string functions: the prompt builder renders a fixed
//! instruction template around the notes, and the parser splits the returned
//! text on the literal "Action Items:" marker.

mod parse;
mod prompt;

pub use parse::{split_completion, MomSummary, ACTION_ITEMS_MARKER, NO_ACTION_ITEMS_FALLBACK};
pub use prompt::{build_mom_prompt, word_budget};
