//! Deterministic prompt template for MOM and Action Items generation.

/// Target word budget for the combined MOM and Action Items output:
/// 10% of the whitespace-delimited word count of the notes, rounded down.
///
/// May be 0 for very short input; the budget is embedded in the template
/// verbatim either way.
pub fn word_budget(notes: &str) -> usize {
    notes.split_whitespace().count() / 10
}

/// Build the instruction prompt for a set of meeting notes.
///
/// Pure function of its input. The notes are embedded verbatim, without
/// sanitization, so pasted output from a prior run (which itself contains an
/// "Action Items:" header) is passed through unchanged.
pub fn build_mom_prompt(notes: &str) -> String {
    let budget = word_budget(notes);
    format!(
        "As a Natural Language Processing expert, please generate a structured summary \
from the following meeting notes. The summary should include both Minutes of Meeting \
(MOM) and Action Items, adhering to the following guidelines:\n\
\n\
1. **Concise Output:**\n\
   - Ensure that the total length of the MOM and Action Items does not exceed {budget} words.\n\
   - Focus only on key points, providing a brief yet comprehensive summary without \
additional details or explanation.\n\
\n\
2. **Minutes of Meeting (MOM):**\n\
   - List only the essential outcomes, decisions, and agreements reached in the meeting.\n\
   - Avoid summarizing discussion points; instead, state the final conclusions or \
results as the MOM.\n\
\n\
3. **Action Items:**\n\
   - List specific, actionable tasks that arose from the meeting, clearly outlining \
any responsibilities mentioned.\n\
   - Each action item should be directly tied to the decisions or outcomes noted in the MOM.\n\
\n\
The output should begin with \"MOM:\" followed by numbered points for each item. \
After MOM, provide the \"Action Items:\" as a separate list, also with numbered points.\n\
\n\
Meeting Notes:\n\
{notes}\n\
\n\
Generate the MOM and Action Items based on these instructions."
    )
}
