//! Transcript summarization prompt.

/// Model requested for summaries.
pub const SUMMARY_MODEL: &str = "gemini-1.5-flash";

/// Stored when the model returned nothing usable.
pub const EMPTY_SUMMARY: &str = "No summary generated";

const LABEL: &str = "summary:";

/// Build the summarization prompt for a transcript.
pub fn summary_prompt(transcript: &str) -> String {
    format!(
        "Please provide a concise summary (2-3 sentences) of this conversation transcript:\n\n{}\n\nSummary:",
        transcript
    )
}

/// Drop everything up to and including the last `Summary:` label.
///
/// Models sometimes echo the label from the prompt. Matching is
/// case-insensitive; the result is trimmed.
pub fn strip_summary_label(text: &str) -> String {
    let lower = text.to_ascii_lowercase();
    let rest = match lower.rfind(LABEL) {
        Some(idx) => &text[idx + LABEL.len()..],
        None => text,
    };
    rest.trim().to_string()
}

/// Clean a model reply into a storable summary.
pub fn clean_summary(reply: &str) -> String {
    let summary = strip_summary_label(reply);
    if summary.is_empty() {
        EMPTY_SUMMARY.to_string()
    } else {
        summary
    }
}
