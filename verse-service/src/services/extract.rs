//! Extraction of a JSON candidate from free-form model output.

/// Returns the widest span bounded by the first `{` and the last `}`.
///
/// The span is not necessarily balanced JSON. Callers must attempt strict
/// parsing and report failures with the span attached. Keeping the greedy
/// bounds (rather than brace matching) means prose between two objects, or
/// braces inside string values, end up inside the candidate; that lenient
/// behavior is part of the endpoint contract.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if end < start {
        return None;
    }

    Some(&text[start..=end])
}
