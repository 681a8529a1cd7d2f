//! Filename sanitization for exported documents.

/// Maps an arbitrary user-supplied string to a filesystem-safe token.
///
/// Steps, in order: spaces become `_`, `/` becomes `-`, `\` is removed,
/// every character that is not alphanumeric or one of `._-` is dropped,
/// then `__` and `--` are collapsed in a single left-to-right pass.
/// The collapse is deliberately NOT repeated to a fixpoint, so runs of
/// three or more separators are only partially collapsed. Preserved as-is
/// for output compatibility.
pub fn sanitize_filename(name: &str) -> String {
    let replaced = name.replace(' ', "_").replace('/', "-").replace('\\', "");
    let kept: String = replaced
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    kept.trim().replace("__", "_").replace("--", "-")
}

/// Computes the attachment filename for a Word export.
/// Empty (post-trim) topics fall back to the bare `mcqs.docx`.
pub fn download_filename(topic: &str) -> String {
    let topic = topic.trim();
    if topic.is_empty() {
        "mcqs.docx".to_string()
    } else {
        format!("{}_mcqs.docx", sanitize_filename(topic))
    }
}
