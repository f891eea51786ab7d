//! Short text previews for narration panels and logs.

/// Appended when a preview is truncated.
pub const ELLIPSIS: &str = "…";

/// Collapses whitespace and truncates to at most `max_chars` characters.
///
/// Truncated previews end with an ellipsis, which counts toward the limit.
pub fn preview_text(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    if max_chars == 0 {
        return String::new();
    }

    let kept: String = collapsed.chars().take(max_chars - 1).collect();
    format!("{}{}", kept.trim_end(), ELLIPSIS)
}
