/// Split an opening crawl into display lines.
///
/// The catalog uses `\r\n` line breaks; blank lines separate paragraphs and
/// are kept.
pub fn crawl_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim_end).collect()
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
