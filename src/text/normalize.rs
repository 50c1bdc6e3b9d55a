// Newline and whitespace normalization.

/// Normalize raw document text.
///
/// CRLF becomes LF, runs of spaces and tabs collapse to a single space, and
/// leading/trailing whitespace is trimmed. Newlines are kept so paragraph
/// boundaries survive.
pub fn clean_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n");
    let mut out = String::with_capacity(unified.len());
    let mut in_run = false;

    for c in unified.chars() {
        if c == ' ' || c == '\t' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out.trim().to_string()
}

/// Split normalized text into paragraphs on blank lines.
///
/// Each paragraph is trimmed and empty ones are dropped. When nothing is
/// left the whole text is returned as the only paragraph, so the result is
/// never empty.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        vec![text]
    } else {
        paragraphs
    }
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
