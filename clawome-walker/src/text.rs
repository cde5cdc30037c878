//! Pure string helpers used while assembling a node's collected text.
//! No tree-walking logic lives here; everything takes plain `&str`.

/// Joins text fragments the way a reader would expect inline content to
/// flow: a plain space between two Latin-script fragments, nothing
/// between two CJK fragments (CJK text has no word-spacing convention),
/// and nothing when either side is already empty.
pub fn join_parts(parts: impl IntoIterator<Item = String>) -> String {
    let mut out = String::new();
    for part in parts.into_iter() {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            let prev_is_cjk = out.chars().next_back().is_some_and(is_cjk);
            let next_is_cjk = part.chars().next().is_some_and(is_cjk);
            if !(prev_is_cjk && next_is_cjk) {
                out.push(' ');
            }
        }
        out.push_str(&part);
    }
    out
}

/// CJK script ranges plus full-width punctuation (CJK symbols/punctuation
/// and halfwidth/fullwidth forms), both of which `join_parts` treats as
/// needing no surrounding space.
fn is_cjk(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF
            | 0x3040..=0x30FF
            | 0xAC00..=0xD7A3
            | 0x3400..=0x4DBF
            | 0x3000..=0x303F
            | 0xFF00..=0xFFEF
    )
}

/// Truncates to at most `max_chars` characters, appending an ellipsis
/// when truncation actually happened. Operates on char boundaries so
/// multi-byte text is never split mid-codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

/// Collapses runs of ASCII whitespace into a single space and trims the
/// ends, the way raw DOM text nodes need normalizing before joining.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_fragments_get_a_space() {
        assert_eq!(join_parts(["Hello".to_string(), "world".to_string()]), "Hello world");
    }

    #[test]
    fn cjk_fragments_join_without_a_space() {
        assert_eq!(join_parts(["请".to_string(), "输入".to_string()]), "请输入");
    }

    #[test]
    fn cjk_and_fullwidth_punctuation_join_without_a_space() {
        assert_eq!(join_parts(["你好".to_string(), "。".to_string()]), "你好。");
    }

    #[test]
    fn empty_fragments_are_skipped() {
        assert_eq!(join_parts(["".to_string(), "x".to_string(), "".to_string()]), "x");
    }

    #[test]
    fn truncate_chars_adds_ellipsis_only_when_needed() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello…");
    }

    #[test]
    fn normalize_collapses_internal_whitespace() {
        assert_eq!(normalize_whitespace("  a   b\n c "), "a b c");
    }
}
