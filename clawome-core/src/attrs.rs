const MAX_ATTR_VALUE_LEN: usize = 80;

/// One surfaced attribute, already classified for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrEntry {
    /// A key with no value worth showing (e.g. `disabled`), rendered bare.
    Bare(String),
    /// An ordinary `key="value"` pair, truncated to 80 chars if needed.
    Text(String, String),
    /// `href`/`src` pointing at a URL: rendered as a bare flag, since the
    /// destination itself is rarely useful to an agent.
    UrlFlag(String),
    /// `src` whose tail filename is short enough to be informative on its
    /// own (e.g. an `<img src="logo.png">`).
    UrlFilename(String, String),
}

/// Renders one attribute entry to its textual token, per the ATTRS
/// grammar in the textual output spec: bare `key`, or `key="value"` with
/// long values truncated to 80 characters plus an ellipsis.
pub fn format_attr_value(entry: &AttrEntry) -> String {
    match entry {
        AttrEntry::Bare(key) => key.clone(),
        AttrEntry::UrlFlag(key) => key.clone(),
        AttrEntry::UrlFilename(key, filename) => format!("{key}=\"{filename}\""),
        AttrEntry::Text(key, value) => {
            let truncated = truncate_attr_value(value);
            format!("{key}=\"{truncated}\"")
        }
    }
}

fn truncate_attr_value(value: &str) -> String {
    let mut chars = value.chars();
    let head: String = chars.by_ref().take(MAX_ATTR_VALUE_LEN).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Renders a tag's whole surfaced-attribute list as the comma-separated
/// string carried by a `NodeRecord`, e.g. `type="text", name="q", href`.
pub fn format_attrs(entries: &[AttrEntry]) -> String {
    entries
        .iter()
        .map(format_attr_value)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_value_truncated_with_ellipsis() {
        let value = "a".repeat(200);
        let entry = AttrEntry::Text("title".into(), value);
        let rendered = format_attr_value(&entry);
        assert!(rendered.ends_with('…'));
        assert_eq!(rendered.chars().count(), "title=\"".len() + 80 + 1 + 1);
    }

    #[test]
    fn url_renders_as_bare_flag() {
        let entry = AttrEntry::UrlFlag("href".into());
        assert_eq!(format_attr_value(&entry), "href");
    }

    #[test]
    fn short_src_filename_kept() {
        let entry = AttrEntry::UrlFilename("src".into(), "logo.png".into());
        assert_eq!(format_attr_value(&entry), "src=\"logo.png\"");
    }

    #[test]
    fn joins_with_comma_space() {
        let entries = vec![
            AttrEntry::Text("type".into(), "text".into()),
            AttrEntry::Bare("required".into()),
        ];
        assert_eq!(format_attrs(&entries), "type=\"text\", required");
    }
}
