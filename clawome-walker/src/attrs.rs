use clawome_core::{format_attrs, AttrEntry, Config};
use clawome_dom::ElementData;

const MAX_INLINE_FILENAME_LEN: usize = 80;

/// Builds the pre-formatted surfaced-attribute string a `NodeRecord`
/// carries, applying the tag's `attrRules` plus `globalAttrs`, and the
/// URL-specific rendering rule for `href`/`src` from the ATTRS grammar
/// in §6.
pub fn format_surfaced_attrs(tag: &str, data: &ElementData, config: &Config) -> String {
    let keys = config.attrs_for_tag(tag);
    let mut entries = Vec::new();
    for key in keys {
        let Some(value) = data.attr(key) else { continue };
        if value.is_empty() && key != "href" && key != "src" {
            continue;
        }
        entries.push(classify_attr(key, value));
    }
    format_attrs(&entries)
}

fn classify_attr(key: &str, value: &str) -> AttrEntry {
    if (key == "href" || key == "src") && looks_like_url(value) {
        if key == "src" {
            if let Some(filename) = tail_filename(value) {
                if filename.chars().count() <= MAX_INLINE_FILENAME_LEN {
                    return AttrEntry::UrlFilename(key.to_string(), filename);
                }
            }
        }
        return AttrEntry::UrlFlag(key.to_string());
    }
    if value.is_empty() {
        return AttrEntry::Bare(key.to_string());
    }
    AttrEntry::Text(key.to_string(), value.to_string())
}

fn looks_like_url(value: &str) -> bool {
    !value.starts_with("data:")
}

fn tail_filename(value: &str) -> Option<String> {
    value.rsplit('/').next().filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawome_dom::Document;

    #[test]
    fn href_renders_as_bare_flag() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("a", body);
        doc.set_attr(a, "href", "https://example.com/some/deep/path?x=1");
        let config = Config::default();
        let (tag, data) = doc.node(a).as_element().unwrap();
        assert_eq!(format_surfaced_attrs(tag, data, &config), "href");
    }

    #[test]
    fn short_src_filename_kept() {
        let mut doc = Document::new();
        let body = doc.body();
        let img = doc.create_element("img", body);
        doc.set_attr(img, "src", "/static/logo.png");
        let config = Config::default();
        let (tag, data) = doc.node(img).as_element().unwrap();
        assert_eq!(format_surfaced_attrs(tag, data, &config), "src=\"logo.png\"");
    }

    #[test]
    fn data_url_is_not_treated_as_flag() {
        let mut doc = Document::new();
        let body = doc.body();
        let img = doc.create_element("img", body);
        doc.set_attr(img, "src", "data:image/png;base64,AAAA");
        let config = Config::default();
        let (tag, data) = doc.node(img).as_element().unwrap();
        assert!(format_surfaced_attrs(tag, data, &config).starts_with("src=\"data:"));
    }
}
