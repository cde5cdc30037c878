use clawome_core::Config;
use clawome_dom::{Document, ElementData, NodeId};
use regex::Regex;

/// Looks for `{prefix}-name` inside the class string, returning `name`.
pub fn icon_from_class_prefix(data: &ElementData, config: &Config) -> Option<String> {
    for class in &data.classes {
        for prefix in &config.icon_prefixes {
            let needle = format!("{prefix}-");
            if let Some(rest) = class.strip_prefix(needle.as_str()) {
                if !rest.is_empty() {
                    return Some(rest.to_string());
                }
            }
        }
    }
    None
}

/// Matches a "material icon"-style class (`material-icons`, ...) with
/// short ligature text content, e.g. `<i class="material-icons">search</i>`.
pub fn icon_from_material_class(
    data: &ElementData,
    own_text: &str,
    config: &Config,
) -> Option<String> {
    let trimmed = own_text.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 24 {
        return None;
    }
    let class_string = data.class_string();
    for pattern in &config.material_classes {
        if let Ok(re) = Regex::new(pattern) {
            if re.is_match(&class_string) {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Descends into `id` looking for `<svg><use href="#icon-name">`, then
/// `<svg><title>`.
pub fn icon_from_svg_descendant(doc: &Document, id: NodeId) -> Option<String> {
    for descendant in doc.descendants(id) {
        if let Some((tag, data)) = doc.node(descendant).as_element() {
            if tag == "use" {
                if let Some(href) = data.attr("href").or_else(|| data.attr("xlink:href")) {
                    if let Some(name) = href.strip_prefix('#') {
                        if !name.is_empty() {
                            return Some(name.to_string());
                        }
                    }
                }
            }
            if tag == "title" {
                if let Some(text) = first_text_child(doc, descendant) {
                    if !text.is_empty() {
                        return Some(text);
                    }
                }
            }
        }
    }
    None
}

fn first_text_child(doc: &Document, id: NodeId) -> Option<String> {
    doc.node(id)
        .children()
        .iter()
        .find_map(|&child| doc.node(child).text_content().map(|t| t.trim().to_string()))
        .filter(|t| !t.is_empty())
}

/// Walks up to `max_ancestors` ancestors from `id` looking for a
/// `semanticKeywords` token in the ancestor's class string (§4.2: "one
/// for non-interactive" elements, more for elements already believed
/// interactive, since a clickable icon's semantic container tends to sit
/// further up the tree than a purely decorative one).
pub fn icon_from_ancestor_keyword(
    doc: &Document,
    id: NodeId,
    config: &Config,
    max_ancestors: usize,
) -> Option<String> {
    let mut current = doc.parent_of(id)?;
    for _ in 0..max_ancestors {
        if let Some((_, data)) = doc.node(current).as_element() {
            let class_string = data.class_string().to_lowercase();
            for keyword in &config.semantic_keywords {
                if class_string.contains(keyword.as_str()) {
                    return Some(keyword.clone());
                }
            }
        }
        match doc.parent_of(current) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawome_dom::Document;

    #[test]
    fn class_prefix_icon_found() {
        let config = Config::default();
        let mut doc = Document::new();
        let body = doc.body();
        let span = doc.create_element("span", body);
        doc.add_class(span, "fa-search");
        let (_, data) = doc.node(span).as_element().unwrap();
        assert_eq!(icon_from_class_prefix(data, &config), Some("search".to_string()));
    }

    #[test]
    fn svg_use_href_found() {
        let mut doc = Document::new();
        let body = doc.body();
        let svg = doc.create_element("svg", body);
        let r#use = doc.create_element("use", svg);
        doc.set_attr(r#use, "href", "#icon-close");
        assert_eq!(icon_from_svg_descendant(&doc, svg), Some("close".to_string()));
    }
}
