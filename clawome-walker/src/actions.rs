use clawome_core::{ActionSet, Config};
use clawome_dom::{Document, ElementData, NodeId};

const CLICKABLE_ROLES: &[&str] = &[
    "button",
    "link",
    "checkbox",
    "radio",
    "switch",
    "tab",
    "menuitem",
    "option",
    "treeitem",
];

/// Action detection per §4.3: `{type}` for contenteditable/typeable
/// inputs/textareas/comboboxes, `{select}` for `<select>`, `{click}` for
/// the large family of link-like, button-like, and script-wired
/// elements. Readonly/disabled typeable inputs degrade from `type` to
/// `click`.
pub fn detect_actions(doc: &Document, tag: &str, data: &ElementData, config: &Config) -> ActionSet {
    let mut actions = ActionSet::empty();

    let is_disabled_or_readonly = data.attr("disabled").is_some() || data.attr("readonly").is_some();
    let input_type = data.attr("type").unwrap_or("text");

    let is_contenteditable = data.attr("contenteditable").is_some_and(|v| v != "false");
    let is_typeable_input = tag == "input" && config.typeable_input_types.iter().any(|t| t == input_type);
    let is_combobox = data.attr("role") == Some("combobox");

    if is_contenteditable || tag == "textarea" || is_combobox || (is_typeable_input && !is_disabled_or_readonly) {
        actions |= ActionSet::TYPE;
    }

    if tag == "select" {
        actions |= ActionSet::SELECT;
    }

    let is_clickable_input = tag == "input" && config.clickable_input_types.iter().any(|t| t == input_type);
    let degraded_typeable = is_typeable_input && is_disabled_or_readonly;
    let role_is_clickable = data
        .attr("role")
        .is_some_and(|r| CLICKABLE_ROLES.contains(&r));
    let matches_hover_selector = doc
        .hover_pointer_selectors()
        .iter()
        .any(|selector| selector.matches(tag, data));

    if tag == "a"
        || tag == "button"
        || is_clickable_input
        || degraded_typeable
        || role_is_clickable
        || data.onclick
        || data.style.cursor_is_pointer()
        || matches_hover_selector
        || data.clickable_flag
    {
        actions |= ActionSet::CLICK;
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawome_dom::Document;

    fn element(doc: &mut Document, tag: &str) -> NodeId {
        let body = doc.body();
        doc.create_element(tag, body)
    }

    #[test]
    fn text_input_is_typeable() {
        let mut doc = Document::new();
        let config = Config::default();
        let input = element(&mut doc, "input");
        doc.set_attr(input, "type", "text");
        let (tag, data) = doc.node(input).as_element().unwrap();
        let actions = detect_actions(&doc, tag, data, &config);
        assert_eq!(actions, ActionSet::TYPE);
    }

    #[test]
    fn readonly_text_input_degrades_to_click() {
        let mut doc = Document::new();
        let config = Config::default();
        let input = element(&mut doc, "input");
        doc.set_attr(input, "type", "text");
        doc.set_attr(input, "readonly", "");
        let (tag, data) = doc.node(input).as_element().unwrap();
        let actions = detect_actions(&doc, tag, data, &config);
        assert_eq!(actions, ActionSet::CLICK);
    }

    #[test]
    fn anchor_is_clickable() {
        let mut doc = Document::new();
        let config = Config::default();
        let a = element(&mut doc, "a");
        doc.set_attr(a, "href", "/x");
        let (tag, data) = doc.node(a).as_element().unwrap();
        assert_eq!(detect_actions(&doc, tag, data, &config), ActionSet::CLICK);
    }

    #[test]
    fn plain_div_has_no_actions() {
        let mut doc = Document::new();
        let config = Config::default();
        let div = element(&mut doc, "div");
        let (tag, data) = doc.node(div).as_element().unwrap();
        assert!(detect_actions(&doc, tag, data, &config).is_empty());
    }

    #[test]
    fn hover_pointer_selector_makes_clickable() {
        let mut doc = Document::new();
        let config = Config::default();
        let div = element(&mut doc, "div");
        doc.add_class(div, "card");
        doc.set_hover_pointer_selectors(vec![clawome_dom::Selector::parse(".card")]);
        let (tag, data) = doc.node(div).as_element().unwrap();
        assert_eq!(detect_actions(&doc, tag, data, &config), ActionSet::CLICK);
    }
}
