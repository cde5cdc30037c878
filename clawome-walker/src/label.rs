use clawome_dom::ElementData;

/// Best human-readable label per §3: own text, else `aria-label`, else
/// `title`, else `placeholder`, else `alt`, else a derived icon/image
/// name, else the associated `<label>` text a form control was walked
/// with.
pub fn compute_label(data: &ElementData, text: &str) -> String {
    if !text.trim().is_empty() {
        return text.trim().to_string();
    }
    for attr in ["aria-label", "title", "placeholder", "alt"] {
        if let Some(value) = data.attr(attr) {
            if !value.trim().is_empty() {
                return value.trim().to_string();
            }
        }
    }
    if let Some(icon) = &data.icon {
        return format!("icon: {icon}");
    }
    if let Some(label) = &data.associated_label {
        if !label.trim().is_empty() {
            return label.trim().to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawome_dom::Document;

    #[test]
    fn text_wins_over_aria_label() {
        let mut doc = Document::new();
        let body = doc.body();
        let btn = doc.create_element("button", body);
        doc.set_attr(btn, "aria-label", "Close dialog");
        let (_, data) = doc.node(btn).as_element().unwrap();
        assert_eq!(compute_label(data, "Close"), "Close");
    }

    #[test]
    fn falls_back_through_the_priority_chain() {
        let mut doc = Document::new();
        let body = doc.body();
        let img = doc.create_element("img", body);
        doc.set_attr(img, "alt", "company logo");
        let (_, data) = doc.node(img).as_element().unwrap();
        assert_eq!(compute_label(data, ""), "company logo");
    }

    #[test]
    fn icon_derived_name_used_last() {
        let mut doc = Document::new();
        let body = doc.body();
        let span = doc.create_element("span", body);
        if let Some(data) = doc.node_mut(span).as_element_mut() {
            data.icon = Some("search".to_string());
        }
        let (_, data) = doc.node(span).as_element().unwrap();
        assert_eq!(compute_label(data, ""), "icon: search");
    }
}
