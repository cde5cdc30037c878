use crate::node::ElementData;

/// A deliberately minimal CSS selector: an optional tag name plus zero
/// or more `.class` and `#id` requirements, AND-ed together. This
/// model's DOM never runs a real style cascade, so `cloneSelectors`,
/// switchable-group bucketing probes, and delegation-selector
/// resolution only ever need this much matching power; a full selector
/// engine (descendant/sibling combinators, attribute selectors,
/// pseudo-classes) is out of this crate's scope. See DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub classes: Vec<String>,
    pub id: Option<String>,
    raw: String,
}

impl Selector {
    pub fn parse(raw: &str) -> Self {
        let mut tag = None;
        let mut classes = Vec::new();
        let mut id = None;

        let mut current = String::new();
        let mut mode = Mode::Tag;
        let finish = |mode: &Mode, current: &mut String, tag: &mut Option<String>, classes: &mut Vec<String>, id: &mut Option<String>| {
            if current.is_empty() {
                return;
            }
            match mode {
                Mode::Tag => *tag = Some(std::mem::take(current)),
                Mode::Class => classes.push(std::mem::take(current)),
                Mode::Id => *id = Some(std::mem::take(current)),
            }
        };

        for ch in raw.trim().chars() {
            match ch {
                '.' => {
                    finish(&mode, &mut current, &mut tag, &mut classes, &mut id);
                    mode = Mode::Class;
                }
                '#' => {
                    finish(&mode, &mut current, &mut tag, &mut classes, &mut id);
                    mode = Mode::Id;
                }
                _ => current.push(ch),
            }
        }
        finish(&mode, &mut current, &mut tag, &mut classes, &mut id);

        Self {
            tag,
            classes,
            id,
            raw: raw.trim().to_string(),
        }
    }

    pub fn matches(&self, tag: &str, data: &ElementData) -> bool {
        if let Some(expected_tag) = &self.tag {
            if !expected_tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(expected_id) = &self.id {
            if data.attr("id") != Some(expected_id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| data.has_class(class))
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

enum Mode {
    Tag,
    Class,
    Id,
}
