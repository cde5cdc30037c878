use std::collections::HashMap;

/// Rendering mode requested from Render. Lite mode truncates long text on
/// non-interactive nodes; it never touches identifiers, visibility,
/// action markers, state, or interactive labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    #[default]
    Full,
    Lite,
}

/// The single configuration record that parameterizes the whole
/// pipeline, supplied once by the host per §4.1.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Tags never emitted and never descended into.
    pub skip_tags: Vec<String>,
    /// Tags treated as inline: mergeable into an ancestor's text line.
    pub inline_tags: Vec<String>,
    /// Per-tag attribute surfacing rules, e.g. `input -> [type, name, ...]`.
    pub attr_rules: HashMap<String, Vec<String>>,
    /// Attributes surfaced on every tag regardless of `attr_rules`.
    pub global_attrs: Vec<String>,
    /// Attributes read into a node's `state` mapping.
    pub state_attrs: Vec<String>,
    /// `<input type=...>` values classified as typeable.
    pub typeable_input_types: Vec<String>,
    /// `<input type=...>` values classified as clickable.
    pub clickable_input_types: Vec<String>,
    /// Class-name prefixes that identify icon fonts, e.g. `fa` for
    /// `fa-search`.
    pub icon_prefixes: Vec<String>,
    /// Regex patterns matching "material icon"-style classes.
    pub material_classes: Vec<String>,
    /// Keywords searched for in ancestor class strings when classifying
    /// an element as an icon.
    pub semantic_keywords: Vec<String>,
    /// CSS selectors identifying carousel/duplicate clones to hide at
    /// prepare time.
    pub clone_selectors: Vec<String>,
    /// Class names ignored when normalizing a switchable-group bucket
    /// key (`active`, `current`, `selected`, ...).
    pub state_classes: Vec<String>,

    pub max_nodes: usize,
    pub max_depth: usize,
    pub max_text_len: usize,
    pub gray_text_min_rgb: u8,
    pub gray_text_max_diff: u8,
    pub icon_max_size: f64,

    pub lite_text_max: usize,
    pub lite_text_head: usize,

    /// Minimum run length of structurally similar siblings before a long
    /// list is truncated.
    pub list_truncate_threshold: usize,
    /// Number of head children kept when a long list is truncated.
    pub list_truncate_keep: usize,
    /// Fixed-point iteration cap for the simplify pass.
    pub max_simplify_passes: usize,
}

impl Default for Config {
    fn default() -> Self {
        let mut attr_rules = HashMap::new();
        attr_rules.insert(
            "input".to_string(),
            vec![
                "type".to_string(),
                "name".to_string(),
                "placeholder".to_string(),
                "value".to_string(),
            ],
        );
        attr_rules.insert(
            "a".to_string(),
            vec!["href".to_string(), "target".to_string()],
        );
        attr_rules.insert("img".to_string(), vec!["src".to_string(), "alt".to_string()]);
        attr_rules.insert(
            "select".to_string(),
            vec!["name".to_string(), "multiple".to_string()],
        );
        attr_rules.insert(
            "textarea".to_string(),
            vec!["name".to_string(), "placeholder".to_string()],
        );
        attr_rules.insert(
            "form".to_string(),
            vec!["action".to_string(), "method".to_string()],
        );

        Self {
            skip_tags: [
                "script", "style", "meta", "link", "head", "noscript", "template", "title",
            ]
            .map(str::to_string)
            .to_vec(),
            inline_tags: [
                "span", "em", "b", "i", "strong", "small", "font", "u", "sub", "sup", "abbr",
                "mark", "code",
            ]
            .map(str::to_string)
            .to_vec(),
            attr_rules,
            global_attrs: ["role", "aria-label", "id"].map(str::to_string).to_vec(),
            state_attrs: [
                "checked",
                "disabled",
                "readonly",
                "open",
                "aria-expanded",
                "aria-selected",
                "aria-checked",
                "aria-disabled",
                "aria-hidden",
            ]
            .map(str::to_string)
            .to_vec(),
            typeable_input_types: [
                "text", "search", "email", "password", "tel", "url", "number", "date", "time",
            ]
            .map(str::to_string)
            .to_vec(),
            clickable_input_types: ["checkbox", "radio", "submit", "button", "reset", "file"]
                .map(str::to_string)
                .to_vec(),
            icon_prefixes: ["fa", "icon", "glyphicon", "material-icons"]
                .map(str::to_string)
                .to_vec(),
            material_classes: [r"(?i)material-?icons?"].map(str::to_string).to_vec(),
            semantic_keywords: ["icon", "btn", "close", "menu", "search", "avatar"]
                .map(str::to_string)
                .to_vec(),
            clone_selectors: vec![
                ".slick-cloned".to_string(),
                ".swiper-slide-duplicate".to_string(),
            ],
            state_classes: ["active", "current", "selected", "open"]
                .map(str::to_string)
                .to_vec(),
            max_nodes: 4_000,
            max_depth: 60,
            max_text_len: 500,
            gray_text_min_rgb: 120,
            gray_text_max_diff: 20,
            icon_max_size: 32.0,
            lite_text_max: 200,
            lite_text_head: 80,
            list_truncate_threshold: 10,
            list_truncate_keep: 5,
            max_simplify_passes: 10,
        }
    }
}

impl Config {
    pub fn attrs_for_tag(&self, tag: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self.global_attrs.iter().map(String::as_str).collect();
        if let Some(specific) = self.attr_rules.get(tag) {
            out.extend(specific.iter().map(String::as_str));
        }
        out
    }
}
