/// The subset of `display` relevant to visibility testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    Grid,
    Table,
    TableRow,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// The computed style properties Prepare/Walk read. A real host fills
/// these from `getComputedStyle`; test fixtures set them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub visibility: Visibility,
    pub opacity: f32,
    pub cursor: String,
    /// Text color as `(r, g, b)`, used for the gray-placeholder
    /// reclassification rule.
    pub color: (u8, u8, u8),
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: Display::Block,
            visibility: Visibility::Visible,
            opacity: 1.0,
            cursor: "auto".to_string(),
            color: (0, 0, 0),
        }
    }
}

impl ComputedStyle {
    pub fn is_css_hidden(&self) -> bool {
        self.display == Display::None
            || self.visibility == Visibility::Hidden
            || self.visibility == Visibility::Collapse
            || self.opacity <= 0.0
    }

    pub fn cursor_is_pointer(&self) -> bool {
        self.cursor == "pointer"
    }
}

/// One `:hover { cursor: pointer }` rule harvested from a stylesheet,
/// with the `:hover` pseudo-class already stripped from the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
}

/// A stylesheet as seen by Prepare. `accessible` models the same-origin
/// restriction: a cross-origin sheet can be present but unreadable, and
/// probing it must fail silently (§4.2, §7).
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    pub accessible: bool,
    pub hover_pointer_selectors: Vec<String>,
}

impl StyleSheet {
    pub fn accessible_with_rules(selectors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            accessible: true,
            hover_pointer_selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn inaccessible() -> Self {
        Self {
            accessible: false,
            hover_pointer_selectors: Vec::new(),
        }
    }
}
