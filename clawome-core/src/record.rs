use crate::{ActionSet, BackRef, StateMap};

/// One emitted element from the Walk stage (§3). The flat, ordered
/// sequence of these records is the sole hand-off between the
/// DOM-context side (`clawome-walker`) and the host side
/// (`clawome-compress`).
#[derive(Debug, Clone)]
pub struct NodeRecord {
    /// Monotonic 1-based emission order.
    pub idx: u32,
    /// Hierarchy depth relative to the traversal root (0 = direct child
    /// of `body`).
    pub depth: u32,
    /// Lowercase element tag name.
    pub tag: String,
    /// Pre-formatted, comma-separated surfaced-attribute string.
    pub attrs: String,
    /// Visible text to display on this node's line. May contain
    /// `⟨...⟩`-bracketed inline-interactive fragments.
    pub text: String,
    /// Best human-readable label: own text, else `aria-label`, `title`,
    /// `placeholder`, `alt`, or a derived icon/image name.
    pub label: String,
    pub actions: ActionSet,
    pub state: StateMap,
    /// Stable back-reference selector identifying the source element.
    pub selector: String,
    /// Fallback xpath, used only if `selector` ever fails to resolve.
    pub xpath: String,
    /// True when this element was merged into its parent's text as a
    /// bracketed inline-interactive fragment, rather than emitted as its
    /// own node.
    pub inlined: bool,
    /// The back-reference of the source element, for node-map
    /// construction.
    pub backref: BackRef,
}

impl NodeRecord {
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn is_informative(&self) -> bool {
        !self.attrs.is_empty() || !self.state.is_empty()
    }
}
