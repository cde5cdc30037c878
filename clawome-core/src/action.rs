use bitflags::bitflags;

bitflags! {
    /// The set of interactions an output node exposes, drawn from
    /// `{click, type, select}`. Rendered as `[click] [type] [select]`
    /// markers in source order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ActionSet: u8 {
        const CLICK  = 0b001;
        const TYPE   = 0b010;
        const SELECT = 0b100;
    }
}

impl ActionSet {
    pub fn is_empty_set(self) -> bool {
        self.is_empty()
    }

    /// Markers in the fixed rendering order `[click] [type] [select]`.
    pub fn markers(self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(ActionSet::CLICK) {
            out.push("click");
        }
        if self.contains(ActionSet::TYPE) {
            out.push("type");
        }
        if self.contains(ActionSet::SELECT) {
            out.push("select");
        }
        out
    }
}
