use std::fmt;

/// A stable back-reference identifier assigned to a DOM element during
/// Prepare. Every later stage uses this integer, not the element's object
/// identity, to cross the DOM-context/host boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackRef(pub u32);

impl BackRef {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dotted sequence of 1-based positive integers that names one node of
/// the final, compressed tree (e.g. `3.1.4`). Identifiers are assigned
/// once, after every compression pass has converged, so they describe
/// positions in the *compressed* tree only; they carry no relationship to
/// back-reference identifiers or walker emission order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HierarchicalId(pub Vec<u32>);

impl HierarchicalId {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the identifier for the `position`-th (1-based) child of
    /// this node.
    pub fn child(&self, position: u32) -> Self {
        let mut components = self.0.clone();
        components.push(position);
        Self(components)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HierarchicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for HierarchicalId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|part| part.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(components))
    }
}
