use crate::structures::QualifiedName;

/// A caller-supplied resolution of one fork, addressed by its path string
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Which concrete implementation to follow at the path
    Implementation { path: String, decision: QualifiedName },
    /// Which branch of the choice group at the path to follow
    ChoiceIndex { path: String, index: usize },
    /// How many times to render the element at the path
    Occurrences { path: String, count: u32 },
}

impl Decision {
    pub fn implementation(path: &str, decision: QualifiedName) -> Self {
        Decision::Implementation {
            path: path.to_string(),
            decision,
        }
    }

    pub fn choice_index(path: &str, index: usize) -> Self {
        Decision::ChoiceIndex {
            path: path.to_string(),
            index,
        }
    }

    pub fn occurrences(path: &str, count: u32) -> Self {
        Decision::Occurrences {
            path: path.to_string(),
            count,
        }
    }
}

/// An ordered collection of decisions; lookup is first-match by path and kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decisions {
    decisions: Vec<Decision>,
}

impl Decisions {
    pub fn new() -> Self {
        Decisions::default()
    }

    pub fn with(mut self, decision: Decision) -> Self {
        self.decisions.push(decision);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter()
    }

    pub fn contains(&self, decision: &Decision) -> bool {
        self.decisions.contains(decision)
    }

    pub(crate) fn implementation_decision(&self, path: &str) -> Option<&QualifiedName> {
        self.decisions.iter().find_map(|decision| match decision {
            Decision::Implementation { path: decided, decision } if decided == path => Some(decision),
            _ => None,
        })
    }

    pub(crate) fn choice_decision(&self, path: &str) -> Option<usize> {
        self.decisions.iter().find_map(|decision| match decision {
            Decision::ChoiceIndex { path: decided, index } if decided == path => Some(*index),
            _ => None,
        })
    }

    pub(crate) fn occurrence_decision(&self, path: &str) -> Option<u32> {
        self.decisions.iter().find_map(|decision| match decision {
            Decision::Occurrences { path: decided, count } if decided == path => Some(*count),
            _ => None,
        })
    }
}

impl From<Vec<Decision>> for Decisions {
    fn from(decisions: Vec<Decision>) -> Self {
        Decisions { decisions }
    }
}

/// One entry of an occurrence-count fork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceCount {
    Times(u32),
    /// The element may be repeated without limit; a caller must still decide
    /// on a concrete count before rendering
    Unbounded,
}

/// A discovered fork: a point in the schema with more than one valid
/// continuation, not yet resolved by any decision
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// More than one concrete implementation is possible at the path
    Implementation {
        path: String,
        candidates: Vec<QualifiedName>,
    },
    /// More than one branch of a choice group is possible at the path
    Index { path: String, indices: Vec<usize> },
    /// More than one occurrence count is possible at the path
    Occurrences {
        path: String,
        counts: Vec<OccurrenceCount>,
    },
}

impl Choice {
    pub fn path(&self) -> &str {
        match self {
            Choice::Implementation { path, .. }
            | Choice::Index { path, .. }
            | Choice::Occurrences { path, .. } => path,
        }
    }
}
