use std::fmt;

use crate::structures::QualifiedName;

#[derive(Debug, Clone)]
enum NodeKind {
    /// The top-level element a traversal started from
    Root { name: String },
    /// A field or resolved element reference
    Element { name: String, type_ref: QualifiedName },
    Sequence,
    Choice,
}

impl NodeKind {
    fn short_name(&self) -> &str {
        match self {
            NodeKind::Root { name } => name,
            NodeKind::Element { name, .. } => name,
            NodeKind::Sequence => "Sequence",
            NodeKind::Choice => "Choice",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct NodeMetadata {
    implementation: Option<QualifiedName>,
    choice_index: Option<usize>,
}

/// The position of a traversal inside the type graph.
///
/// An append-only stack of nodes owned by one traversal invocation, pushed on
/// the way down and popped on the way back out. Its string form (`Display`)
/// is the stable key that decisions and discovered choices are addressed by;
/// this is the only place that string is produced.
#[derive(Debug, Clone, Default)]
pub struct ChosenPath {
    nodes: Vec<(NodeKind, NodeMetadata)>,
}

impl ChosenPath {
    pub fn new() -> Self {
        ChosenPath::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    pub fn push_root(&mut self, name: &str) {
        self.nodes.push((NodeKind::Root { name: name.to_string() }, NodeMetadata::default()));
    }

    pub fn push_element(&mut self, name: &str, type_ref: &QualifiedName) {
        self.nodes.push((
            NodeKind::Element {
                name: name.to_string(),
                type_ref: type_ref.clone(),
            },
            NodeMetadata::default(),
        ));
    }

    pub fn push_sequence(&mut self) {
        self.nodes.push((NodeKind::Sequence, NodeMetadata::default()));
    }

    pub fn push_choice(&mut self) {
        self.nodes.push((NodeKind::Choice, NodeMetadata::default()));
    }

    pub fn pop(&mut self) {
        self.nodes.pop();
    }

    /// Record which concrete implementation the current node resolved to
    pub fn mark_implementation(&mut self, implementation: QualifiedName) {
        if let Some((_, metadata)) = self.nodes.last_mut() {
            metadata.implementation = Some(implementation);
        }
    }

    /// Record which branch of the current choice node is being followed
    pub fn mark_choice_index(&mut self, index: usize) {
        if let Some((_, metadata)) = self.nodes.last_mut() {
            metadata.choice_index = Some(index);
        }
    }

    pub fn current_implementation_marker(&self) -> Option<&QualifiedName> {
        self.nodes.last().and_then(|(_, metadata)| metadata.implementation.as_ref())
    }

    /// Whether descending into a field with this target type would exceed the
    /// allowed unrolling depth for self-referential schemas.
    ///
    /// Counts the field nodes already on the path that reference the same
    /// target type; the root element does not count.
    pub fn recursion_will_start_when_adding(&self, target: &QualifiedName, max_depth: usize) -> bool {
        let previous_occurrences = self
            .nodes
            .iter()
            .filter(|(kind, _)| matches!(kind, NodeKind::Element { type_ref, .. } if type_ref == target))
            .count();

        previous_occurrences >= max_depth
    }
}

impl fmt::Display for ChosenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/")?;
        for (position, (kind, metadata)) in self.nodes.iter().enumerate() {
            if position > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", kind.short_name())?;
            if let Some(implementation) = &metadata.implementation {
                write!(f, "[impl={}]", implementation.name)?;
            }
            if let Some(index) = metadata.choice_index {
                write!(f, "[{}]", index)?;
            }
        }
        Ok(())
    }
}
