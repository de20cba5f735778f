use std::collections::HashSet;

use indexmap::IndexMap;

use crate::structures::{ComplexType, QualifiedName, SimpleType, Structure, TopLevelElement, XMLNS};

/// Registry of every named structure and top-level element known to a schema.
///
/// Built once by an ingester (or programmatically) and treated as read-only
/// afterwards. Insertion order is preserved so iteration-based queries are
/// deterministic; lookups are by qualified name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    structures: IndexMap<QualifiedName, Structure>,
    elements: IndexMap<QualifiedName, TopLevelElement>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// A registry pre-seeded with the built-in XML Schema simple types
    pub fn with_xml_building_blocks() -> Self {
        let mut registry = TypeRegistry::new();
        for name in ["string", "normalizedString", "token", "anyURI"] {
            registry.add_structure(Structure::Simple(SimpleType::String(QualifiedName::new(XMLNS, name))));
        }
        registry.add_structure(Structure::Simple(SimpleType::Boolean(QualifiedName::new(XMLNS, "boolean"))));
        for name in ["int", "integer", "long", "short", "positiveInteger", "nonNegativeInteger"] {
            registry.add_structure(Structure::Simple(SimpleType::Int(QualifiedName::new(XMLNS, name))));
        }
        for name in ["decimal", "double", "float"] {
            registry.add_structure(Structure::Simple(SimpleType::Decimal(QualifiedName::new(XMLNS, name))));
        }
        for name in ["dateTime", "date"] {
            registry.add_structure(Structure::Simple(SimpleType::DateTime(QualifiedName::new(XMLNS, name))));
        }
        registry.add_structure(Structure::Simple(SimpleType::Base64(QualifiedName::new(XMLNS, "base64Binary"))));
        registry
    }

    /// Insert a structure, overwriting any previous entry with the same name
    pub fn add_structure(&mut self, structure: Structure) {
        self.structures.insert(structure.qname().clone(), structure);
    }

    /// Insert a top-level element, overwriting any previous entry with the same name
    pub fn add_element(&mut self, element: TopLevelElement) {
        self.elements.insert(element.name.clone(), element);
    }

    /// Union of both registries; on a key collision the incoming entry wins
    pub fn merge(&mut self, other: TypeRegistry) {
        for (_, structure) in other.structures {
            self.add_structure(structure);
        }
        for (_, element) in other.elements {
            self.add_element(element);
        }
    }

    pub fn get_structure(&self, name: &QualifiedName) -> Option<&Structure> {
        self.structures.get(name)
    }

    pub fn get_element(&self, name: &QualifiedName) -> Option<&TopLevelElement> {
        self.elements.get(name)
    }

    /// Every complex type whose extension chain terminates at the given name:
    /// the immediate subtypes in insertion order, then each of their subtypes
    /// recursively.
    ///
    /// Panics on a cyclic extension chain; inheritance cycles are a caller
    /// error, not something the traversal can recover from.
    pub fn concrete_implementations_of(&self, name: &QualifiedName) -> Vec<&ComplexType> {
        let mut seen = HashSet::new();
        seen.insert(name.clone());
        self.implementations_below(name, &mut seen)
    }

    fn implementations_below<'a>(
        &'a self,
        name: &QualifiedName,
        seen: &mut HashSet<QualifiedName>,
    ) -> Vec<&'a ComplexType> {
        let direct: Vec<&ComplexType> = self
            .structures
            .values()
            .filter_map(|structure| match structure {
                Structure::Complex(complex) if complex.extension_of.as_ref() == Some(name) => Some(complex),
                _ => None,
            })
            .collect();

        let mut implementations = direct.clone();
        for implementation in direct {
            assert!(
                seen.insert(implementation.name.clone()),
                "cyclic extension chain detected at {}",
                implementation.name
            );
            implementations.extend(self.implementations_below(&implementation.name, seen));
        }

        implementations
    }

    /// The ancestors of a complex type, root-most first
    pub fn parent_chain_of(&self, structure: &ComplexType) -> Vec<&ComplexType> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = structure.extension_of.as_ref();

        while let Some(parent_name) = current {
            assert!(
                seen.insert(parent_name.clone()),
                "cyclic extension chain detected at {}",
                parent_name
            );
            match self.get_structure(parent_name) {
                Some(Structure::Complex(parent)) => {
                    chain.push(parent);
                    current = parent.extension_of.as_ref();
                }
                _ => break,
            }
        }

        chain.reverse();
        chain
    }
}
