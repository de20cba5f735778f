use crate::structures::QualifiedName;
use thiserror::Error;

/// Example generator error
///
/// Enum which manages errors in the example generator crate
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An element's structure reference has no registry entry
    #[error("the required type for element {element} was not found: {type_ref} (at {path})")]
    UnresolvedType {
        element: String,
        type_ref: QualifiedName,
        path: String,
    },
    /// An abstract type has no concrete implementation to render
    #[error("abstract type {type_name} has no concrete implementations (at {path})")]
    NoConcreteImplementation {
        type_name: QualifiedName,
        path: String,
    },
    /// A value was requested for a simple type that no value policy covers
    #[error("no value can be produced for simple type {type_name}")]
    UnknownSimpleType { type_name: QualifiedName },
    /// A supplied decision does not fit the fork discovered at its path
    #[error("invalid decision at {path}: {reason}")]
    InvalidDecision { path: String, reason: String },
    /// Error parsing the input XSD contents
    #[error("error parsing the input schema: {0}")]
    SchemaParser(String),
    /// Error generating the output XML structure
    #[error("error generating the output XML structure: {0}")]
    XmlBuilder(String),
    /// No sample value could be generated for a pattern restriction
    #[error("cannot generate a value matching pattern {pattern}: {reason}")]
    Pattern { pattern: String, reason: String },
}
