mod chosen_path;
mod decisions;
mod error;
mod fetch_elements;
mod fetch_types;
mod generate_output;
mod generate_schema;
mod options;
mod registry;
mod renderer;
mod rendering_config;
mod regex_sample;
mod structures;
mod traverser;
mod values;

pub use chosen_path::ChosenPath;
pub use decisions::{Choice, Decision, Decisions, OccurrenceCount};
pub use error::GeneratorError;
pub use options::{first_choice_everywhere, OptionFinder};
pub use registry::TypeRegistry;
pub use renderer::XmlRenderer;
pub use rendering_config::{RegexValueForType, RenderingConfig, ValueStrategy};
pub use structures::{
    ChoiceOfElements, ComplexType, ElementReference, FieldElement, MaxOccurs, QualifiedName,
    SequenceOfElements, SimpleType, Structure, StructureElement, TopLevelElement, XMLNS,
};
pub use traverser::{TraverseHooks, Traverser, DEFAULT_MAX_DEPTH};

/// Build a type registry from XSD file contents.
///
/// The registry starts from the built-in XML Schema simple types and gains
/// every structure and top-level element the input defines, including
/// synthetic entries for types defined inline on an element. The `xsd_parser`
/// crate does the raw parsing; if it rejects the input, a
/// `GeneratorError::SchemaParser` is returned.
pub fn parse_schema(xsd: &str) -> Result<TypeRegistry, GeneratorError> {
    let schemas = generate_schema::parse_schema_text(xsd)?;

    let mut registry = TypeRegistry::with_xml_building_blocks();
    fetch_types::fetch_structures(&schemas, &mut registry);
    fetch_elements::fetch_elements(&schemas, &mut registry);

    Ok(registry)
}

/// Generate an example XML string for one element of an XSD.
///
/// Using an XSD file contents as a string, generate an XML document string
/// conforming to it. Implementation forks are resolved by always taking the
/// first candidate; choice branches and occurrence counts follow the default
/// rendering policy. Callers that want different branches build a
/// `Decisions` value through `OptionFinder` and drive `XmlRenderer`
/// themselves.
pub fn generate_example_xml(
    xsd: &str,
    element_name: &QualifiedName,
    config: &RenderingConfig,
) -> Result<String, GeneratorError> {
    let registry = parse_schema(xsd)?;

    let element = match registry.get_element(element_name) {
        Some(element) => element.clone(),
        None => {
            return Err(GeneratorError::UnresolvedType {
                element: element_name.name.clone(),
                type_ref: element_name.clone(),
                path: "/".to_string(),
            });
        }
    };

    let decisions = first_choice_everywhere(&registry, &element)?;

    XmlRenderer::new(&registry).render(&element, &decisions, config)
}
