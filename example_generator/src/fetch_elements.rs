use xsd_parser::models::schema::xs::SchemaContent;
use xsd_parser::Schemas;

use crate::fetch_types::element_type_ref;
use crate::registry::TypeRegistry;
use crate::structures::{QualifiedName, TopLevelElement};

/// Add every top-level element defined in the parsed schemas to the registry
pub(crate) fn fetch_elements(schemas: &Schemas, registry: &mut TypeRegistry) {
    for (_schema_id, schema) in schemas.schemas() {
        for content in &schema.schema.content {
            fetch_element(content, registry);
        }
    }
}

fn fetch_element(content: &SchemaContent, registry: &mut TypeRegistry) {
    match content {
        SchemaContent::Include(_) => unimplemented!("Include"),
        SchemaContent::Import(_) => unimplemented!("Import"),
        SchemaContent::Redefine(_) => unimplemented!("Redefine"),
        SchemaContent::Override(_) => unimplemented!("Override"),
        SchemaContent::Annotation(_) => unimplemented!("Annotation"),
        SchemaContent::DefaultOpenContent(_) => unimplemented!("DefaultOpenContent"),
        SchemaContent::SimpleType(_) => (),
        SchemaContent::ComplexType(_) => (),
        SchemaContent::Group(_) => unimplemented!("Top-level group not supported"),
        SchemaContent::AttributeGroup(_) => unimplemented!("AttributeGroup"),
        SchemaContent::Element(element) => {
            let name = element.name.clone().unwrap_or_default();
            if name.is_empty() {
                unimplemented!("Top-level element without a name");
            }
            let type_ref = element_type_ref(element, &name, registry);
            registry.add_element(TopLevelElement::new(QualifiedName::new("", &name), type_ref));
        }
        SchemaContent::Attribute(_) => unimplemented!("Attribute"),
        SchemaContent::Notation(_) => unimplemented!("Notation"),
    }
}
