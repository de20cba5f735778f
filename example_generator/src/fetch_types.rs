use xsd_parser::models::schema::xs::{
    ComplexBaseType, ComplexBaseTypeContent, ElementType, ElementTypeContent, Facet, FacetType,
    GroupType, GroupTypeContent, Restriction, RestrictionContent, SchemaContent, SimpleBaseType,
    SimpleBaseTypeContent,
};
use xsd_parser::models::schema::{MaxOccurs as SchemaMaxOccurs, QName};
use xsd_parser::Schemas;

use crate::registry::TypeRegistry;
use crate::structures::{
    ChoiceOfElements, ComplexType, ElementReference, FieldElement, MaxOccurs, QualifiedName,
    SequenceOfElements, SimpleType, Structure, StructureElement, XMLNS,
};

/// Add every named structure defined in the parsed schemas to the registry
pub(crate) fn fetch_structures(schemas: &Schemas, registry: &mut TypeRegistry) {
    for (_schema_id, schema) in schemas.schemas() {
        for content in &schema.schema.content {
            fetch_structure(content, registry);
        }
    }
}

fn fetch_structure(content: &SchemaContent, registry: &mut TypeRegistry) {
    match content {
        SchemaContent::Include(_) => unimplemented!("Include"),
        SchemaContent::Import(_) => unimplemented!("Import"),
        SchemaContent::Redefine(_) => unimplemented!("Redefine"),
        SchemaContent::Override(_) => unimplemented!("Override"),
        SchemaContent::Annotation(_) => unimplemented!("Annotation"),
        SchemaContent::DefaultOpenContent(_) => unimplemented!("DefaultOpenContent"),
        SchemaContent::SimpleType(x) => {
            let simple = build_simple_type(x, None, registry);
            registry.add_structure(Structure::Simple(simple));
        }
        SchemaContent::ComplexType(x) => {
            let complex = build_complex_type(x, None, registry);
            registry.add_structure(Structure::Complex(complex));
        }
        SchemaContent::Group(_) => unimplemented!("Top-level group not supported"),
        SchemaContent::AttributeGroup(_) => unimplemented!("AttributeGroup"),
        SchemaContent::Element(_) => (),
        SchemaContent::Attribute(_) => unimplemented!("Attribute"),
        SchemaContent::Notation(_) => unimplemented!("Notation"),
    }
}

pub(crate) fn qualified_name(qname: &QName) -> QualifiedName {
    let name = String::from_utf8_lossy(qname.local_name()).to_string();
    let namespace = match qname.namespace() {
        Some(namespace) => namespace.to_string(),
        None => String::new(),
    };
    QualifiedName { namespace, name }
}

struct RestrictionData {
    base: Option<QualifiedName>,
    enums: Vec<String>,
    pattern: Option<String>,
}

pub(crate) fn build_simple_type(
    simple: &SimpleBaseType,
    name_override: Option<String>,
    registry: &TypeRegistry,
) -> SimpleType {
    let local = match name_override {
        Some(name) => name,
        None => simple.name.clone().unwrap_or_default(),
    };
    if local.is_empty() {
        unimplemented!("Unnamed simple type");
    }
    if simple.final_.is_some() {
        unimplemented!("Final");
    }

    let name = QualifiedName::new("", &local);

    let mut restriction = None;
    for content in &simple.content {
        match content {
            SimpleBaseTypeContent::Annotation(_) => unimplemented!("Annotation"),
            SimpleBaseTypeContent::Restriction(x) => restriction = Some(read_restriction(x)),
            SimpleBaseTypeContent::List(_) => unimplemented!("List"),
            SimpleBaseTypeContent::Union(_) => unimplemented!("Union"),
        }
    }

    match restriction {
        Some(data) => specialize_simple_type(name, data, registry),
        None => SimpleType::String(name),
    }
}

/// A restricted simple type keeps its base's kind; a string base is further
/// specialized by enumeration or pattern facets when present
fn specialize_simple_type(name: QualifiedName, data: RestrictionData, registry: &TypeRegistry) -> SimpleType {
    let Some(base) = data.base else {
        unimplemented!("Restriction without a base type");
    };

    match registry.get_structure(&base) {
        Some(Structure::Simple(SimpleType::String(_))) => {
            if !data.enums.is_empty() {
                SimpleType::Enumeration {
                    name,
                    values: data.enums,
                }
            } else if let Some(pattern) = data.pattern {
                SimpleType::Regex { name, pattern }
            } else {
                SimpleType::String(name)
            }
        }
        Some(Structure::Simple(SimpleType::Boolean(_))) => SimpleType::Boolean(name),
        Some(Structure::Simple(SimpleType::Int(_))) => SimpleType::Int(name),
        Some(Structure::Simple(SimpleType::Decimal(_))) => SimpleType::Decimal(name),
        Some(Structure::Simple(SimpleType::DateTime(_))) => SimpleType::DateTime(name),
        Some(Structure::Simple(SimpleType::Base64(_))) => SimpleType::Base64(name),
        _ => SimpleType::Unknown { name, base },
    }
}

fn read_restriction(restriction: &Restriction) -> RestrictionData {
    let mut data = RestrictionData {
        base: restriction.base.as_ref().map(qualified_name),
        enums: Vec::new(),
        pattern: None,
    };

    for content in &restriction.content {
        match content {
            RestrictionContent::Annotation(_) => unimplemented!("Annotation"),
            RestrictionContent::SimpleType(_) => unimplemented!("Nested simple type restriction"),
            RestrictionContent::Facet(facet) => read_facet(facet, &mut data),
        }
    }

    data
}

fn read_facet(facet: &Facet, data: &mut RestrictionData) {
    match facet {
        Facet::Enumeration(x) => data.enums.push(facet_value(x)),
        Facet::Pattern(x) => data.pattern = Some(facet_value(x)),
        Facet::Assertion(_) => unimplemented!("Assertion"),
        // Range, length and whitespace facets do not change which kind of
        // value gets generated
        Facet::MinExclusive(_)
        | Facet::MinInclusive(_)
        | Facet::MaxExclusive(_)
        | Facet::MaxInclusive(_)
        | Facet::TotalDigits(_)
        | Facet::FractionDigits(_)
        | Facet::Length(_)
        | Facet::MinLength(_)
        | Facet::MaxLength(_)
        | Facet::WhiteSpace(_)
        | Facet::ExplicitTimezone(_) => (),
    }
}

fn facet_value(facet_type: &FacetType) -> String {
    if facet_type.fixed {
        unimplemented!("Fixed facet type");
    }
    if facet_type.annotation.is_some() {
        unimplemented!("Annotation");
    }

    facet_type.value.clone()
}

fn build_complex_type(
    complex: &ComplexBaseType,
    name_override: Option<String>,
    registry: &mut TypeRegistry,
) -> ComplexType {
    let local = match name_override {
        Some(name) => name,
        None => complex.name.clone().unwrap_or_default(),
    };
    if local.is_empty() {
        unimplemented!("Unnamed complex type");
    }

    if complex.mixed.is_some() {
        unimplemented!("Mixed types");
    }
    if complex.final_.is_some() {
        unimplemented!("Final types");
    }
    if complex.block.is_some() {
        unimplemented!("Block types");
    }
    if !complex.default_attributes_apply {
        unimplemented!("Non-default attributes");
    }

    let mut content = Vec::new();
    for child in &complex.content {
        match child {
            ComplexBaseTypeContent::Annotation(_) => unimplemented!("Annotation"),
            ComplexBaseTypeContent::SimpleContent(_) => unimplemented!("SimpleContent"),
            ComplexBaseTypeContent::ComplexContent(_) => unimplemented!("ComplexContent"),
            ComplexBaseTypeContent::OpenContent(_) => unimplemented!("OpenContent"),
            ComplexBaseTypeContent::Group(_) => unimplemented!("Named group references"),
            ComplexBaseTypeContent::All(_) => unimplemented!("All groups"),
            ComplexBaseTypeContent::Choice(group) => {
                content.push(StructureElement::Choice(ChoiceOfElements::new(group_children(
                    group, registry,
                ))));
            }
            ComplexBaseTypeContent::Sequence(group) => {
                content.push(StructureElement::Sequence(SequenceOfElements::new(group_children(
                    group, registry,
                ))));
            }
            // Attribute generation is not supported; elements are enough for
            // an example document
            ComplexBaseTypeContent::Attribute(_) => (),
            ComplexBaseTypeContent::AttributeGroup(_) => unimplemented!("AttributeGroup"),
            ComplexBaseTypeContent::AnyAttribute(_) => unimplemented!("AnyAttribute"),
            ComplexBaseTypeContent::Assert(_) => unimplemented!("Assert"),
        }
    }

    ComplexType {
        name: QualifiedName::new("", &local),
        content,
        abstract_: complex.abstract_,
        extension_of: None,
    }
}

fn group_children(group: &GroupType, registry: &mut TypeRegistry) -> Vec<StructureElement> {
    if group.name.is_some() {
        unimplemented!("Named groups");
    }
    if group.ref_.is_some() {
        unimplemented!("Group references");
    }

    let mut children = Vec::new();
    for content in &group.content {
        match content {
            GroupTypeContent::Annotation(_) => unimplemented!("Annotation"),
            GroupTypeContent::Element(element) => children.push(build_group_element(element, registry)),
            GroupTypeContent::Group(_) => unimplemented!("Group references"),
            GroupTypeContent::All(_) => unimplemented!("All groups"),
            GroupTypeContent::Choice(nested) => {
                children.push(StructureElement::Choice(ChoiceOfElements::new(group_children(
                    nested, registry,
                ))));
            }
            GroupTypeContent::Sequence(nested) => {
                children.push(StructureElement::Sequence(SequenceOfElements::new(group_children(
                    nested, registry,
                ))));
            }
            GroupTypeContent::Any(_) => unimplemented!("Any"),
        }
    }

    children
}

fn build_group_element(element: &ElementType, registry: &mut TypeRegistry) -> StructureElement {
    let min_occurs = element.min_occurs as u32;
    let max_occurs = match element.max_occurs {
        SchemaMaxOccurs::Unbounded => MaxOccurs::Unbounded,
        SchemaMaxOccurs::Bounded(x) => MaxOccurs::Bounded(x as u32),
    };

    if let Some(reference) = &element.ref_ {
        return StructureElement::Reference(ElementReference {
            ref_: qualified_name(reference),
            min_occurs,
            max_occurs,
        });
    }

    let name = element.name.clone().unwrap_or_default();
    if name.is_empty() {
        unimplemented!("Element without a name or reference");
    }

    let type_ref = element_type_ref(element, &name, registry);

    StructureElement::Field(FieldElement {
        name,
        type_ref,
        min_occurs,
        max_occurs,
    })
}

/// Resolve an element's type reference, registering a synthetic structure
/// when the type is defined inline
pub(crate) fn element_type_ref(element: &ElementType, name: &str, registry: &mut TypeRegistry) -> QualifiedName {
    if element.substitution_group.is_some() {
        unimplemented!("Element Substitution Groups");
    }
    if element.default.is_some() {
        unimplemented!("Default Element");
    }
    if element.fixed.is_some() {
        unimplemented!("Fixed elements");
    }
    if element.nillable.is_some() {
        unimplemented!("Nillable elements");
    }
    if element.abstract_ {
        unimplemented!("Abstract elements");
    }
    if element.final_.is_some() {
        unimplemented!("Final elements");
    }
    if element.block.is_some() {
        unimplemented!("Block elements");
    }
    if element.form.is_some() {
        unimplemented!("Form elements");
    }
    if element.target_namespace.is_some() {
        unimplemented!("Namespace elements");
    }

    if let Some(element_type) = &element.type_ {
        let type_ref = qualified_name(element_type);
        // An unprefixed reference to a built-in name still means the XML
        // Schema type
        if type_ref.namespace.is_empty() {
            let builtin = QualifiedName::new(XMLNS, &type_ref.name);
            if registry.get_structure(&type_ref).is_none() && registry.get_structure(&builtin).is_some() {
                return builtin;
            }
        }
        return type_ref;
    }

    let synthetic_name = format!("{}InlineType", name);
    for content in &element.content {
        match content {
            ElementTypeContent::Annotation(_) => unimplemented!("Annotation"),
            ElementTypeContent::SimpleType(x) => {
                let simple = build_simple_type(x, Some(synthetic_name.clone()), registry);
                registry.add_structure(Structure::Simple(simple));
            }
            ElementTypeContent::ComplexType(x) => {
                let complex = build_complex_type(x, Some(synthetic_name.clone()), registry);
                registry.add_structure(Structure::Complex(complex));
            }
            ElementTypeContent::Alternative(_) => unimplemented!("Alternative"),
            ElementTypeContent::Unique(_) => unimplemented!("Unique"),
            ElementTypeContent::Key(_) => unimplemented!("Key"),
            ElementTypeContent::Keyref(_) => unimplemented!("Keyref"),
        }
    }

    QualifiedName::new("", &synthetic_name)
}
