#[cfg(test)]
mod tests {
    use examplegenerator::{
        Choice, ChoiceOfElements, ComplexType, Decision, Decisions, FieldElement, GeneratorError, Structure,
        MaxOccurs, OccurrenceCount, OptionFinder, QualifiedName, SequenceOfElements, StructureElement,
        TopLevelElement, TypeRegistry, XMLNS,
    };

    fn string_type() -> QualifiedName {
        QualifiedName::new(XMLNS, "string")
    }

    fn qname(name: &str) -> QualifiedName {
        QualifiedName::new("", name)
    }

    fn field(name: &str) -> StructureElement {
        StructureElement::Field(FieldElement::new(name, string_type()))
    }

    fn field_with_occurs(name: &str, min: u32, max: MaxOccurs) -> StructureElement {
        StructureElement::Field(FieldElement::with_occurs(name, string_type(), min, max))
    }

    fn sequence(children: Vec<StructureElement>) -> Vec<StructureElement> {
        vec![StructureElement::Sequence(SequenceOfElements::new(children))]
    }

    fn choice_group(children: Vec<StructureElement>) -> Vec<StructureElement> {
        vec![StructureElement::Choice(ChoiceOfElements::new(children))]
    }

    fn forks(
        registry: &TypeRegistry,
        element: &TopLevelElement,
        decisions: Decisions,
    ) -> Result<Vec<Choice>, GeneratorError> {
        OptionFinder::new(registry).available_forks_through_element(element, &decisions)
    }

    #[test]
    fn test_no_options_for_simple_type() {
        let blocks = TypeRegistry::with_xml_building_blocks();
        let element = TopLevelElement::new(QualifiedName::new("shwoep", "MyName"), string_type());

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_no_options_for_regular_complex_type() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            sequence(vec![field("FieldOne"), field("FieldTwo")]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_implementation_choices_only_one_choice() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType {
            name: qname("BaseType"),
            content: vec![],
            abstract_: true,
            extension_of: None,
        }));
        blocks.add_structure(Structure::Complex(ComplexType {
            name: qname("Implementation"),
            content: sequence(vec![field("SomeField")]),
            abstract_: false,
            extension_of: Some(qname("BaseType")),
        }));
        let element = TopLevelElement::new(qname("SomeElement"), qname("BaseType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_implementation_choices_multiple() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType {
            name: qname("BaseType"),
            content: vec![],
            abstract_: true,
            extension_of: None,
        }));
        for name in ["Implementation1", "Implementation2"] {
            blocks.add_structure(Structure::Complex(ComplexType {
                name: qname(name),
                content: sequence(vec![field("SomeField")]),
                abstract_: false,
                extension_of: Some(qname("BaseType")),
            }));
        }
        let element = TopLevelElement::new(qname("SomeElement"), qname("BaseType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.contains(&Choice::Implementation {
            path: "/SomeElement".to_string(),
            candidates: vec![qname("Implementation1"), qname("Implementation2")],
        }));
    }

    #[test]
    fn test_implementation_choices_one_selected() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType {
            name: qname("BaseType"),
            content: vec![],
            abstract_: true,
            extension_of: None,
        }));
        for name in ["Implementation1", "Implementation2"] {
            blocks.add_structure(Structure::Complex(ComplexType {
                name: qname(name),
                content: sequence(vec![field("SomeField")]),
                abstract_: false,
                extension_of: Some(qname("BaseType")),
            }));
        }
        let element = TopLevelElement::new(qname("SomeElement"), qname("BaseType"));

        let decisions =
            Decisions::new().with(Decision::implementation("/SomeElement", qname("Implementation2")));
        let output = forks(&blocks, &element, decisions).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_choice_options_listing_only_one_branch() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field("FieldOne")]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_choice_options_listing_multiple() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field("FieldOne"), field("FieldTwo")]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.contains(&Choice::Index {
            path: "/Element/Choice".to_string(),
            indices: vec![0, 1],
        }));
    }

    #[test]
    fn test_multiple_choices_but_decision_made() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field("FieldOne"), field("FieldTwo")]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let decisions = Decisions::new().with(Decision::choice_index("/Element/Choice", 0));
        let output = forks(&blocks, &element, decisions).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_choice_decision_out_of_range() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field("FieldOne"), field("FieldTwo")]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let decisions = Decisions::new().with(Decision::choice_index("/Element/Choice", 5));
        let output = forks(&blocks, &element, decisions);

        assert!(matches!(output, Err(GeneratorError::InvalidDecision { .. })));
    }

    #[test]
    fn test_min_occurs_one_no_choices() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field_with_occurs("FieldOne", 1, MaxOccurs::Bounded(1))]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_min_occurs_zero_or_one() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field_with_occurs("FieldOne", 0, MaxOccurs::Bounded(1))]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.contains(&Choice::Occurrences {
            path: "/Element/Choice/FieldOne".to_string(),
            counts: vec![OccurrenceCount::Times(0), OccurrenceCount::Times(1)],
        }));
    }

    #[test]
    fn test_occurrences_range() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field_with_occurs("FieldOne", 0, MaxOccurs::Bounded(3))]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.contains(&Choice::Occurrences {
            path: "/Element/Choice/FieldOne".to_string(),
            counts: vec![
                OccurrenceCount::Times(0),
                OccurrenceCount::Times(1),
                OccurrenceCount::Times(2),
                OccurrenceCount::Times(3),
            ],
        }));
    }

    #[test]
    fn test_unbounded() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field_with_occurs("FieldOne", 0, MaxOccurs::Unbounded)]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let output = forks(&blocks, &element, Decisions::new()).unwrap();

        assert!(output.contains(&Choice::Occurrences {
            path: "/Element/Choice/FieldOne".to_string(),
            counts: vec![OccurrenceCount::Times(0), OccurrenceCount::Unbounded],
        }));
    }

    #[test]
    fn test_occurrence_decision_removes_fork() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            choice_group(vec![field_with_occurs("FieldOne", 0, MaxOccurs::Unbounded)]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let decisions = Decisions::new().with(Decision::occurrences("/Element/Choice/FieldOne", 4));
        let output = forks(&blocks, &element, decisions).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_occurrence_decision_below_minimum() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType::new(
            qname("SomeType"),
            sequence(vec![field_with_occurs("FieldOne", 2, MaxOccurs::Bounded(5))]),
        )));
        let element = TopLevelElement::new(qname("Element"), qname("SomeType"));

        let decisions = Decisions::new().with(Decision::occurrences("/Element/Sequence/FieldOne", 1));
        let output = forks(&blocks, &element, decisions);

        assert!(matches!(output, Err(GeneratorError::InvalidDecision { .. })));
    }

    #[test]
    fn test_unresolved_type_is_fatal() {
        let blocks = TypeRegistry::with_xml_building_blocks();
        let element = TopLevelElement::new(qname("Element"), qname("NobodyKnowsThisType"));

        let output = forks(&blocks, &element, Decisions::new());

        assert!(matches!(output, Err(GeneratorError::UnresolvedType { .. })));
    }

    #[test]
    fn test_abstract_type_without_implementations_is_fatal() {
        let mut blocks = TypeRegistry::with_xml_building_blocks();
        blocks.add_structure(Structure::Complex(ComplexType {
            name: qname("BaseType"),
            content: vec![],
            abstract_: true,
            extension_of: None,
        }));
        let element = TopLevelElement::new(qname("SomeElement"), qname("BaseType"));

        let output = forks(&blocks, &element, Decisions::new());

        assert!(matches!(output, Err(GeneratorError::NoConcreteImplementation { .. })));
    }
}
