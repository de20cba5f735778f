#[cfg(test)]
mod tests {
    use examplegenerator::{ChosenPath, QualifiedName};

    fn any_type() -> QualifiedName {
        QualifiedName::new("does not", "matter")
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(ChosenPath::new().to_string(), "/");
    }

    #[test]
    fn test_current_path_indication() {
        let mut stack = ChosenPath::new();
        stack.push_root("element");
        stack.push_element("AField", &any_type());

        assert_eq!(stack.to_string(), "/element/AField");

        stack.pop();

        assert_eq!(stack.to_string(), "/element");
    }

    #[test]
    fn test_group_nodes_in_path() {
        let mut stack = ChosenPath::new();
        stack.push_root("element");
        stack.push_sequence();
        stack.push_choice();

        assert_eq!(stack.to_string(), "/element/Sequence/Choice");
    }

    #[test]
    fn test_markers_in_path() {
        let mut stack = ChosenPath::new();
        stack.push_root("element");
        stack.push_choice();
        stack.mark_choice_index(1);
        stack.push_element("AField", &any_type());
        stack.mark_implementation(QualifiedName::new("", "Impl1"));

        assert_eq!(stack.to_string(), "/element/Choice[1]/AField[impl=Impl1]");
    }

    #[test]
    fn test_marker_cleared_by_pop() {
        let mut stack = ChosenPath::new();
        stack.push_root("element");
        stack.push_element("AField", &any_type());
        stack.mark_implementation(QualifiedName::new("", "Impl1"));
        stack.pop();
        stack.push_element("AField", &any_type());

        assert_eq!(stack.to_string(), "/element/AField");
    }

    #[test]
    fn test_recursion() {
        let mut stack = ChosenPath::new();
        stack.push_root("element");
        stack.push_element("AField", &any_type());

        assert!(!stack.recursion_will_start_when_adding(&any_type(), 2));

        stack.push_element("AField", &any_type());

        assert!(stack.recursion_will_start_when_adding(&any_type(), 2));
    }

    #[test]
    fn test_recursion_depth() {
        let mut stack = ChosenPath::new();
        stack.push_root("element");
        stack.push_element("AField", &any_type());
        stack.push_element("AField", &any_type());

        assert!(stack.recursion_will_start_when_adding(&any_type(), 2));
        assert!(!stack.recursion_will_start_when_adding(&any_type(), 3));
    }

    #[test]
    fn test_recursion_counts_by_type_not_name() {
        let other = QualifiedName::new("does not", "matter either");

        let mut stack = ChosenPath::new();
        stack.push_root("element");
        stack.push_element("AField", &any_type());
        stack.push_element("BField", &any_type());

        assert!(stack.recursion_will_start_when_adding(&any_type(), 2));
        assert!(!stack.recursion_will_start_when_adding(&other, 2));
    }

    #[test]
    fn test_root_element_does_not_count_towards_recursion() {
        let mut stack = ChosenPath::new();
        stack.push_root("element");

        assert!(!stack.recursion_will_start_when_adding(&any_type(), 1));
    }
}
