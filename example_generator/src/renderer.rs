use xml_builder::XMLElement;

use crate::chosen_path::ChosenPath;
use crate::decisions::Decisions;
use crate::error::GeneratorError;
use crate::generate_output::generate_output;
use crate::registry::TypeRegistry;
use crate::rendering_config::RenderingConfig;
use crate::structures::{SimpleType, TopLevelElement};
use crate::traverser::{TraverseHooks, Traverser};
use crate::values::leaf_value;

/// Builds the output document from the traversal event stream.
///
/// Expects a fully decided traversal: when forks are left open the walk
/// follows every possibility and the siblings it produces overwrite each
/// other at the root. The discovery hooks are deliberately not implemented.
struct XmlRenderingHooks<'a> {
    config: &'a RenderingConfig,
    root_namespace: &'a str,
    cursor: Vec<XMLElement>,
    finished_root: Option<XMLElement>,
}

impl<'a> XmlRenderingHooks<'a> {
    fn new(element: &'a TopLevelElement, config: &'a RenderingConfig) -> Self {
        XmlRenderingHooks {
            config,
            root_namespace: &element.name.namespace,
            cursor: Vec::new(),
            finished_root: None,
        }
    }

    fn open_element(&self, name: &str, path: &ChosenPath) -> XMLElement {
        let mut element = XMLElement::new(name);
        if self.cursor.is_empty() && !self.root_namespace.is_empty() {
            element.add_attribute("xmlns", self.root_namespace);
        }
        if let Some(implementation) = path.current_implementation_marker() {
            element.add_attribute("xsi:type", &implementation.name);
        }
        element
    }

    fn attach(&mut self, element: XMLElement) -> Result<(), GeneratorError> {
        match self.cursor.last_mut() {
            Some(parent) => parent
                .add_child(element)
                .map_err(|err| GeneratorError::XmlBuilder(err.to_string())),
            None => {
                self.finished_root = Some(element);
                Ok(())
            }
        }
    }
}

impl TraverseHooks for XmlRenderingHooks<'_> {
    fn on_enter_complex(&mut self, name: &str, path: &ChosenPath) -> Result<(), GeneratorError> {
        let element = self.open_element(name, path);
        self.cursor.push(element);
        Ok(())
    }

    fn on_exit_complex(&mut self, _path: &ChosenPath) -> Result<(), GeneratorError> {
        match self.cursor.pop() {
            Some(element) => self.attach(element),
            None => Err(GeneratorError::XmlBuilder(
                "closed a complex node that was never opened".to_string(),
            )),
        }
    }

    fn on_simple_leaf(&mut self, name: &str, simple: &SimpleType, path: &ChosenPath) -> Result<(), GeneratorError> {
        let mut element = self.open_element(name, path);
        let value = leaf_value(simple, self.config)?;
        element
            .add_text(value)
            .map_err(|err| GeneratorError::XmlBuilder(err.to_string()))?;
        self.attach(element)
    }
}

/// Renders one concrete example document for a top-level element
pub struct XmlRenderer<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> XmlRenderer<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        XmlRenderer { registry }
    }

    pub fn render(
        &self,
        element: &TopLevelElement,
        decisions: &Decisions,
        config: &RenderingConfig,
    ) -> Result<String, GeneratorError> {
        let mut hooks = XmlRenderingHooks::new(element, config);
        Traverser::new(self.registry, decisions).traverse(element, &mut hooks)?;

        match hooks.finished_root {
            Some(root) => generate_output(root),
            None => Err(GeneratorError::XmlBuilder(
                "the traversal did not produce a document".to_string(),
            )),
        }
    }
}
