use crate::structures::QualifiedName;

/// A fixed value to render for every leaf of one pattern-restricted type
#[derive(Debug, Clone, PartialEq)]
pub struct RegexValueForType {
    pub type_name: QualifiedName,
    pub value: String,
}

/// How leaf values are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueStrategy {
    /// The same fixed value for every leaf of a kind; rendering the same
    /// schema with the same decisions gives the same document
    #[default]
    Defaults,
    /// Randomized values per leaf kind
    Random,
}

/// Caller-tunable rendering behaviour
#[derive(Debug, Clone, Default)]
pub struct RenderingConfig {
    regex_values: Vec<RegexValueForType>,
    strategy: ValueStrategy,
}

impl RenderingConfig {
    pub fn new() -> Self {
        RenderingConfig::default()
    }

    pub fn with_regex_value(mut self, type_name: QualifiedName, value: &str) -> Self {
        self.regex_values.push(RegexValueForType {
            type_name,
            value: value.to_string(),
        });
        self
    }

    pub fn with_strategy(mut self, strategy: ValueStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn regex_value_for_type(&self, type_name: &QualifiedName) -> Option<&str> {
        self.regex_values
            .iter()
            .find(|entry| &entry.type_name == type_name)
            .map(|entry| entry.value.as_str())
    }

    pub fn strategy(&self) -> ValueStrategy {
        self.strategy
    }
}
