use fake::{Fake, Faker};
use rand::Rng;

use crate::error::GeneratorError;
use crate::regex_sample;
use crate::rendering_config::{RenderingConfig, ValueStrategy};
use crate::structures::SimpleType;

/// Produce the text content for one simple leaf.
///
/// Pattern-restricted types take the configured override for their name when
/// one exists, regardless of strategy. Rendering an unmapped simple type is
/// an error; it means the schema used a base type this generator has no value
/// policy for.
pub(crate) fn leaf_value(simple: &SimpleType, config: &RenderingConfig) -> Result<String, GeneratorError> {
    match simple {
        SimpleType::Regex { name, pattern } => {
            if let Some(value) = config.regex_value_for_type(name) {
                return Ok(value.to_string());
            }
            match config.strategy() {
                ValueStrategy::Defaults => Ok(format!("pattern({})", pattern)),
                ValueStrategy::Random => regex_sample::sample_matching(pattern),
            }
        }
        SimpleType::Enumeration { name, values } => match config.strategy() {
            ValueStrategy::Defaults => values.first().cloned().ok_or(GeneratorError::UnknownSimpleType {
                type_name: name.clone(),
            }),
            ValueStrategy::Random => {
                if values.is_empty() {
                    return Err(GeneratorError::UnknownSimpleType {
                        type_name: name.clone(),
                    });
                }
                let index = rand::rng().random_range(0..values.len());
                Ok(values[index].clone())
            }
        },
        SimpleType::Unknown { name, .. } => Err(GeneratorError::UnknownSimpleType {
            type_name: name.clone(),
        }),
        other => match config.strategy() {
            ValueStrategy::Defaults => Ok(default_value(other)),
            ValueStrategy::Random => Ok(random_value(other)),
        },
    }
}

fn default_value(simple: &SimpleType) -> String {
    match simple {
        SimpleType::String(_) => "string".to_string(),
        SimpleType::Boolean(_) => "true".to_string(),
        SimpleType::Int(_) => "1".to_string(),
        SimpleType::Decimal(_) => "123.456".to_string(),
        SimpleType::DateTime(_) => "2002-05-30T09:00:00".to_string(),
        SimpleType::Base64(_) => "ZXhhbXBsZQ==".to_string(),
        SimpleType::Regex { .. } | SimpleType::Enumeration { .. } | SimpleType::Unknown { .. } => {
            unreachable!("handled before dispatching on strategy")
        }
    }
}

fn make_fake<Output: fake::Dummy<Faker> + ToString>() -> String {
    Faker.fake::<Output>().to_string()
}

fn random_value(simple: &SimpleType) -> String {
    match simple {
        SimpleType::String(_) => make_fake::<String>(),
        SimpleType::Boolean(_) => make_fake::<bool>(),
        SimpleType::Int(_) => make_fake::<i32>(),
        SimpleType::Decimal(_) => make_fake::<f32>(),
        // No faker maps onto these lexical spaces
        SimpleType::DateTime(_) => "2002-05-30T09:00:00".to_string(),
        SimpleType::Base64(_) => "ZXhhbXBsZQ==".to_string(),
        SimpleType::Regex { .. } | SimpleType::Enumeration { .. } | SimpleType::Unknown { .. } => {
            unreachable!("handled before dispatching on strategy")
        }
    }
}
