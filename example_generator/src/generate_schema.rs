use xsd_parser::pipeline::parser::resolver::FileResolver;
use xsd_parser::{Parser, Schemas};

use crate::error::GeneratorError;

pub(crate) fn parse_schema_text(text: &str) -> Result<Schemas, GeneratorError> {
    let schemas = Parser::new()
        .with_resolver(FileResolver::new())
        .with_default_namespaces()
        .add_schema_from_str(text);

    match schemas {
        Ok(parsed) => Ok(parsed.finish()),
        Err(err) => Err(GeneratorError::SchemaParser(err.to_string())),
    }
}
