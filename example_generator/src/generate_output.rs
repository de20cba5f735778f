use xml_builder::{XMLBuilder, XMLElement, XMLVersion};

use crate::error::GeneratorError;

/// Serialize a finished root element into the output document string
pub(crate) fn generate_output(root_element: XMLElement) -> Result<String, GeneratorError> {
    let mut xml = XMLBuilder::new()
        .version(XMLVersion::XML1_1)
        .encoding("UTF-8".into())
        .build();

    let mut writer: Vec<u8> = Vec::new();
    xml.set_root_element(root_element);
    if let Err(err) = xml.generate(&mut writer) {
        return Err(GeneratorError::XmlBuilder(err.to_string()));
    }

    match String::from_utf8(writer) {
        Ok(output) => Ok(output),
        Err(err) => Err(GeneratorError::XmlBuilder(err.to_string())),
    }
}
