use crate::errors::sdk_error::SdkError;
use crate::models::element::Element;
use crate::models::value::Value;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt::Display;

/// Renders a value as a complete XML document whose root element is `root_name`.
pub fn to_xml(value: &Value, root_name: &str) -> Result<String, SdkError> {
    write_document(&to_element(value, root_name)?)
}

/// Builds the element tree for `value` under a new element called `name`.
///
/// Mapping entries become named children. Sequence items have no name of their own, so
/// containers inside a sequence are flattened into the current element; a bare scalar
/// inside a sequence is an error.
pub fn to_element(value: &Value, name: &str) -> Result<Element, SdkError> {
    if !is_valid_name(name) {
        return Err(SdkError::InvalidElementName(name.to_string()));
    }

    let mut element = Element::new(name);
    match value {
        Value::Scalar(scalar) => element.text = Some(scalar.to_string()),
        _ => append_children(&mut element, value)?,
    }

    Ok(element)
}

fn append_children(parent: &mut Element, value: &Value) -> Result<(), SdkError> {
    match value {
        Value::Mapping(mapping) => {
            for (key, value) in mapping.iter() {
                parent.push(to_element(value, key)?);
            }
        }

        Value::Sequence(items) => {
            for item in items {
                append_children(parent, item)?;
            }
        }

        Value::Scalar(_) => return Err(SdkError::UnnamedValue),
    }

    Ok(())
}

/// Element names must start with a letter or underscore and continue with letters,
/// digits, `-`, `_` or `.`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }
        _ => false,
    }
}

/// Writes the declaration followed by `root`. Elements without text or children are
/// self-closed.
pub fn write_document(root: &Element) -> Result<String, SdkError> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(serialization_error)?;
    writer
        .write_event(Event::Text(BytesText::from_escaped("\n")))
        .map_err(serialization_error)?;
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).map_err(serialization_error)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), SdkError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let text = element.text.as_deref().filter(|text| !text.is_empty());
    if text.is_none() && element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(serialization_error);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(serialization_error)?;

    if let Some(text) = text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(serialization_error)?;
    }

    for child in &element.children {
        write_element(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(serialization_error)
}

fn serialization_error(error: impl Display) -> SdkError {
    SdkError::Serialization(error.to_string())
}
