use crate::errors::sdk_error::SdkError;
use crate::models::element::Element;
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::fmt::Display;

/// Parses a complete XML document into its root [Element].
///
/// Text is accumulated across entity references and kept verbatim. Whitespace-only text
/// in an element that has child elements is indentation and becomes `None`. Comments,
/// processing instructions and the declaration are skipped.
pub fn parse_document(xml: &str) -> Result<Element, SdkError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(start) => open.push(open_element(&start, reader.decoder())?),

            Event::Empty(start) => {
                let element = open_element(&start, reader.decoder())?;
                close_element(element, &mut open, &mut root)?;
            }

            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| SdkError::ResponseParse("unexpected closing tag".to_string()))?;
                close_element(element, &mut open, &mut root)?;
            }

            Event::Text(text) => push_text(&mut open, &String::from_utf8_lossy(text.as_ref()))?,

            Event::CData(data) => push_text(&mut open, &String::from_utf8_lossy(data.as_ref()))?,

            Event::GeneralRef(reference) => {
                let entity = format!("&{};", String::from_utf8_lossy(reference.as_ref()));
                let resolved = unescape(&entity).map_err(parse_error)?;
                push_text(&mut open, &resolved)?;
            }

            Event::Eof => break,

            _ => (),
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(SdkError::ResponseParse(format!(
            "element <{}> is never closed",
            unclosed.name
        )));
    }

    root.ok_or_else(|| SdkError::ResponseParse("document has no root element".to_string()))
}

fn open_element(start: &BytesStart, decoder: Decoder) -> Result<Element, SdkError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));

    for attribute in start.attributes() {
        let attribute = attribute.map_err(parse_error)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).to_string();
        let value = attribute
            .decode_and_unescape_value(decoder)
            .map_err(parse_error)?
            .to_string();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn close_element(
    mut element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), SdkError> {
    if !element.children.is_empty() {
        element.text = element
            .text
            .take()
            .filter(|text| !text.trim().is_empty());
    }

    match open.last_mut() {
        Some(parent) => parent.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(SdkError::ResponseParse(
                "document has more than one root element".to_string(),
            ));
        }
    }

    Ok(())
}

fn push_text(open: &mut [Element], text: &str) -> Result<(), SdkError> {
    match open.last_mut() {
        Some(element) => element.text.get_or_insert_with(String::new).push_str(text),
        None if text.trim().is_empty() => (),
        None => {
            return Err(SdkError::ResponseParse(
                "text outside of the root element".to_string(),
            ));
        }
    }

    Ok(())
}

fn parse_error(error: impl Display) -> SdkError {
    SdkError::ResponseParse(error.to_string())
}
