use crate::errors::sdk_error::SdkError;
use crate::http::xml::serializer::write_document;
use crate::models::element::Element;
use std::sync::Arc;

/// A parsed response element, queried by reference from the bindings.
#[derive(uniffi::Object)]
pub struct XmlNode {
    element: Element,
}

impl XmlNode {
    pub(crate) fn new(element: Element) -> Arc<Self> {
        Arc::new(Self { element })
    }
}

#[uniffi::export]
impl XmlNode {
    pub fn name(&self) -> String {
        self.element.name.clone()
    }

    pub fn text(&self) -> Option<String> {
        self.element.text.clone()
    }

    pub fn attribute(&self, name: String) -> Option<String> {
        self.element.attribute(&name).map(str::to_string)
    }

    pub fn children(&self) -> Vec<Arc<XmlNode>> {
        self.element
            .children()
            .iter()
            .cloned()
            .map(XmlNode::new)
            .collect()
    }

    /// First child with the given name.
    pub fn child(&self, name: String) -> Option<Arc<XmlNode>> {
        self.element.child(&name).cloned().map(XmlNode::new)
    }

    /// Follows a chain of child names from this node.
    pub fn find(&self, path: Vec<String>) -> Option<Arc<XmlNode>> {
        self.element.find(path.as_slice()).cloned().map(XmlNode::new)
    }

    /// Serializes this node back into a standalone document.
    pub fn to_xml(&self) -> Result<String, SdkError> {
        write_document(&self.element)
    }
}
