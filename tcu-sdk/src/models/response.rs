use crate::models::element::Element;

/// What a dispatched request returns: the parsed document on a structured 200, the body
/// verbatim otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Parsed(Element),
    Raw(String),
}

impl Response {
    pub fn element(&self) -> Option<&Element> {
        match self {
            Response::Parsed(element) => Some(element),
            Response::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        match self {
            Response::Raw(body) => Some(body),
            Response::Parsed(_) => None,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Response::Parsed(element) => Some(element),
            Response::Raw(_) => None,
        }
    }
}
