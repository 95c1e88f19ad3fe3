use crate::exports::xml_node::XmlNode;
use crate::models::response::Response;
use std::sync::Arc;

/// Result of an operation as seen from the bindings.
#[derive(uniffi::Enum)]
pub enum ApiResponse {
    /// The reply was a `200` and was parsed.
    Parsed { root: Arc<XmlNode> },
    /// Any other reply, or structured output was turned off.
    Raw { body: String },
}

impl From<Response> for ApiResponse {
    fn from(response: Response) -> Self {
        match response {
            Response::Parsed(element) => ApiResponse::Parsed {
                root: XmlNode::new(element),
            },
            Response::Raw(body) => ApiResponse::Raw { body },
        }
    }
}
