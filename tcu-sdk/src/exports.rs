pub mod api_response;
pub mod client;
pub mod field;
pub mod xml_node;
