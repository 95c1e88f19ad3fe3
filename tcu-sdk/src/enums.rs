pub mod endpoint;
pub mod http_method;
