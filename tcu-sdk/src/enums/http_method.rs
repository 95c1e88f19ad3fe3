use crate::errors::sdk_error::SdkError;
use std::fmt;
use std::str::FromStr;

/// Methods the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl FromStr for HttpMethod {
    type Err = SdkError;

    /// Case-insensitive. An empty string means [Post][HttpMethod::Post].
    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method {
            "" => Ok(HttpMethod::Post),
            method if method.eq_ignore_ascii_case("GET") => Ok(HttpMethod::Get),
            method if method.eq_ignore_ascii_case("POST") => Ok(HttpMethod::Post),
            _ => Err(SdkError::UnsupportedMethod(method.to_string())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}
