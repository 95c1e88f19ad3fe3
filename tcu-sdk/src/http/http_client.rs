use crate::config::validate_url;
use crate::enums::http_method::HttpMethod;
use crate::envelope::Envelope;
use crate::errors::sdk_error::SdkError;
use crate::http::xml::parser::parse_document;
use crate::models::response::Response;
use log::trace;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderValue};

/// Sends envelopes to the API and interprets the replies.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Uses an already configured `reqwest` client, e.g. one with a timeout.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Posts (or gets) `envelope` to `base_url` joined with `operation`.
    ///
    /// Missing parameters and unsupported methods are reported before anything is sent.
    /// A `200` reply is parsed when `structured` is set; every other reply is returned raw.
    pub async fn send(
        &self,
        operation: &str,
        envelope: &Envelope,
        base_url: &str,
        method: &str,
        structured: bool,
    ) -> Result<Response, SdkError> {
        if !envelope.has_parameters() {
            return Err(SdkError::MissingParameters);
        }

        let method: HttpMethod = method.parse()?;
        let url = validate_url(base_url)?
            .join(operation)
            .map_err(|error| SdkError::InvalidConfiguration(format!("{operation}: {error}")))?;
        let body = envelope.to_xml()?;

        trace!("C: {method} {url}\r\n{body}");

        let response = self
            .client
            .request(method.into(), url)
            .header(ACCEPT, HeaderValue::from_static("application/xml"))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        trace!("S: {status}\r\n{body}");

        if status == StatusCode::OK && structured {
            return parse_document(&body).map(Response::Parsed);
        }

        Ok(Response::Raw(body))
    }
}
