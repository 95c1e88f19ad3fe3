use axum::Router;
use axum::extract::Path;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use log::{error, trace};
use tcu_sdk::Element;
use tcu_sdk::http::xml::parser::parse_document;
use tcu_sdk::http::xml::serializer::write_document;
use tokio::net::TcpListener;

pub const USERNAME: &str = "testing";
pub const SESSION_TOKEN: &str = "aaa123aaa123";

/// Operation that always fails with a `500`.
pub const SERVER_ERROR: &str = "serverError";
/// Operation that answers `200` with a broken document.
pub const MALFORMED: &str = "malformed";

/// Mimics the applicant, admission and dashboard APIs. Every parameter block is echoed
/// back as a `ResponseParameters` block with a success status.
pub fn router() -> Router {
    Router::new()
        .route("/applicants/{operation}", post(applicants).get(applicants))
        .route("/admission/{operation}", post(admission).get(admission))
        .route("/dashboard/{operation}", post(dashboard).get(dashboard))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, router()).await
}

async fn applicants(Path(operation): Path<String>, headers: HeaderMap, body: String) -> Response {
    reply("applicants", &operation, &headers, &body)
}

async fn admission(Path(operation): Path<String>, headers: HeaderMap, body: String) -> Response {
    reply("admission", &operation, &headers, &body)
}

async fn dashboard(Path(operation): Path<String>, headers: HeaderMap, body: String) -> Response {
    reply("dashboard", &operation, &headers, &body)
}

fn reply(family: &str, operation: &str, headers: &HeaderMap, body: &str) -> Response {
    trace!("C: {family}/{operation}\r\n{body}");

    match operation {
        SERVER_ERROR => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
        MALFORMED => return xml("<Response><Status>OK</Response>".to_string()),
        _ => (),
    }

    let accepts_xml = headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "application/xml");
    if !accepts_xml {
        return (StatusCode::NOT_ACCEPTABLE, "Not Acceptable").into_response();
    }

    let request = match parse_document(body) {
        Ok(request) if request.name() == "Request" => request,
        _ => return (StatusCode::BAD_REQUEST, "Malformed request").into_response(),
    };

    let username = request
        .find(&["UsernameToken", "Username"])
        .and_then(Element::text);
    let session_token = request
        .find(&["UsernameToken", "SessionToken"])
        .and_then(Element::text);
    if username != Some(USERNAME) || session_token != Some(SESSION_TOKEN) {
        return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response();
    }

    let mut response = Element::new("Response");
    response
        .attributes
        .push(("operation".to_string(), operation.to_string()));
    response
        .attributes
        .push(("endpoint".to_string(), family.to_string()));

    for block in request
        .children()
        .iter()
        .filter(|child| child.name() != "UsernameToken")
    {
        let mut parameters = Element::new("ResponseParameters");
        parameters.children.extend(block.children().iter().cloned());
        parameters.push(Element::with_text("StatusCode", "200"));
        parameters.push(Element::with_text("StatusDescription", "Successful"));
        response.push(parameters);
    }

    match write_document(&response) {
        Ok(document) => {
            trace!("S: {document}");
            xml(document)
        }
        Err(err) => {
            error!("Failed to write response: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn xml(document: String) -> Response {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "application/xml")],
        document,
    )
        .into_response()
}
