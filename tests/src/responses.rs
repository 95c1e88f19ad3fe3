use crate::{mock_client, spawn_mock_server};
use mock_server::{MALFORMED, SERVER_ERROR};
use tcu_sdk::{Endpoint, Mapping, Response, SdkError, Value};

fn programme() -> Value {
    Value::from(Mapping::new().with("Programme", "UD023"))
}

#[tokio::test]
async fn server_errors_come_back_raw() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client
        .send_request(SERVER_ERROR, programme(), Endpoint::Applicant, "POST")
        .await
        .unwrap();

    assert_eq!(response, Response::Raw("Internal Server Error".to_string()));
}

#[tokio::test]
async fn rejected_credentials_come_back_raw() {
    let address = spawn_mock_server().await.unwrap();
    let mut client = mock_client(address).unwrap();
    client.config_mut().set_session_token("expired");

    let response = client.get_status("UD023").await.unwrap();

    assert_eq!(response.raw(), Some("Invalid credentials"));
}

#[tokio::test]
async fn structured_output_can_be_turned_off() {
    let address = spawn_mock_server().await.unwrap();
    let mut client = mock_client(address).unwrap();
    client.config_mut().set_structured_output(false);

    let response = client.get_status("UD023").await.unwrap();

    let body = response.raw().unwrap();
    assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(body.contains("<Programme>UD023</Programme>"));
}

#[tokio::test]
async fn malformed_success_is_a_parse_error() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let result = client
        .send_request(MALFORMED, programme(), Endpoint::Dashboard, "POST")
        .await;

    assert!(matches!(result, Err(SdkError::ResponseParse(_))));
}

#[tokio::test]
async fn get_requests_are_supported() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client
        .send_request("getStatus", programme(), Endpoint::Applicant, "get")
        .await
        .unwrap();

    assert_eq!(
        response.element().unwrap().attribute("operation"),
        Some("getStatus")
    );
}

#[tokio::test]
async fn precondition_failures() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let empty = client
        .send_request("getStatus", Value::from(Mapping::new()), Endpoint::Applicant, "POST")
        .await;
    let put = client
        .send_request("getStatus", programme(), Endpoint::Applicant, "PUT")
        .await;

    assert!(matches!(empty, Err(SdkError::MissingParameters)));
    assert!(matches!(put, Err(SdkError::UnsupportedMethod(_))));
}

#[tokio::test]
async fn invalid_url_keeps_working_configuration() {
    let address = spawn_mock_server().await.unwrap();
    let mut client = mock_client(address).unwrap();

    let result = client.config_mut().set_applicant_url("not-a-url");

    assert!(matches!(result, Err(SdkError::InvalidConfiguration(_))));
    assert!(client.get_status("UD023").await.unwrap().element().is_some());
}
