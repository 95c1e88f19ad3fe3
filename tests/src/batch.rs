use crate::{mock_client, spawn_mock_server};
use tcu_sdk::{Element, Mapping, SdkError, Value};

fn applicant(f4indexno: &str, f6indexno: &str) -> Value {
    Value::from(
        Mapping::new()
            .with("Category", "A")
            .with("f4indexno", f4indexno)
            .with("f6indexno", f6indexno),
    )
}

#[tokio::test]
async fn add_batch_sends_one_block_per_record() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client
        .add_batch(Value::from(vec![
            applicant("S0100/0001/2019", "S0100/0501/2021"),
            applicant("S0100/0002/2019", "S0100/0502/2021"),
        ]))
        .await
        .unwrap();

    let root = response.element().unwrap();
    assert_eq!(root.attribute("operation"), Some("add"));
    let indices: Vec<&str> = root
        .children_named("ResponseParameters")
        .filter_map(|block| block.child_text("f4indexno"))
        .collect();
    assert_eq!(indices, vec!["S0100/0001/2019", "S0100/0002/2019"]);
}

#[tokio::test]
async fn batch_request_body_has_single_credential_block() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let xml = client
        .request_body(
            Value::from(vec![
                applicant("S0100/0001/2019", "S0100/0501/2021"),
                applicant("S0100/0002/2019", "S0100/0502/2021"),
            ]),
            "RequestParameters",
        )
        .unwrap();

    assert_eq!(xml.matches("<UsernameToken>").count(), 1);
    assert_eq!(xml.matches("<RequestParameters>").count(), 2);
}

#[tokio::test]
async fn add_batch_rejects_mappings() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let result = client
        .add_batch(applicant("S0100/0001/2019", "S0100/0501/2021"))
        .await;

    assert!(matches!(result, Err(SdkError::BatchInputType)));
}

#[tokio::test]
async fn batch_of_bare_index_numbers_is_rejected() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let result = client
        .add_batch(Value::from(vec!["S0100/0001/2019", "S0100/0002/2019"]))
        .await;

    assert!(matches!(result, Err(SdkError::UnnamedValue)));
}

#[tokio::test]
async fn nested_records_keep_their_structure() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let record = Value::from(
        Mapping::new()
            .with("f4indexno", "S0100/0001/2019")
            .with(
                "Contacts",
                vec![
                    Value::from(Mapping::new().with("MobileNumber", "0712345678")),
                    Value::from(Mapping::new().with("MobileNumber", "0787654321")),
                ],
            ),
    );

    let response = client.add_batch(Value::from(vec![record])).await.unwrap();

    let contacts = response
        .element()
        .and_then(|root| root.find(&["ResponseParameters", "Contacts"]))
        .unwrap();
    let numbers: Vec<&str> = contacts
        .children_named("MobileNumber")
        .filter_map(Element::text)
        .collect();
    assert_eq!(numbers, vec!["0712345678", "0787654321"]);
}
