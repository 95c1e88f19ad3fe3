use crate::{mock_client, spawn_mock_server};
use tcu_sdk::Element;

#[tokio::test]
async fn populate_goes_to_dashboard() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client.populate("UD023", 120, 98).await.unwrap();

    let root = response.into_element().unwrap();
    assert_eq!(root.attribute("endpoint"), Some("dashboard"));
    let parameters = root.child("ResponseParameters").unwrap();
    assert_eq!(parameters.child_text("Programme"), Some("UD023"));
    assert_eq!(parameters.child_text("Males"), Some("120"));
    assert_eq!(parameters.child_text("Females"), Some("98"));
    assert_eq!(
        root.find(&["ResponseParameters", "StatusDescription"])
            .and_then(Element::text),
        Some("Successful")
    );
}
