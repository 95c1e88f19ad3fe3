use crate::{mock_client, spawn_mock_server};
use tcu_sdk::{Element, ProgrammeSubmission, Resubmission};

#[tokio::test]
async fn check_status_single() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client.check_status(&["S0100/0001/2019"]).await.unwrap();

    let root = response.element().unwrap();
    assert_eq!(root.attribute("operation"), Some("checkStatus"));
    assert_eq!(root.attribute("endpoint"), Some("applicants"));
    assert_eq!(root.children_named("ResponseParameters").count(), 1);
    assert_eq!(
        root.find(&["ResponseParameters", "f4indexno"])
            .and_then(Element::text),
        Some("S0100/0001/2019")
    );
    assert_eq!(
        root.find(&["ResponseParameters", "StatusCode"])
            .and_then(Element::text),
        Some("200")
    );
}

#[tokio::test]
async fn check_status_many_in_one_block() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client
        .check_status(&["S0100/0001/2019", "S0100/0002/2019", "S0100/0003/2019"])
        .await
        .unwrap();

    let root = response.element().unwrap();
    let blocks: Vec<&Element> = root.children_named("ResponseParameters").collect();
    assert_eq!(blocks.len(), 1);
    let indices: Vec<&str> = blocks[0]
        .children_named("f4indexno")
        .filter_map(Element::text)
        .collect();
    assert_eq!(
        indices,
        vec!["S0100/0001/2019", "S0100/0002/2019", "S0100/0003/2019"]
    );
}

#[tokio::test]
async fn add_joins_other_indices() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client
        .add(
            "A",
            "S0100/0001/2019",
            "S0100/0501/2021",
            &["S0200/0003/2018", "P0300/0004/2018"],
            &[],
        )
        .await
        .unwrap();

    let parameters = response
        .element()
        .and_then(|root| root.child("ResponseParameters"))
        .unwrap();
    assert_eq!(parameters.child_text("Category"), Some("A"));
    assert_eq!(
        parameters.child_text("Otherf4indexno"),
        Some("S0200/0003/2018,P0300/0004/2018")
    );
    assert!(parameters.child("Otherf6indexno").is_some());
    assert_eq!(parameters.child_text("Otherf6indexno"), None);
}

#[tokio::test]
async fn submit_programme_sends_defaults() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let submission = ProgrammeSubmission {
        f4indexno: "S0100/0001/2019".to_string(),
        f6indexno: "S0100/0501/2021".to_string(),
        selected_programmes: "UD023,UD045".to_string(),
        programme_admitted: "UD023".to_string(),
        admission_status: "PROVISIONAL ADMISSION".to_string(),
        date_of_birth: "2001-04-13".to_string(),
        email_address: Some("applicant@example.com".to_string()),
        ..Default::default()
    };

    let response = client.submit_programme(&submission).await.unwrap();

    let root = response.element().unwrap();
    assert_eq!(root.attribute("operation"), Some("submitProgramme"));
    let parameters = root.child("ResponseParameters").unwrap();
    assert_eq!(parameters.child_text("Nationality"), Some("Tanzanian"));
    assert_eq!(parameters.child_text("Impairment"), Some("None"));
    assert_eq!(
        parameters.child_text("EmailAddress"),
        Some("applicant@example.com")
    );
}

#[tokio::test]
async fn resubmit_leaves_out_empty_fields() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let resubmission = Resubmission {
        f4indexno: "S0100/0001/2019".to_string(),
        f6indexno: "S0100/0501/2021".to_string(),
        selected_programmes: "UD023".to_string(),
        programme_admitted: "UD023".to_string(),
        admission_status: "ADMITTED".to_string(),
        date_of_birth: "2001-04-13".to_string(),
        ..Default::default()
    };

    let response = client.resubmit(&resubmission).await.unwrap();

    let parameters = response
        .element()
        .and_then(|root| root.child("ResponseParameters"))
        .unwrap();
    assert_eq!(parameters.child_text("Category"), Some("Eligible"));
    assert!(parameters.child("Other_f4indexno").is_none());
    assert!(parameters.child("MobileNumber").is_none());
}

#[tokio::test]
async fn unconfirm_carries_institution_code() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let response = client.unconfirm("S0100/0001/2019", "X7Y2").await.unwrap();

    let parameters = response
        .element()
        .and_then(|root| root.child("ResponseParameters"))
        .unwrap();
    let names: Vec<&str> = parameters.children().iter().map(Element::name).collect();
    assert_eq!(
        names,
        vec![
            "institutionCode",
            "f4indexno",
            "ConfirmationCode",
            "StatusCode",
            "StatusDescription"
        ]
    );
    assert_eq!(parameters.child_text("institutionCode"), Some("UD01"));
}

#[tokio::test]
async fn confirmation_operations() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let confirmed = client.confirm("S0100/0001/2019", "X7Y2").await.unwrap();
    let rejected = client.reject("S0100/0001/2019", "X7Y2").await.unwrap();

    for (response, operation) in [(confirmed, "confirm"), (rejected, "reject")] {
        let root = response.element().unwrap();
        assert_eq!(root.attribute("operation"), Some(operation));
        assert_eq!(
            root.find(&["ResponseParameters", "ConfirmationCode"])
                .and_then(Element::text),
            Some("X7Y2")
        );
    }
}

#[tokio::test]
async fn programme_queries() {
    let client = mock_client(spawn_mock_server().await.unwrap()).unwrap();

    let status = client.get_status("UD023").await.unwrap();
    let confirmed = client.get_confirmed("UD023").await.unwrap();
    let verification = client
        .get_applicant_verification_status("UD023")
        .await
        .unwrap();
    let programmes = client.get_programmes().await.unwrap();

    assert_eq!(
        status.element().unwrap().find(&["ResponseParameters", "Programme"]).and_then(Element::text),
        Some("UD023")
    );
    assert_eq!(
        confirmed.element().unwrap().attribute("operation"),
        Some("getConfirmed")
    );
    assert_eq!(
        verification
            .element()
            .unwrap()
            .find(&["ResponseParameters", "ProgrammeCode"])
            .and_then(Element::text),
        Some("UD023")
    );
    assert_eq!(
        programmes
            .element()
            .unwrap()
            .find(&["ResponseParameters", "institutionCode"])
            .and_then(Element::text),
        Some("UD01")
    );
}
