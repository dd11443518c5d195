use super::*;
use crate::wire::INITIAL_STATUS;

fn base() -> Url {
    Url::parse("https://script.example.com/macros/s/abc/exec").expect("url")
}

#[test]
fn search_url_appends_action_and_encoded_email() {
    let url = search_url(&base(), "a+b@example.com");
    assert_eq!(
        url.as_str(),
        "https://script.example.com/macros/s/abc/exec?action=getRequirements&email=a%2Bb%40example.com"
    );
}

#[test]
fn search_url_keeps_existing_query() {
    let base = Url::parse("https://example.test/exec?key=1").expect("url");
    let url = search_url(&base, "x@y.z");
    assert_eq!(url.query(), Some("key=1&action=getRequirements&email=x%40y.z"));
}

#[test]
fn submit_body_wraps_requirement() {
    let requirement = Requirement {
        member_name: "Ada".to_owned(),
        member_email: "ada@example.com".to_owned(),
        department: "Design".to_owned(),
        priority: "Low".to_owned(),
        title: "Fonts".to_owned(),
        description: "<p>x</p>".to_owned(),
        timestamp: "2026-10-17T00:00:00.000Z".to_owned(),
        status: INITIAL_STATUS.to_owned(),
        files: Vec::new(),
    };
    let body = submit_body(&requirement).expect("body");
    let value: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(value["action"], "submitRequirement");
    assert_eq!(value["data"]["title"], "Fonts");
    assert_eq!(value["data"]["files"], serde_json::json!([]));
}

#[test]
fn parse_submit_response_reads_flag_and_message() {
    let response = parse_submit_response(r#"{"success":false,"message":"Duplicate title"}"#).expect("parse");
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Duplicate title"));
}

#[test]
fn parse_responses_reject_html_bodies() {
    let err = parse_submit_response("<html>moved</html>").expect_err("not json");
    assert!(matches!(err, EndpointError::Decode(_)));
    let err = parse_search_response("").expect_err("empty");
    assert!(matches!(err, EndpointError::Decode(_)));
}

#[test]
fn parse_search_response_reads_records() {
    let response =
        parse_search_response(r#"{"success":true,"data":[{"title":"A","status":"Done"}]}"#).expect("parse");
    let data = response.data.expect("data");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].title, "A");
}
