use super::*;

fn sample_requirement() -> Requirement {
    Requirement {
        member_name: "Ada".to_owned(),
        member_email: "ada@example.com".to_owned(),
        department: "Engineering".to_owned(),
        priority: "High".to_owned(),
        title: "New laptop".to_owned(),
        description: "<p>Need a new laptop</p>".to_owned(),
        timestamp: "2026-10-17T09:30:00.000Z".to_owned(),
        status: INITIAL_STATUS.to_owned(),
        files: vec![AttachmentDescriptor {
            name: "quote.pdf".to_owned(),
            mime_type: "application/pdf".to_owned(),
            data: "JVBERi0=".to_owned(),
        }],
    }
}

#[test]
fn submit_envelope_uses_camel_case_and_action() {
    let requirement = sample_requirement();
    let value = serde_json::to_value(SubmitEnvelope::new(&requirement)).expect("serialize");

    assert_eq!(value["action"], "submitRequirement");
    assert_eq!(value["data"]["memberName"], "Ada");
    assert_eq!(value["data"]["memberEmail"], "ada@example.com");
    assert_eq!(value["data"]["status"], "Pending");
    assert_eq!(value["data"]["files"][0]["mimeType"], "application/pdf");
    assert_eq!(value["data"]["files"][0]["data"], "JVBERi0=");
}

#[test]
fn record_decodes_with_missing_optional_fields() {
    let record: RequirementRecord =
        serde_json::from_str(r#"{"title":"Printer","status":"Done"}"#).expect("decode");
    assert_eq!(record.title, "Printer");
    assert_eq!(record.status, "Done");
    assert!(record.member_name.is_empty());
    assert!(record.file_urls.is_none());
    assert!(record.admin_comments.is_none());
}

#[test]
fn record_decodes_file_urls_and_comments() {
    let record: RequirementRecord = serde_json::from_str(
        r#"{"status":"In Progress","fileUrls":"https://a.test/1, https://a.test/2","adminComments":"On it"}"#,
    )
    .expect("decode");
    assert_eq!(record.file_urls.as_deref(), Some("https://a.test/1, https://a.test/2"));
    assert_eq!(record.admin_comments.as_deref(), Some("On it"));
}

#[test]
fn submit_response_defaults_missing_flag_to_failure() {
    let response: SubmitResponse = serde_json::from_str("{}").expect("decode");
    assert!(!response.success);
    assert!(response.message.is_none());
}

#[test]
fn search_response_tolerates_null_data() {
    let response: SearchResponse =
        serde_json::from_str(r#"{"success":true,"data":null}"#).expect("decode");
    assert!(response.success);
    assert!(response.data.is_none());
}

#[test]
fn option_lists_are_non_empty() {
    assert!(PRIORITY_OPTIONS.contains(&"High"));
    assert!(DEPARTMENT_OPTIONS.contains(&"Engineering"));
}

// =============================================================
// Spreadsheet cell values
// =============================================================

#[test]
fn record_decodes_null_fields_as_empty_text() {
    let record: RequirementRecord = serde_json::from_str(
        r#"{"title":null,"status":"Pending","description":null,"fileUrls":null,"adminComments":null}"#,
    )
    .expect("decode");
    assert_eq!(record.title, "");
    assert_eq!(record.description, "");
    assert_eq!(record.status, "Pending");
    assert!(record.file_urls.is_none());
    assert!(record.admin_comments.is_none());
}

#[test]
fn record_decodes_numeric_and_boolean_cells_as_text() {
    let record: RequirementRecord =
        serde_json::from_str(r#"{"title":2026,"priority":1.5,"department":true,"adminComments":42}"#)
            .expect("decode");
    assert_eq!(record.title, "2026");
    assert_eq!(record.priority, "1.5");
    assert_eq!(record.department, "true");
    assert_eq!(record.admin_comments.as_deref(), Some("42"));
}

#[test]
fn search_response_keeps_valid_rows_beside_odd_cells() {
    let response = crate::endpoint::parse_search_response(
        r#"{"success":true,"data":[{"title":2026,"status":"Done"},{"title":null,"status":"Pending"},{"title":"Chairs","status":"Done"}]}"#,
    )
    .expect("decode");
    let records = response.data.expect("data");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "2026");
    assert_eq!(records[1].title, "");
    assert_eq!(records[2].title, "Chairs");
}
