use coldleads_core::{
    classify_response, LeadError, LeadResult, ServiceResponse, GENERIC_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;

fn replied(status: u16, body: &str) -> Result<LeadResult, LeadError> {
    classify_response(ServiceResponse::Replied {
        status,
        body: body.as_bytes().to_vec(),
    })
}

fn rejection_message(status: u16, body: &str) -> String {
    match replied(status, body) {
        Err(LeadError::RemoteRejected { message, .. }) => message,
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn success_applies_field_fallbacks() {
    let lead = replied(200, "{}").unwrap();
    assert_eq!(
        lead,
        LeadResult {
            contact_name: "the CTO".to_string(),
            email_draft: String::new(),
            company_pulse: "No recent news found.".to_string(),
        }
    );
}

#[test]
fn success_keeps_wire_values() {
    let body = r#"{"cto":"Rohit Sharma","email_draft":"Hi Rohit","company_pulse":"Raised Series C"}"#;
    let lead = replied(201, body).unwrap();
    assert_eq!(lead.contact_name, "Rohit Sharma");
    assert_eq!(lead.email_draft, "Hi Rohit");
    assert_eq!(lead.company_pulse, "Raised Series C");
}

#[test]
fn success_with_unparseable_body_uses_fallbacks() {
    let lead = replied(204, "").unwrap();
    assert_eq!(lead.contact_name, "the CTO");
    let lead = replied(200, "<html>proxy page</html>").unwrap();
    assert_eq!(lead.email_draft, "");
}

#[test]
fn null_fields_count_as_absent() {
    let lead = replied(200, r#"{"cto":null,"company_pulse":null}"#).unwrap();
    assert_eq!(lead.contact_name, "the CTO");
    assert_eq!(lead.company_pulse, "No recent news found.");
}

#[test]
fn string_detail_is_used_verbatim() {
    assert_eq!(rejection_message(400, r#"{"detail":"bad url"}"#), "bad url");
    assert_eq!(
        rejection_message(503, r#"{"detail":"Search unavailable: TAVILY_API_KEY not set."}"#),
        "Search unavailable: TAVILY_API_KEY not set."
    );
}

#[test]
fn list_detail_joins_messages() {
    assert_eq!(
        rejection_message(422, r#"{"detail":[{"msg":"a"},{"msg":"b"}]}"#),
        "a, b"
    );
}

#[test]
fn missing_or_malformed_detail_is_generic() {
    assert_eq!(rejection_message(500, "{}"), GENERIC_FAILURE_MESSAGE);
    assert_eq!(rejection_message(500, r#"{"detail":42}"#), GENERIC_FAILURE_MESSAGE);
    assert_eq!(rejection_message(502, "Bad Gateway"), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn empty_detail_stays_empty() {
    assert_eq!(rejection_message(400, r#"{"detail":""}"#), "");
    assert_eq!(rejection_message(422, r#"{"detail":[]}"#), "");
}

#[test]
fn status_boundaries_follow_2xx_range() {
    assert!(replied(199, "{}").is_err());
    assert!(replied(200, "{}").is_ok());
    assert!(replied(299, "{}").is_ok());
    assert!(replied(300, "{}").is_err());
}

#[test]
fn rejection_keeps_status_code() {
    assert_eq!(
        replied(404, r#"{"detail":"Not Found"}"#),
        Err(LeadError::RemoteRejected {
            status: 404,
            message: "Not Found".to_string(),
        })
    );
}

#[test]
fn unreachable_service_degrades_to_generic_message() {
    let err = classify_response(ServiceResponse::Unreachable {
        reason: "connection refused".to_string(),
    })
    .unwrap_err();
    assert_eq!(
        err,
        LeadError::TransportFailure {
            reason: "connection refused".to_string(),
        }
    );
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}
