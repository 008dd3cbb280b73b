use coldleads_logging::leads_debug;
use serde_json::{Map, Value};

use crate::present::{DEFAULT_CONTACT_NAME, NO_RECENT_NEWS};
use crate::{LeadError, LeadResult, GENERIC_FAILURE_MESSAGE};

/// What came back from the lead service for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResponse {
    /// The service answered with an HTTP status and a (possibly empty) body.
    Replied { status: u16, body: Vec<u8> },
    /// The call never produced a response.
    Unreachable { reason: String },
    /// The engine shut down with the request still pending.
    Abandoned,
}

/// Turn a service response into the next terminal status payload.
pub fn classify_response(response: ServiceResponse) -> Result<LeadResult, LeadError> {
    match response {
        ServiceResponse::Replied { status, body } => {
            let payload = parse_body(&body);
            if (200..300).contains(&status) {
                Ok(lead_from_payload(&payload))
            } else {
                Err(LeadError::RemoteRejected {
                    status,
                    message: extract_error_message(&payload),
                })
            }
        }
        ServiceResponse::Unreachable { reason } => Err(LeadError::TransportFailure { reason }),
        ServiceResponse::Abandoned => Err(LeadError::Interrupted),
    }
}

/// Derive a banner message from an error body.
///
/// `detail` as a string is used verbatim; as a list, the `msg` of each entry
/// is joined with `", "`. Either may come out empty. A missing or otherwise
/// shaped `detail` yields the generic failure text.
pub fn extract_error_message(payload: &Value) -> String {
    match payload.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| wire_text(entry.get("msg")).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", "),
        _ => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}

fn parse_body(body: &[u8]) -> Value {
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => {
            leads_debug!("Response body is not JSON ({} bytes): {}", body.len(), err);
            Value::Object(Map::new())
        }
    }
}

fn lead_from_payload(payload: &Value) -> LeadResult {
    LeadResult {
        contact_name: wire_text(payload.get("cto"))
            .unwrap_or_else(|| DEFAULT_CONTACT_NAME.to_string()),
        email_draft: wire_text(payload.get("email_draft")).unwrap_or_default(),
        company_pulse: wire_text(payload.get("company_pulse"))
            .unwrap_or_else(|| NO_RECENT_NEWS.to_string()),
    }
}

/// Strings pass through, `null` counts as absent, other scalars are rendered.
fn wire_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
