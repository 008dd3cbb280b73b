use crate::{RequestId, ServiceResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User pressed Generate Lead.
    SubmitClicked,
    /// Engine answered (or gave up on) a lead request.
    LeadResponded {
        request_id: RequestId,
        response: ServiceResponse,
    },
    /// User clicked Copy on the email draft.
    CopyClicked,
    /// The "Copied" acknowledgment timer fired.
    CopiedResetElapsed { generation: u64 },
    /// User clicked Draft in Mail.
    ComposeClicked,
}
