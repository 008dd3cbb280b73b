//! ColdLeads core: pure request lifecycle state machine and presentation helpers.
mod effect;
mod error;
mod input;
mod msg;
pub mod present;
mod response;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{LeadError, EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, INTERRUPTED_MESSAGE};
pub use input::{normalize_company_url, NormalizedUrl};
pub use msg::Msg;
pub use response::{classify_response, extract_error_message, ServiceResponse};
pub use state::{AppState, LeadResult, RequestId, RequestStatus};
pub use update::update;
pub use view_model::{
    AppViewModel, LeadPanelView, StatusKind, COPIED_LABEL, COPY_LABEL, SUBMIT_BUSY_LABEL,
    SUBMIT_LABEL,
};
