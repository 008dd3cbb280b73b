use crate::present::{company_pulse_display, role_label};
use crate::LeadResult;

pub const SUBMIT_LABEL: &str = "Generate Lead";
pub const SUBMIT_BUSY_LABEL: &str = "Generating…";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub status: StatusKind,
    pub pending_url: Option<String>,
    pub submit_enabled: bool,
    pub error_banner: Option<String>,
    pub lead: Option<LeadPanelView>,
}

impl AppViewModel {
    pub fn submit_label(&self) -> &'static str {
        if self.submit_enabled {
            SUBMIT_LABEL
        } else {
            SUBMIT_BUSY_LABEL
        }
    }
}

/// Results panel, present only after a successful request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadPanelView {
    pub role_label: String,
    pub company_pulse: String,
    pub email_draft: String,
    pub copy_label: &'static str,
    pub actions_enabled: bool,
}

impl LeadPanelView {
    pub(crate) fn from_lead(lead: &LeadResult, copied: bool) -> Self {
        Self {
            role_label: role_label(&lead.contact_name),
            company_pulse: company_pulse_display(&lead.company_pulse).to_string(),
            email_draft: lead.email_draft.clone(),
            copy_label: if copied { COPIED_LABEL } else { COPY_LABEL },
            actions_enabled: !lead.email_draft.is_empty(),
        }
    }
}
