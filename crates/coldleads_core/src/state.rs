use crate::present::DEFAULT_MAIL_SUBJECT;
use crate::view_model::{AppViewModel, LeadPanelView, StatusKind};
use crate::{LeadError, NormalizedUrl};

pub type RequestId = u64;

/// The successful lead payload, with wire-level fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadResult {
    pub contact_name: String,
    pub email_draft: String,
    pub company_pulse: String,
}

/// Lifecycle of the current submission. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        url: NormalizedUrl,
    },
    Success(LeadResult),
    Failed(LeadError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CopyAck {
    generation: u64,
    visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    status: RequestStatus,
    last_request_id: RequestId,
    copy_ack: CopyAck,
    mail_subject: String,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            status: RequestStatus::Idle,
            last_request_id: 0,
            copy_ack: CopyAck::default(),
            mail_subject: DEFAULT_MAIL_SUBJECT.to_string(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `subject` for compose links instead of the built-in one.
    pub fn with_mail_subject(mut self, subject: impl Into<String>) -> Self {
        self.mail_subject = subject.into();
        self
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mail_subject(&self) -> &str {
        &self.mail_subject
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading { .. })
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.is_loading();
        let kind = match &self.status {
            RequestStatus::Idle => StatusKind::Idle,
            RequestStatus::Loading { .. } => StatusKind::Loading,
            RequestStatus::Success(_) => StatusKind::Success,
            RequestStatus::Failed(_) => StatusKind::Failed,
        };
        let pending_url = match &self.status {
            RequestStatus::Loading { url, .. } => Some(url.to_string()),
            _ => None,
        };
        let error_banner = match &self.status {
            // A rejection whose detail came out empty shows no banner.
            RequestStatus::Failed(err) => Some(err.user_message()).filter(|msg| !msg.is_empty()),
            _ => None,
        };
        let lead = match &self.status {
            RequestStatus::Success(lead) => {
                Some(LeadPanelView::from_lead(lead, self.copy_ack.visible))
            }
            _ => None,
        };

        AppViewModel {
            input: self.input.clone(),
            status: kind,
            pending_url,
            submit_enabled: !loading,
            error_banner,
            lead,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    /// Move to `Loading`, dropping whatever result or error was shown.
    pub(crate) fn begin_request(&mut self, url: NormalizedUrl) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.status = RequestStatus::Loading { request_id, url };
        self.copy_ack.visible = false;
        self.mark_dirty();
        request_id
    }

    pub(crate) fn is_awaiting(&self, request_id: RequestId) -> bool {
        matches!(
            self.status,
            RequestStatus::Loading { request_id: pending, .. } if pending == request_id
        )
    }

    pub(crate) fn resolve(&mut self, outcome: Result<LeadResult, LeadError>) {
        self.status = match outcome {
            Ok(lead) => RequestStatus::Success(lead),
            Err(err) => RequestStatus::Failed(err),
        };
        self.copy_ack.visible = false;
        self.mark_dirty();
    }

    /// Draft text eligible for copy/compose: only after success, only when non-empty.
    pub(crate) fn actionable_draft(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Success(lead) if !lead.email_draft.is_empty() => {
                Some(lead.email_draft.as_str())
            }
            _ => None,
        }
    }

    /// Show the acknowledgment and return the generation its revert must carry.
    pub(crate) fn acknowledge_copy(&mut self) -> u64 {
        self.copy_ack.generation += 1;
        self.copy_ack.visible = true;
        self.mark_dirty();
        self.copy_ack.generation
    }

    /// Hide the acknowledgment unless a newer copy has superseded `generation`.
    pub(crate) fn expire_copy_ack(&mut self, generation: u64) -> bool {
        if self.copy_ack.visible && self.copy_ack.generation == generation {
            self.copy_ack.visible = false;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
