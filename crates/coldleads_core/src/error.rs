use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a company URL.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate lead.";
pub const INTERRUPTED_MESSAGE: &str = "Something went wrong.";

/// Why a submission ended in `Failed`.
///
/// The `Display` output is the message shown in the error banner; the
/// variant only records how that message was derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    /// Input was empty after trimming. Never reaches the network.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
    /// The HTTP call produced no response at all.
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    TransportFailure { reason: String },
    /// The service answered with a status outside 2xx.
    #[error("{message}")]
    RemoteRejected { status: u16, message: String },
    /// The engine stopped before answering.
    #[error("{}", INTERRUPTED_MESSAGE)]
    Interrupted,
}

impl LeadError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
