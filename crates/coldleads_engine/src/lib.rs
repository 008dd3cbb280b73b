//! ColdLeads engine: HTTP calls to the lead service and effect execution.
mod client;
mod engine;
mod types;

pub use client::{
    endpoint_for, ClientSettings, LeadService, ReqwestLeadService, DEFAULT_API_BASE,
    GENERATE_LEAD_PATH,
};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use types::{EngineError, EngineEvent, FailureKind, RequestId, ServiceReply, TransportError};
