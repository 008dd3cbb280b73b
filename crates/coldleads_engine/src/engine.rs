use std::panic::AssertUnwindSafe;
use std::sync::{mpsc, Arc, Mutex};
use std::thread::{self, JoinHandle};

use coldleads_logging::{leads_debug, leads_error};
use futures_util::FutureExt;

use crate::client::{ClientSettings, LeadService, ReqwestLeadService};
use crate::{EngineError, EngineEvent, RequestId};

/// Receives engine events on whatever thread the request finished on.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Generate { request_id: RequestId, url: String },
    Shutdown,
}

/// Handle to the background thread that owns the tokio runtime.
///
/// Dropping the last handle, or calling `shutdown`, stops the thread and
/// cancels whatever is still in flight.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        Self::with_service(Arc::new(ReqwestLeadService::new(settings)), sink)
    }

    pub fn with_service(
        service: Arc<dyn LeadService>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let worker = thread::Builder::new()
            .name("coldleads-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    if matches!(command, EngineCommand::Shutdown) {
                        break;
                    }
                    let service = service.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(service.as_ref(), command, sink.as_ref()).await;
                    });
                }
                leads_debug!("Engine command loop finished");
            })?;

        Ok(Self {
            cmd_tx,
            worker: Arc::new(Mutex::new(Some(worker))),
        })
    }

    pub fn generate(&self, request_id: RequestId, url: impl Into<String>) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Generate {
                request_id,
                url: url.into(),
            })
            .map_err(|_| EngineError::Stopped)
    }

    /// Stop the engine thread and wait for it. Later `generate` calls fail with `Stopped`.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        let worker = match self.worker.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(worker) = worker {
            if worker.join().is_err() {
                leads_error!("Engine thread panicked");
            }
        }
    }
}

async fn handle_command(service: &dyn LeadService, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Generate { request_id, url } => {
            let outcome = AssertUnwindSafe(service.generate(&url))
                .catch_unwind()
                .await;
            let event = match outcome {
                Ok(result) => EngineEvent::LeadResponded { request_id, result },
                Err(_) => {
                    leads_error!("Request {} panicked inside the lead service", request_id);
                    EngineEvent::LeadAbandoned { request_id }
                }
            };
            sink.emit(event);
        }
        EngineCommand::Shutdown => {}
    }
}
