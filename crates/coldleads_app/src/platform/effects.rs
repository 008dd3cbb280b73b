use std::sync::{mpsc, Arc};
use std::thread;

use arboard::Clipboard;
use coldleads_core::{Effect, Msg, ServiceResponse};
use coldleads_engine::{ClientSettings, EngineError, EngineEvent, EngineHandle, EventSink};
use coldleads_logging::{clip_for_log, leads_error, leads_info, leads_warn};

use super::app::Inbound;

/// Forwards engine events into the UI loop as core messages.
struct MsgSink {
    tx: mpsc::Sender<Inbound>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(Inbound::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LeadResponded { request_id, result } => Msg::LeadResponded {
            request_id,
            response: match result {
                Ok(reply) => ServiceResponse::Replied {
                    status: reply.status,
                    body: reply.body,
                },
                Err(err) => {
                    leads_warn!("Request {} did not reach the service: {}", request_id, err);
                    ServiceResponse::Unreachable {
                        reason: err.to_string(),
                    }
                }
            },
        },
        EngineEvent::LeadAbandoned { request_id } => Msg::LeadResponded {
            request_id,
            response: ServiceResponse::Abandoned,
        },
    }
}

/// Executes effects emitted by `update`. Clipboard and browser are best-effort.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Inbound>,
    clipboard: Option<Clipboard>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Inbound>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { tx: msg_tx.clone() });
        let engine = EngineHandle::new(settings, sink)?;
        Ok(Self {
            engine,
            msg_tx,
            clipboard: None,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestLead { request_id, url } => {
                    leads_info!("RequestLead request_id={} url={}", request_id, url);
                    if let Err(err) = self.engine.generate(request_id, url.into_string()) {
                        leads_error!("Request {} not dispatched: {}", request_id, err);
                        let _ = self.msg_tx.send(Inbound::Msg(Msg::LeadResponded {
                            request_id,
                            response: ServiceResponse::Abandoned,
                        }));
                    }
                }
                Effect::CopyToClipboard { text } => self.copy_to_clipboard(text),
                Effect::ScheduleCopiedReset { generation, after } => {
                    let tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = tx.send(Inbound::Msg(Msg::CopiedResetElapsed { generation }));
                    });
                }
                Effect::OpenComposeLink { link } => {
                    leads_info!("Opening compose link ({} chars)", link.len());
                    if let Err(err) = webbrowser::open(&link) {
                        leads_warn!("Could not open browser: {}", err);
                    }
                }
            }
        }
    }

    /// Stop the engine; requests still in flight are dropped.
    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn copy_to_clipboard(&mut self, text: String) {
        // The clipboard is kept open: on X11 the contents live only as long as the owner.
        if self.clipboard.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(err) => {
                    leads_warn!("Clipboard unavailable: {}", err);
                    return;
                }
            }
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text.as_str()) {
                Ok(()) => leads_info!("Copied draft: {}", clip_for_log(&text, 40)),
                Err(err) => leads_warn!("Clipboard write failed: {}", err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coldleads_core::{update, AppState, StatusKind, INTERRUPTED_MESSAGE};
    use coldleads_engine::{FailureKind, ServiceReply, TransportError};
    use std::time::Duration;

    #[test]
    fn replies_map_to_service_responses() {
        let msg = map_event(EngineEvent::LeadResponded {
            request_id: 4,
            result: Ok(ServiceReply {
                status: 503,
                body: b"{}".to_vec(),
            }),
        });
        assert_eq!(
            msg,
            Msg::LeadResponded {
                request_id: 4,
                response: ServiceResponse::Replied {
                    status: 503,
                    body: b"{}".to_vec(),
                },
            }
        );
    }

    #[test]
    fn transport_errors_map_to_unreachable() {
        let msg = map_event(EngineEvent::LeadResponded {
            request_id: 5,
            result: Err(TransportError {
                kind: FailureKind::Network,
                message: "refused".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::LeadResponded {
                request_id: 5,
                response: ServiceResponse::Unreachable {
                    reason: "network error: refused".to_string(),
                },
            }
        );
    }

    #[test]
    fn abandoned_requests_still_resolve() {
        assert_eq!(
            map_event(EngineEvent::LeadAbandoned { request_id: 6 }),
            Msg::LeadResponded {
                request_id: 6,
                response: ServiceResponse::Abandoned,
            }
        );
    }

    #[test]
    fn undispatched_request_resolves_as_interrupted() {
        let (tx, rx) = mpsc::channel();
        let mut runner = EffectRunner::new(ClientSettings::default(), tx).unwrap();
        runner.shutdown();

        let (state, _) = update(AppState::new(), Msg::InputChanged("a.com".to_string()));
        let (state, effects) = update(state, Msg::SubmitClicked);
        assert!(matches!(effects.as_slice(), [Effect::RequestLead { .. }]));
        runner.run(effects);

        let Ok(Inbound::Msg(msg)) = rx.recv_timeout(Duration::from_secs(1)) else {
            panic!("expected a message from the effect runner");
        };
        let (state, _) = update(state, msg);
        let view = state.view();
        assert_eq!(view.status, StatusKind::Failed);
        assert_eq!(view.error_banner.as_deref(), Some(INTERRUPTED_MESSAGE));
    }
}
