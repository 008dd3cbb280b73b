use std::sync::{mpsc, Arc};
use std::time::Duration;

use coldleads_engine::{
    ChannelEventSink, ClientSettings, EngineError, EngineEvent, EngineHandle, LeadService,
    ServiceReply, TransportError,
};
use serde_json::json;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

struct PanickingService;

#[async_trait::async_trait]
impl LeadService for PanickingService {
    async fn generate(&self, _url: &str) -> Result<ServiceReply, TransportError> {
        panic!("service exploded");
    }
}

struct EchoService;

#[async_trait::async_trait]
impl LeadService for EchoService {
    async fn generate(&self, url: &str) -> Result<ServiceReply, TransportError> {
        Ok(ServiceReply {
            status: 200,
            body: url.as_bytes().to_vec(),
        })
    }
}

fn channel_sink() -> (Arc<ChannelEventSink>, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    (Arc::new(ChannelEventSink::new(tx)), rx)
}

#[tokio::test]
async fn engine_reports_reply_for_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "url": "https://acme.io" })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"cto":"Ada"}"#))
        .mount(&server)
        .await;

    let (sink, events) = channel_sink();
    let settings = ClientSettings::for_api_base(&server.uri()).unwrap();
    let engine = EngineHandle::new(settings, sink).unwrap();
    engine.generate(9, "https://acme.io").unwrap();

    let event = tokio::task::spawn_blocking(move || events.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("engine event");
    assert_eq!(
        event,
        EngineEvent::LeadResponded {
            request_id: 9,
            result: Ok(ServiceReply {
                status: 200,
                body: br#"{"cto":"Ada"}"#.to_vec(),
            }),
        }
    );
}

#[test]
fn panicking_service_is_reported_as_abandoned() {
    let (sink, events) = channel_sink();
    let engine = EngineHandle::with_service(Arc::new(PanickingService), sink).unwrap();
    engine.generate(3, "https://acme.io").unwrap();

    assert_eq!(
        events.recv_timeout(WAIT).unwrap(),
        EngineEvent::LeadAbandoned { request_id: 3 }
    );
}

#[test]
fn clones_share_the_same_engine() {
    let (sink, events) = channel_sink();
    let engine = EngineHandle::with_service(Arc::new(EchoService), sink).unwrap();
    let other = engine.clone();
    engine.generate(1, "a").unwrap();
    other.generate(2, "b").unwrap();

    let mut ids: Vec<_> = (0..2)
        .map(|_| match events.recv_timeout(WAIT).unwrap() {
            EngineEvent::LeadResponded { request_id, .. } => request_id,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn generate_after_shutdown_reports_stopped() {
    let (sink, events) = channel_sink();
    let engine = EngineHandle::with_service(Arc::new(EchoService), sink).unwrap();
    let other = engine.clone();
    engine.shutdown();

    assert!(matches!(other.generate(4, "a"), Err(EngineError::Stopped)));
    assert!(events.recv_timeout(Duration::from_millis(100)).is_err());
    // A second shutdown has nothing left to join.
    other.shutdown();
}
