use coldleads_logging::{leads_debug, leads_info, leads_warn};

use crate::present::{compose_link, COPIED_ACK_DURATION};
use crate::{classify_response, normalize_company_url, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // The input box is read-only while a request is in flight.
            if !state.is_loading() {
                state.set_input(text);
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::LeadResponded {
            request_id,
            response,
        } => {
            if !state.is_awaiting(request_id) {
                leads_warn!("Dropping response for request {} (not pending)", request_id);
                return (state, Vec::new());
            }
            let outcome = classify_response(response);
            match &outcome {
                Ok(lead) => leads_info!(
                    "Request {} succeeded: contact={:?} draft_len={}",
                    request_id,
                    lead.contact_name,
                    lead.email_draft.len()
                ),
                Err(err) => leads_warn!("Request {} failed: {:?}", request_id, err),
            }
            state.resolve(outcome);
            Vec::new()
        }
        Msg::CopyClicked => match state.actionable_draft().map(str::to_owned) {
            Some(text) => {
                let generation = state.acknowledge_copy();
                vec![
                    Effect::CopyToClipboard { text },
                    Effect::ScheduleCopiedReset {
                        generation,
                        after: COPIED_ACK_DURATION,
                    },
                ]
            }
            None => Vec::new(),
        },
        Msg::CopiedResetElapsed { generation } => {
            if !state.expire_copy_ack(generation) {
                leads_debug!("Copied reset {} superseded", generation);
            }
            Vec::new()
        }
        Msg::ComposeClicked => match state.actionable_draft() {
            Some(draft) => vec![Effect::OpenComposeLink {
                link: compose_link(state.mail_subject(), draft),
            }],
            None => Vec::new(),
        },
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    // One request in flight at a time; the submit control is disabled meanwhile.
    if state.is_loading() {
        return Vec::new();
    }
    match normalize_company_url(state.input()) {
        Ok(url) => {
            let request_id = state.begin_request(url.clone());
            leads_info!("Request {} started for {}", request_id, url);
            vec![Effect::RequestLead { request_id, url }]
        }
        Err(err) => {
            state.resolve(Err(err));
            Vec::new()
        }
    }
}
