use std::time::Duration;

use crate::{NormalizedUrl, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the URL to the lead service and report back with `Msg::LeadResponded`.
    RequestLead {
        request_id: RequestId,
        url: NormalizedUrl,
    },
    CopyToClipboard { text: String },
    /// Send `Msg::CopiedResetElapsed { generation }` once `after` has passed.
    ScheduleCopiedReset { generation: u64, after: Duration },
    /// Open `link` in a new browser window or tab.
    OpenComposeLink { link: String },
}
