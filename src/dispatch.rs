use tracing::debug;

use crate::hooks;
use crate::input::HookRequest;
use crate::modes::ModeTable;
use crate::response::HookResponse;
use crate::usage::UsageSnapshot;

/// Collaborators the dispatcher consults. Each capability is pre-loaded
/// with its documented default substituted on load failure, so dispatch
/// itself has no fallible step.
#[derive(Debug, Default)]
pub struct Collaborators {
    pub modes: ModeTable,
    pub usage: Option<UsageSnapshot>,
}

impl Collaborators {
    /// Load the real collaborators, falling back per capability: built-in
    /// mode table, no usage data.
    pub fn load() -> Self {
        Self {
            modes: ModeTable::load_or_default(),
            usage: UsageSnapshot::read_latest(),
        }
    }
}

/// Turn the captured payload into a decision.
///
/// Every branch resolves to a response; malformed or irrelevant input is a
/// no-op, not an error. The host's tool execution must never be blocked by
/// an internal failure here.
pub fn dispatch(raw: &str, collaborators: &Collaborators) -> HookResponse {
    if raw.trim().is_empty() {
        return HookResponse::quiet_allow();
    }

    let Some(request) = HookRequest::parse(raw) else {
        debug!("payload is not a recognizable hook request");
        return HookResponse::quiet_allow();
    };

    if let Some(message) = hooks::ask_user_question::annotate(&request) {
        return HookResponse::annotate(message);
    }

    match request.hook_event_name.as_deref() {
        Some("UserPromptSubmit") => {
            match hooks::prompt_submit::advise(
                &request,
                &collaborators.modes,
                collaborators.usage.as_ref(),
            ) {
                Some(message) => HookResponse::annotate(message),
                None => HookResponse::quiet_allow(),
            }
        }
        _ => HookResponse::quiet_allow(),
    }
}
