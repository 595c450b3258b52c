use std::io;
use std::panic::{self, AssertUnwindSafe};

use tracing_subscriber::EnvFilter;

use omcm_hooks::capture;
use omcm_hooks::dispatch::{self, Collaborators};
use omcm_hooks::response::HookResponse;

const LOG_ENV: &str = "OMCM_LOG";

/// Diagnostics go to stderr, gated by `OMCM_LOG`. The hook stays silent
/// there by default so the host only ever sees the decision line on stdout.
fn init_logging() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    // Drain stdin before anything else. The host blocks on our stdout, so
    // the pipe must be consumed even when the payload turns out to be junk.
    let payload = capture::capture_stdin(capture::deadline_from_env());

    init_logging();

    let collaborators = Collaborators::load();
    let response = panic::catch_unwind(AssertUnwindSafe(|| {
        dispatch::dispatch(&payload, &collaborators)
    }))
    .unwrap_or_else(|_| HookResponse::quiet_allow());

    response.write_to(io::stdout().lock());
}
