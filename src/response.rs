use serde::Serialize;
use std::io::Write;

/// Decision JSON written to stdout for the Claude Code hook system.
///
/// `allow` is always present; `message` and `suppressOutput` are omitted
/// when unset so the emitted line stays minimal.
#[derive(Debug, PartialEq, Serialize)]
pub struct HookResponse {
    pub allow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "suppressOutput")]
    pub suppress_output: Option<bool>,
}

impl HookResponse {
    /// Default-allow with output suppressed: the "nothing to say" response
    /// used for pass-through, empty input, and every failure path.
    pub fn quiet_allow() -> Self {
        Self {
            allow: true,
            message: None,
            suppress_output: Some(true),
        }
    }

    /// Allow with a user-visible annotation.
    pub fn annotate(message: impl Into<String>) -> Self {
        Self {
            allow: true,
            message: Some(message.into()),
            suppress_output: None,
        }
    }

    /// Emit exactly one newline-terminated JSON line. Serialization and
    /// write failures are swallowed; the hook exits cleanly even when
    /// stdout is gone.
    pub fn write_to<W: Write>(&self, mut out: W) {
        if let Ok(line) = serde_json::to_string(self) {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}
