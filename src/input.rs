use serde::Deserialize;
use serde_json::Value;

/// Input JSON from the Claude Code hook system.
///
/// Only the fields the dispatcher branches on are modeled. The host emits
/// either snake_case or camelCase for them, so each carries an alias; all
/// are optional because their presence depends on the event.
#[derive(Debug, Default, Deserialize)]
pub struct HookRequest {
    #[serde(default, alias = "hookEventName")]
    pub hook_event_name: Option<String>,
    /// Tool name (only present for tool events)
    #[serde(default, alias = "toolName")]
    pub tool_name: Option<String>,
    /// Tool input parameters; shape depends on the tool
    #[serde(default, alias = "toolInput")]
    pub tool_input: Option<Value>,
    /// Only present for UserPromptSubmit
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default, alias = "sessionId")]
    pub session_id: Option<String>,
}

impl HookRequest {
    /// Parse a captured payload. Anything that is not a JSON object yields
    /// `None`; the dispatcher treats that as "nothing to do".
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Nested string field from the tool input parameters.
    pub fn tool_input_str(&self, field: &str) -> Option<&str> {
        self.tool_input.as_ref()?.get(field)?.as_str()
    }
}
