use crate::input::HookRequest;
use crate::modes::ModeTable;
use crate::usage::UsageSnapshot;

/// Advisory annotations on prompt submission: trigger-keyword mode
/// detection plus a usage-threshold notice. Takes pre-loaded collaborators
/// so this path has no fallible step of its own.
pub fn advise(
    request: &HookRequest,
    modes: &ModeTable,
    usage: Option<&UsageSnapshot>,
) -> Option<String> {
    let prompt = request.prompt.as_deref().unwrap_or("");

    let mut notes: Vec<String> = Vec::new();

    if let Some(mode) = modes.match_mode(prompt) {
        notes.push(format!("[OMCM] 모드 감지: {}", mode));
    }

    if usage.is_some_and(UsageSnapshot::is_over_threshold) {
        notes.push("[OMCM] 사용량 임계치 초과".to_string());
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> HookRequest {
        HookRequest::parse(&format!(
            r#"{{"hook_event_name":"UserPromptSubmit","prompt":"{}"}}"#,
            prompt
        ))
        .unwrap()
    }

    #[test]
    fn test_plain_prompt_is_silent() {
        let req = request("hello there");
        assert!(advise(&req, &ModeTable::default(), None).is_none());
    }

    #[test]
    fn test_missing_prompt_is_silent() {
        let req = HookRequest::parse(r#"{"hook_event_name":"UserPromptSubmit"}"#).unwrap();
        assert!(advise(&req, &ModeTable::default(), None).is_none());
    }

    #[test]
    fn test_mode_keyword_triggers_note() {
        let req = request("please enter plan mode");
        let note = advise(&req, &ModeTable::default(), None).unwrap();
        assert_eq!(note, "[OMCM] 모드 감지: plan");
    }

    #[test]
    fn test_usage_over_threshold_triggers_note() {
        let req = request("hello there");
        let usage = UsageSnapshot {
            total_tokens: 1_000_000,
            threshold_tokens: None,
        };
        let note = advise(&req, &ModeTable::default(), Some(&usage)).unwrap();
        assert_eq!(note, "[OMCM] 사용량 임계치 초과");
    }

    #[test]
    fn test_usage_under_threshold_is_silent() {
        let req = request("hello there");
        let usage = UsageSnapshot {
            total_tokens: 10,
            threshold_tokens: None,
        };
        assert!(advise(&req, &ModeTable::default(), Some(&usage)).is_none());
    }

    #[test]
    fn test_notes_are_joined() {
        let req = request("please enter plan mode");
        let usage = UsageSnapshot {
            total_tokens: 1_000_000,
            threshold_tokens: None,
        };
        let note = advise(&req, &ModeTable::default(), Some(&usage)).unwrap();
        assert_eq!(note, "[OMCM] 모드 감지: plan | [OMCM] 사용량 임계치 초과");
    }
}
