use crate::input::HookRequest;

/// Tool this hook reacts to; every other tool passes through unchanged.
pub const TOOL_NAME: &str = "AskUserQuestion";

/// Prefix of the annotation message shown to the user.
pub const MESSAGE_PREFIX: &str = "[OMCM AskUserQuestion] 사용자 질문: ";

/// Maximum number of question characters echoed back before truncation.
pub const QUESTION_PREVIEW_LIMIT: usize = 220;

const ELLIPSIS: &str = "...";

/// Annotation for the AskUserQuestion tool: echo the question being asked,
/// truncated to a readable preview. Returns `None` for any other tool or
/// when no question text is present.
pub fn annotate(request: &HookRequest) -> Option<String> {
    if request.tool_name.as_deref() != Some(TOOL_NAME) {
        return None;
    }

    let question = request.tool_input_str("question")?;
    if question.is_empty() {
        return None;
    }

    Some(format!("{}{}", MESSAGE_PREFIX, preview(question)))
}

/// First `QUESTION_PREVIEW_LIMIT` characters of the question, with an
/// ellipsis appended when the question was longer.
fn preview(question: &str) -> String {
    match question.char_indices().nth(QUESTION_PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}{}", &question[..cut], ELLIPSIS),
        None => question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> HookRequest {
        HookRequest::parse(json).unwrap()
    }

    #[test]
    fn test_other_tool_is_ignored() {
        let req = request(r#"{"tool_name":"OtherTool","tool_input":{"question":"hi"}}"#);
        assert!(annotate(&req).is_none());
    }

    #[test]
    fn test_missing_question_is_ignored() {
        let req = request(r#"{"tool_name":"AskUserQuestion","tool_input":{}}"#);
        assert!(annotate(&req).is_none());
    }

    #[test]
    fn test_empty_question_is_ignored() {
        let req = request(r#"{"tool_name":"AskUserQuestion","tool_input":{"question":""}}"#);
        assert!(annotate(&req).is_none());
    }

    #[test]
    fn test_short_question_verbatim() {
        let req = request(
            r#"{"tool_name":"AskUserQuestion","tool_input":{"question":"어떤 브랜치로 배포할까요?"}}"#,
        );
        let message = annotate(&req).unwrap();
        assert_eq!(
            message,
            "[OMCM AskUserQuestion] 사용자 질문: 어떤 브랜치로 배포할까요?"
        );
    }

    #[test]
    fn test_long_question_truncated() {
        let long = "q".repeat(500);
        let req = request(&format!(
            r#"{{"tool_name":"AskUserQuestion","tool_input":{{"question":"{}"}}}}"#,
            long
        ));
        let message = annotate(&req).unwrap();
        let expected = format!("{}{}...", MESSAGE_PREFIX, "q".repeat(QUESTION_PREVIEW_LIMIT));
        assert_eq!(message, expected);
        assert!(!message.contains(&long));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // Multibyte question text must be cut on a character boundary.
        let long = "질".repeat(QUESTION_PREVIEW_LIMIT + 10);
        let req = request(&format!(
            r#"{{"tool_name":"AskUserQuestion","tool_input":{{"question":"{}"}}}}"#,
            long
        ));
        let message = annotate(&req).unwrap();
        let preview = message.strip_prefix(MESSAGE_PREFIX).unwrap();
        assert_eq!(preview.chars().count(), QUESTION_PREVIEW_LIMIT + ELLIPSIS.len());
        assert!(preview.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_question_at_limit_is_verbatim() {
        let exact = "a".repeat(QUESTION_PREVIEW_LIMIT);
        let req = request(&format!(
            r#"{{"tool_name":"AskUserQuestion","tool_input":{{"question":"{}"}}}}"#,
            exact
        ));
        let message = annotate(&req).unwrap();
        assert_eq!(message, format!("{}{}", MESSAGE_PREFIX, exact));
    }
}
