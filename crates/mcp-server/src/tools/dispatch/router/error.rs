use lens_discovery::{Action, ActionError, ActionErrorKind};
use lens_protocol::ErrorEnvelope;
use rmcp::model::{CallToolResult, Content};
use serde_json::json;

fn error_code(kind: ActionErrorKind) -> &'static str {
    match kind {
        ActionErrorKind::Validation => "invalid_request",
        ActionErrorKind::Execution => "execution_failed",
    }
}

fn error_hint(action: Action, kind: ActionErrorKind) -> Option<String> {
    match (action, kind) {
        (Action::GetPackageRules, ActionErrorKind::Validation) => {
            Some("pass `packages` as a list of package names, e.g. {\"packages\": [\"ash\"]}".to_string())
        }
        (_, ActionErrorKind::Execution) => {
            Some("the project state could not be read; fix the reported file and retry".to_string())
        }
        _ => None,
    }
}

pub(in crate::tools::dispatch) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut lines = vec![format!("error: {}", error.code), error.message.clone()];
    if let Some(hint) = error.hint.as_deref() {
        if !hint.trim().is_empty() {
            lines.push(format!("hint: {hint}"));
        }
    }

    let mut result = CallToolResult::error(vec![Content::text(lines.join("\n"))]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

pub(in crate::tools::dispatch) fn action_error_result(
    action: Action,
    err: &ActionError,
) -> CallToolResult {
    let kind = err.kind();
    tool_error_envelope(ErrorEnvelope {
        code: error_code(kind).to_string(),
        message: err.detail().to_string(),
        details: Some(json!({ "action": action.name() })),
        hint: error_hint(action, kind),
    })
}
