use super::super::LensService;
use super::error::action_error_result;
use lens_discovery::{Action, Record};
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde_json::{Map, Value};

/// Run one discovery action on the blocking pool and render its outcome.
pub(in crate::tools::dispatch) async fn run_action(
    service: &LensService,
    action: Action,
    arguments: Map<String, Value>,
) -> Result<CallToolResult, McpError> {
    let dispatcher = service.dispatcher().clone();
    let outcome =
        tokio::task::spawn_blocking(move || dispatcher.dispatch_action(action, Some(&arguments)))
            .await
            .map_err(|err| {
                McpError::internal_error(format!("{} task failed: {err}", action.name()), None)
            })?;

    match outcome {
        Ok(records) => records_result(action, &records),
        Err(err) => Ok(action_error_result(action, &err)),
    }
}

fn records_result(action: Action, records: &[Record]) -> Result<CallToolResult, McpError> {
    log::debug!("{} returned {} record(s)", action.name(), records.len());
    let text = serde_json::to_string_pretty(records).map_err(|err| {
        McpError::internal_error(
            format!("failed to encode {} result: {err}", action.name()),
            None,
        )
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
