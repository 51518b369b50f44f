use lens_discovery::Action;
use serde_json::json;

pub(crate) fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = Action::ALL
        .iter()
        .map(|action| json!({ "name": action.name(), "summary": action.description() }))
        .collect();

    json!({
        "binary": "lens-mcp",
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Lens answers questions about the project you are working in.".to_string(),
        "Call get_package_rules with the project's dependencies before using them; use list_ash_resources and list_generators to see what already exists and what can be generated."
            .to_string(),
        "Tools:".to_string(),
    ];
    for action in Action::ALL {
        lines.push(format!("- {}: {}", action.name(), action.description()));
    }
    lines.join("\n")
}
