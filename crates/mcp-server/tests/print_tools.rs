use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::process::Command;

mod support;

#[tokio::test]
async fn print_tools_matches_list_tools() -> Result<()> {
    let bin = support::locate_lens_mcp_bin()?;

    let output = Command::new(&bin)
        .arg("--print-tools")
        .output()
        .await
        .context("run lens-mcp --print-tools")?;
    assert!(
        output.status.success(),
        "print-tools failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).context("decode print-tools stdout")?;
    let payload: Value = serde_json::from_str(&stdout).context("parse print-tools JSON")?;
    assert_eq!(
        payload
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default(),
        env!("CARGO_PKG_VERSION"),
        "print-tools version mismatch"
    );

    let printed: HashMap<String, String> = payload
        .get("tools")
        .and_then(Value::as_array)
        .context("print-tools missing tools array")?
        .iter()
        .filter_map(|tool| {
            Some((
                tool.get("name")?.as_str()?.to_string(),
                tool.get("summary")?.as_str()?.to_string(),
            ))
        })
        .collect();
    assert_eq!(printed.len(), 3, "print-tools returned {printed:?}");

    let tmp = tempfile::tempdir().context("tempdir")?;
    let service = support::start_mcp_server(tmp.path()).await?;
    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let listed: HashMap<String, String> = tools
        .tools
        .iter()
        .map(|t| {
            (
                t.name.as_ref().to_string(),
                t.description.as_deref().unwrap_or_default().to_string(),
            )
        })
        .collect();

    assert_eq!(printed, listed, "print-tools mismatch with list_tools");

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
