#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RunningService, Service, ServiceExt},
    transport::TokioChildProcess,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub fn locate_lens_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_lens-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Try to resolve from the current test executable location.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("lens-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/lens-mcp", "target/release/lens-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate lens-mcp binary; build with: cargo build -p lens-mcp")
}

pub fn server_command(root: &Path) -> Result<Command> {
    let bin = locate_lens_mcp_bin()?;
    let mut cmd = Command::new(bin);
    cmd.env("LENS_ROOT", root);
    cmd.env_remove("LENS_PROJECT_ROOT");
    cmd.env_remove("LENS_MANIFEST");
    cmd.env_remove("LENS_DEPS_DIR");
    cmd.env_remove("LENS_APP");
    cmd.env("RUST_LOG", "warn");
    Ok(cmd)
}

pub async fn start_mcp_server(
    root: &Path,
) -> Result<RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>> {
    let transport = TokioChildProcess::new(server_command(root)?).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("start MCP server")
}

pub async fn call_tool(
    service: &RunningService<rmcp::RoleClient, impl Service<rmcp::RoleClient>>,
    name: &str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling tool")?
    .context("call tool")
}

pub fn result_text(result: &CallToolResult) -> Result<String> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .context("tool did not return text content")
}

/// Parse a successful tool result's text as JSON.
pub fn result_json(name: &str, result: &CallToolResult) -> Result<serde_json::Value> {
    assert_ne!(result.is_error, Some(true), "{name} returned error");
    let text = result_text(result)?;
    serde_json::from_str(&text).with_context(|| format!("{name} returned non-JSON text: {text}"))
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("mkdir {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

/// A small project: `ash` and `igniter` ship rules, `jason` does not,
/// two domains in scope `my_app`, one out of scope, generators from the project and a dep.
pub fn sample_project(root: &Path) -> Result<()> {
    write_file(
        &root.join("lens.toml"),
        r#"
app = "my_app"

[[domains]]
name = "MyApp.Accounts"
resources = ["MyApp.Accounts.User", "MyApp.Accounts.Token"]

[[domains]]
name = "MyApp.Blog"
resources = ["MyApp.Blog.Post"]

[[domains]]
name = "Admin.Audit"
app = "admin"
resources = ["Admin.Audit.Event"]

[[generators]]
command = "my_app.install"
docs = "Installs my_app into the host project."

[[generators]]
command = "my_app.gen.report"
docs = false

[[generators]]
command = "my_app.gen.scratch"
"#,
    )?;
    write_file(
        &root.join("deps/ash/usage-rules.md"),
        "# Ash usage rules\n\nPrefer Ash.Query over raw Ecto queries.\n",
    )?;
    write_file(
        &root.join("deps/igniter/usage-rules.md"),
        "# Igniter\n\nUse Igniter for code patching.\n",
    )?;
    write_file(
        &root.join("deps/igniter/lens.toml"),
        "[[generators]]\ncommand = \"igniter.install\"\ndocs = \"Installs a package with Igniter.\"\n",
    )?;
    std::fs::create_dir_all(root.join("deps/jason")).context("mkdir deps/jason")?;
    Ok(())
}
