//! Show command implementation

use anyhow::{Context, Result};
use nsjoin_core::ProcessId;
use nsjoin_namespace::{NetNamespaceId, netns_path};
use serde_json::json;

use crate::cli::ShowArgs;

pub fn execute(args: &ShowArgs) -> Result<()> {
    let pid = args.pid.unwrap_or_else(ProcessId::current);

    let target = NetNamespaceId::of_process(pid)
        .with_context(|| format!("Failed to read network namespace of PID {pid}"))?;
    let current =
        NetNamespaceId::current().context("Failed to read own network namespace")?;
    let shared = target == current;

    if args.json {
        let out = json!({
            "pid": pid,
            "path": netns_path(pid),
            "namespace": target,
            "shared": shared,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Network namespace of PID {pid}");
    println!("{:-<60}", "");
    println!("  Path:      {}", netns_path(pid).display());
    println!("  Namespace: {target}");
    if shared {
        println!("  Shared with this process");
    } else {
        println!("  Different from this process ({current})");
    }

    Ok(())
}
