//! Join command implementation

use anyhow::{Context, Result};
use nsjoin_namespace::join_and_report;
use tracing::info;

use crate::cli::JoinArgs;

pub fn execute(args: &JoinArgs) -> Result<()> {
    info!(pid = %args.pid, "Joining network namespace");

    let report = join_and_report(args.pid)
        .with_context(|| format!("Failed to join network namespace of PID {}", args.pid))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
