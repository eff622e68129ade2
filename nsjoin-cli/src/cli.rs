//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use nsjoin_core::ProcessId;

#[derive(Parser)]
#[command(name = "nsjoin")]
#[command(about = "Join the network namespace of a running process", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true, default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Join the network namespace of a process
    Join(JoinArgs),

    /// Show the network namespace of a process
    Show(ShowArgs),

    /// Print version information
    Version,
}

#[derive(Args)]
pub struct JoinArgs {
    /// Target process ID
    #[arg(short, long, allow_negative_numbers = true)]
    pub pid: ProcessId,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Process ID (default: current process)
    #[arg(short, long, allow_negative_numbers = true)]
    pub pid: Option<ProcessId>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
