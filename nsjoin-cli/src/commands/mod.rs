use crate::cli::Commands;
use anyhow::Result;

pub mod join;
pub mod show;

/// Dispatch command to appropriate handler
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Join(args) => join::execute(&args),
        Commands::Show(args) => show::execute(&args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

fn print_version() {
    println!("nsjoin {}", env!("CARGO_PKG_VERSION"));
    println!("Joins the network namespace of a running process via setns(2)");
}
