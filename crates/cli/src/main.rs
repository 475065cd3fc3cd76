use anyhow::Result;
use clap::Parser;

use buildrules_cli::commands::{deps_command, parse_command, scan_command};
use buildrules_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse {
            project_path,
            root,
            json,
        } => parse_command(&project_path, root.as_deref(), json),
        Commands::Scan { root, json } => scan_command(root.as_deref(), json),
        Commands::Deps { label, root } => deps_command(&label, root.as_deref()),
    }
}
