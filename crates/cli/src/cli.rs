use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "buildrules")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the build file of one project and list its targets
    #[command(visible_alias = "p")]
    Parse {
        /// Project path relative to the root (e.g., some/project)
        project_path: String,

        /// Root directory (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Print targets as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Find every build file under the root and list all targets
    #[command(visible_alias = "s")]
    Scan {
        /// Root directory (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Print targets as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Print the resolved dependencies of a target
    #[command(visible_alias = "d")]
    Deps {
        /// Target label (e.g., //some/project:lib)
        label: String,

        /// Root directory (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}
