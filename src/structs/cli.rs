use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "labelscope")]
#[clap(about = "Label distribution reports for issue tracker projects", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (defaults to ~/.labelscope/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
