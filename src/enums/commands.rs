use clap::Subcommand;
use crate::structs::filter_args::FilterArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a commented sample configuration file
    Init {
        #[clap(long)]
        force: bool,
    },
    /// Check the configuration file
    Validate,
    /// List the project's workflow statuses
    Statuses {
        #[clap(long)]
        token: Option<String>,
    },
    /// Print the query built from the persisted filters and flags, without
    /// contacting the tracker
    Query {
        #[clap(flatten)]
        filters: FilterArgs,
    },
    /// Fetch issues and print the label distribution
    Report {
        #[clap(flatten)]
        filters: FilterArgs,
        /// Focus one category prefix (e.g. `type`) and add its assignee breakdown
        #[clap(short, long)]
        category: Option<String>,
        #[clap(long)]
        json: bool,
        /// Use the built-in demo issues instead of the network
        #[clap(long)]
        demo: bool,
        /// Refresh every N seconds
        #[clap(short, long)]
        watch: Option<u64>,
        /// Persist the effective filters to the configuration file
        #[clap(long)]
        save: bool,
        #[clap(long)]
        token: Option<String>,
    },
    /// Run the credential-forwarding proxy
    Proxy {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        bind: Option<String>,
    },
}
