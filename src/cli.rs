use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "focus_forest")]
#[command(about = "Grow a tree while you focus: drive a remote focus timer from the terminal")]
pub struct Cli {
    /// API base URL (defaults to $FOREST_API_URL, then the public deployment)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Follow the current session with a live elapsed timer
    Watch {
        /// Re-fetch the session status every N seconds (never by default)
        #[arg(long)]
        refresh: Option<u64>,
    },

    /// Show the current session
    Status,

    /// Start planting a tree
    Start,

    /// Stop the session and harvest the tree
    Stop,

    /// Show total focus time as a forest
    Total,

    /// Clear the forest
    Reset,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Watch { refresh: None })
    }
}
