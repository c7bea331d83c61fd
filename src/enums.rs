use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Completion hook: classify, relocate and queue a finished torrent.
    Hook {
        torid: String,
    },
    /// Show normalized torrent records.
    List {
        /// Include files and trackers.
        #[arg(long)]
        full: bool,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
        torid: Option<String>,
    },
    /// Relocate a torrent's payload to an existing directory.
    Move {
        torid: String,
        dest: String,
    },
    /// Print the parsed policy file.
    Rules,
    /// Print queued and in-flight job counts per class.
    Queues,
    /// Serve one job class until the parent process exits.
    Worker {
        #[arg(long)]
        queue: Option<String>,
    },
    /// Start a worker per configured class and wait for them.
    Supervise,
    /// Deliver queued presence notifications.
    Relay,
}
