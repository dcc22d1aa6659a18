use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "Score student profiles against career roles and show learning roadmaps.")]
pub(crate) struct Cli {
    /// Role catalog JSON (overrides CATALOG_PATH; default: built-in roles).
    #[arg(long, global = true)]
    pub(crate) catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Rank catalog roles for one student profile.
    Recommend {
        /// Path to the profile JSON.
        #[arg(long)]
        profile: PathBuf,

        /// Number of roles to list (default: TOP_ROLES or 5).
        #[arg(long)]
        top: Option<usize>,
    },
    /// Full score breakdown for one role.
    Score {
        #[arg(long)]
        profile: PathBuf,

        /// Exact role name, e.g. "Data Scientist".
        #[arg(long)]
        role: String,
    },
    /// Print a role's roadmap with resource links.
    Roadmap {
        #[arg(long)]
        role: String,
    },
    /// Top roles for each student in a JSON array of profiles.
    Dashboard {
        #[arg(long)]
        profiles: PathBuf,
    },
    /// Roadmap completion for a role given completed topic ids.
    Progress {
        #[arg(long)]
        role: String,

        /// Completed topic ids, comma separated.
        #[arg(long, value_delimiter = ',')]
        completed: Vec<u32>,
    },
    /// Learning resource URL for a topic.
    Resource {
        topic: String,
    },
    /// List selectable specializations.
    Specializations,
}
