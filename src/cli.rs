use clap::{Parser, Subcommand};
use ffprof::Browser;
use std::path::PathBuf;

/// CLI arguments for ffprof
#[derive(Parser, Debug)]
#[command(name = "ffprof", version)]
#[command(about = "Find Firefox profiles and read/write their mozLz4 files")]
pub struct Cli {
    /// Profile name from profiles.ini (default: the active profile)
    #[arg(short = 'P', long, global = true)]
    pub profile: Option<String>,

    /// Browser whose profiles.ini is used
    #[arg(short, long, value_enum, default_value_t = Browser::Firefox, global = true)]
    pub browser: Browser,

    /// Directory containing profiles.ini (overrides the browser's default)
    #[arg(long, global = true)]
    pub profiles_dir: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a profile file to stdout, decompressing mozLz4 content
    Extract {
        /// File path relative to the profile directory
        file: PathBuf,
    },

    /// Read stdin and write it to a profile file as mozLz4
    Compress {
        /// File path relative to the profile directory
        file: PathBuf,
    },

    /// Print the profile directory, or a file inside it
    #[command(name = "get_path", alias = "get-path")]
    GetPath {
        /// File path relative to the profile directory
        file: Option<PathBuf>,
    },

    /// Delete the profile directory and its profiles.ini entries
    #[command(name = "remove_profile", alias = "remove-profile")]
    RemoveProfile,

    /// List the profiles declared in profiles.ini as JSON
    List,
}
