use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediaext")]
#[command(author, version, about = "Resolve media links and their playback fragments")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a vault file link or URL into a media descriptor
    Resolve {
        /// Vault-relative link (`notes/clip.mp4#t=10`) or URL
        #[arg(required = true)]
        reference: String,

        /// Vault directory for file links
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a media fragment such as `#t=10,20&loop`
    Fragment {
        /// Fragment text, leading `#` optional
        #[arg(required = true, allow_hyphen_values = true)]
        hash: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a link that reopens media at a position
    Timestamp {
        /// Vault-relative link or URL
        #[arg(required = true)]
        reference: String,

        /// Position in seconds
        #[arg(required = true)]
        seconds: f64,

        /// Vault directory for file links
        #[arg(long)]
        vault: Option<PathBuf>,
    },

    /// Change one boolean setting in the config file
    Set {
        /// Setting name, e.g. `timestamp_link`
        name: String,

        /// `true` or `false`
        #[arg(action = ArgAction::Set)]
        value: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
