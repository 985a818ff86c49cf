//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  chat-linkify -t \"see www.example.org\"   Linkify a single message
  echo \"mail a@b.io\" | chat-linkify        Linkify text read from stdin
  chat-linkify render messages.json        Render a JSON transcript as HTML
  chat-linkify config                      Show image formats in effect
  chat-linkify completions bash            Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Turn URLs, www hosts and email addresses in chat text into HTML links",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to linkify
    #[arg(
        short = 't',
        long,
        help = "Text to linkify (use '-' or omit to read from stdin)"
    )]
    pub text: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSON transcript of chat messages as HTML
    Render {
        /// Transcript file (JSON array); stdin when omitted or '-'
        input: Option<PathBuf>,
    },
    /// Show the image formats in effect
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
