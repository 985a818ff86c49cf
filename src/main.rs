//! # chat-linkify
//!
//! Turns plain chat text into HTML, wrapping URLs, bare `www.` hosts and email
//! addresses in anchors, and renders JSON chat transcripts.
//!
//! ## Modes
//! - Linkify text from `-t`/`--text` or stdin (default)
//! - `render`: transcript of messages with attachments
//! - `config`: show effective settings
//! - `completions`: shell completion scripts

mod cli;
mod core;
mod run;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        cli::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Print a user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::debug!("Image formats: {:?}", config.image_formats);

    let result = match &args.command {
        Some(Commands::Render { input }) => run::run_render(input.as_deref(), &config),
        Some(Commands::Config) => {
            run::show_config(&config);
            Ok(())
        }
        Some(Commands::Completions { .. }) => Ok(()),
        None => run::run_linkify(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
