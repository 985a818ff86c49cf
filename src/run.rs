//! Application run modes: logger init, linkify, transcript rendering, config display.

use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::Args;
use crate::core;
use crate::core::config::{Config, IMAGE_FORMATS_VAR};

/// Initialize env_logger on stderr so stdout only carries HTML.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));
    logger.target(env_logger::Target::Stderr);
    let _ = logger.try_init();
}

/// Read all of stdin.
fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Linkify the `-t` argument, or stdin when it is absent or `-`.
pub fn run_linkify(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    match args.text.as_deref() {
        Some(text) if text != "-" => {
            writeln!(stdout, "{}", core::linkify::linkify(text))?;
        }
        _ => {
            let text = read_stdin()?;
            log::debug!("Read {} bytes from stdin", text.len());
            stdout.write_all(core::linkify::linkify(&text).as_bytes())?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Render a JSON transcript from a file (or stdin) to HTML on stdout.
pub fn run_render(input: Option<&Path>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let json = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to read {}: {}", path.display(), e))
        })?,
        _ => read_stdin()?,
    };
    let messages = core::message::parse_transcript(&json)
        .map_err(|e| format!("Invalid transcript: {}", e))?;
    let html = core::message::render_transcript(&messages, &config.image_formats);
    let mut stdout = io::stdout();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print the effective configuration.
pub fn show_config(config: &Config) {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let source = if std::env::var_os(IMAGE_FORMATS_VAR).is_some() {
        IMAGE_FORMATS_VAR
    } else {
        "default"
    };
    println!(
        "Image formats: {} ({})",
        config.image_formats.join(", "),
        source
    );
}
