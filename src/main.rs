use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

use previous_edit::config::Config;
use previous_edit::host::{parse_script, SeekLog, Session};

/// Previous Edit - replay editor events through the navigation history
#[derive(Parser)]
#[command(name = "previous-edit")]
#[command(version)]
#[command(about = "Replay editor events through the backward/forward location history", long_about = None)]
struct Cli {
    /// Event script to replay (omit or pass '-' to read from stdin)
    script: Option<PathBuf>,

    /// Config file (default: ~/.config/previous-edit/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the maximum backward history depth
    #[arg(long)]
    max_backward: Option<usize>,

    /// Always push history, even for cursor moves on the line just left
    #[arg(long)]
    no_coalesce: bool,

    /// Print the final history as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("previous_edit=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    // CLI flags override the config file
    if let Some(max_backward) = cli.max_backward {
        config.max_backward = max_backward;
    }
    if cli.no_coalesce {
        config.coalesce_same_line = false;
    }

    let source = read_script(cli.script.as_deref())?;
    let events = parse_script(&source).context("Failed to parse event script")?;

    let mut session = Session::new(&config, SeekLog::default());
    session.replay(events);

    let snapshot = session.history().snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for line in snapshot.picker_lines() {
            println!("{}", line);
        }
        let seeks = &session.navigator().seeks;
        if !seeks.is_empty() {
            println!();
            println!("seeks:");
            for seek in seeks {
                println!("  {}", seek);
            }
        }
    }

    Ok(())
}

fn read_script(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}
