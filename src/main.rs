use anyhow::{Context, Result};
use clap::Parser;
use radio_pls::config::{expand_path, DEFAULT_CONFIG};
use radio_pls::{OutputMode, PlaylistPipeline, SelectionConfig};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "radio-pls")]
#[command(about = "Create a playlist (pls) with a selection of streams", long_about = None)]
struct Args {
    /// Read streams from a YAML/JSON file or a directory of them
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Descend into subdirectories when the config is a directory
    #[arg(short = 'r', long)]
    recursive: bool,

    /// List channels and exit (wins over --list-tags)
    #[arg(short = 'l', long)]
    list: bool,

    /// List available tags and exit
    #[arg(short = 't', long)]
    list_tags: bool,

    /// Leave out the built-in BBC stations
    #[arg(long)]
    no_builtin: bool,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only include streams with one of the given tags
    tags: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mode = output_mode(&args);

    // An explicit config must exist, the default one may be absent
    let mut config = match &args.config {
        Some(path) => SelectionConfig::new(Some(expand_path(path))),
        None => SelectionConfig::new(Some(expand_path(DEFAULT_CONFIG))).optional_config(),
    };
    config = config
        .recursive(args.recursive)
        .with_tags(args.tags)
        .with_mode(mode)
        .with_builtin(!args.no_builtin);

    let pipeline = PlaylistPipeline::new(config);
    let text = pipeline.run().context("Failed to build playlist")?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", text))
                .with_context(|| format!("Failed to write playlist: {:?}", path))?;
            log::info!("Playlist written to {:?}", path);
        }
        None => write_stdout(&text)?,
    }

    Ok(())
}

/// Pick the output mode; `--list` takes precedence over `--list-tags`
fn output_mode(args: &Args) -> OutputMode {
    if args.list {
        OutputMode::List
    } else if args.list_tags {
        OutputMode::ListTags
    } else {
        OutputMode::Playlist
    }
}

/// Print to stdout, exiting quietly if the reader has gone away
fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{}", text).and_then(|_| stdout.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write to stdout"),
    }
}
