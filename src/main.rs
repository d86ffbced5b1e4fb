use anyhow::Context;
use clap::Parser;
use longbox::{normalize_value, Schema};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "longbox", about = "Validate and normalize comic-issue records")]
struct Cli {
    /// JSON file holding one raw issue object; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Schema TOML file overriding the built-in comic-issue schema.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Pretty-print the normalized record.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let schema = match &cli.schema {
        Some(path) => Schema::load(path)
            .with_context(|| format!("loading schema from {}", path.display()))?,
        None => Schema::defaults(),
    };

    let raw: serde_json::Value = match &cli.input {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(std::io::BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => serde_json::from_reader(std::io::stdin().lock()).context("parsing stdin")?,
    };

    let record = normalize_value(&schema, &raw)?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{rendered}");

    Ok(())
}
