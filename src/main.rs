use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use sentiment_nlp::render::{self, render_json, render_text};
use sentiment_nlp::SentimentAnalysisPipelineBuilder;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Score the sentiment of a text and of each of its tokens.
#[derive(Parser)]
#[command(name = "sentiment-nlp", version, about)]
struct Cli {
    /// Text to analyze. Read from stdin when neither TEXT nor --file is given.
    text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON lexicon replacing the bundled document lexicon.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Print a short description of the report and exit.
    #[arg(long)]
    about: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(&cli, std::io::stdin().lock())?;
    println!("{output}");
    Ok(())
}

/// Produce the report for one invocation. `stdin` is only read when neither
/// TEXT nor `--file` is given.
fn run(cli: &Cli, stdin: impl Read) -> anyhow::Result<String> {
    if cli.about {
        return Ok(render::ABOUT.to_string());
    }

    let text = read_input(cli, stdin)?;

    let mut builder = SentimentAnalysisPipelineBuilder::lexicon();
    if let Some(path) = &cli.lexicon {
        builder = builder.lexicon_file(path);
    }
    let pipeline = builder.build()?;

    let analysis = pipeline.analyze(&text)?;
    match cli.format {
        Format::Text => Ok(render_text(&analysis)?),
        Format::Json => Ok(render_json(&analysis)?),
    }
}

fn read_input(cli: &Cli, mut stdin: impl Read) -> anyhow::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text).context("reading stdin")?;
    Ok(text)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
