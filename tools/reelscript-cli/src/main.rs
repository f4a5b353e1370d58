//! Reelscript CLI
//!
//! Segments scripts, extracts keywords, queries the stock catalogs and
//! builds full storyboards. All output is JSON on stdout; logs go to stderr.

use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reelscript_core::catalog::{ai_voices, find_voice, stock_visuals};
use reelscript_core::storyboard::{Pipeline, StepProgress};
use reelscript_core::{Project, StoryboardConfig};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "reelscript")]
#[command(about = "Turn a text script into a storyboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, env = "REELSCRIPT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Character count above which an unbroken script is split by sentence
    #[arg(long, global = true)]
    fallback_threshold: Option<usize>,

    /// Maximum keywords extracted per scene
    #[arg(long, global = true)]
    max_keywords: Option<usize>,

    /// Maximum candidate visuals per scene
    #[arg(long, global = true)]
    match_limit: Option<usize>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a script into scenes
    Segment {
        /// Read the script from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Extract keywords from each stdin line
    Keywords,
    /// List stock visuals matching the given keywords
    Match {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Search stock visuals by title or tag
    Search { term: String },
    /// List the AI voices
    Voices,
    /// Build a complete storyboard project
    Storyboard {
        /// Read the script from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Project name
        #[arg(short, long, default_value = "Untitled")]
        name: String,

        /// Narrate every scene with this AI voice id
        #[arg(long)]
        voice: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Serialize)]
struct KeywordsOutput {
    input: String,
    keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StoryboardOutput {
    project: Project,
    progress: StepProgress,
    complete: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// File values override defaults; flags override file values.
fn load_config(cli: &Cli) -> Result<StoryboardConfig> {
    let mut config = match cli.config {
        Some(ref path) => StoryboardConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StoryboardConfig::default(),
    };

    if let Some(threshold) = cli.fallback_threshold {
        config = config.with_fallback_threshold(threshold);
    }
    if let Some(max) = cli.max_keywords {
        config = config.with_max_keywords(max);
    }
    if let Some(limit) = cli.match_limit {
        config = config.with_match_limit(limit);
    }

    debug!(?config, "resolved configuration");
    Ok(config)
}

fn read_script(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display())),
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            Ok(script)
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn build_project(
    pipeline: &Pipeline,
    script: &str,
    name: &str,
    voice: Option<&str>,
) -> Result<StoryboardOutput> {
    let mut board = pipeline.build(script, stock_visuals());

    if let Some(id) = voice {
        let voice = find_voice(id).with_context(|| {
            let known: Vec<_> = ai_voices().iter().map(|v| v.id.as_str()).collect();
            format!("Unknown voice {id:?}; expected one of {}", known.join(", "))
        })?;
        board.assign_ai_voice_all(voice);
    }

    let progress = board.progress();
    let complete = board.is_complete();
    info!(scenes = board.len(), complete, "storyboard ready");

    Ok(StoryboardOutput {
        project: Project::new(name, board),
        progress,
        complete,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let pipeline = Pipeline::new(config).context("Failed to build pipeline")?;

    match cli.command {
        Commands::Segment { ref file } => {
            let script = read_script(file.as_deref())?;
            let scenes = pipeline.segmenter().segment(&script);
            println!("{}", to_json(&scenes, false)?);
        }
        Commands::Keywords => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let output = KeywordsOutput {
                    input: line.to_string(),
                    keywords: pipeline.extractor().extract(line),
                };
                println!("{}", to_json(&output, false)?);
            }
        }
        Commands::Match { ref keywords } => {
            let hits = pipeline.matcher().match_visuals(keywords, stock_visuals());
            println!("{}", to_json(&hits, false)?);
        }
        Commands::Search { ref term } => {
            let hits = pipeline.matcher().search(term, stock_visuals());
            println!("{}", to_json(&hits, false)?);
        }
        Commands::Voices => {
            println!("{}", to_json(&ai_voices(), false)?);
        }
        Commands::Storyboard {
            ref file,
            ref name,
            ref voice,
            pretty,
        } => {
            let script = read_script(file.as_deref())?;
            let output = build_project(&pipeline, &script, name, voice.as_deref())?;
            println!("{}", to_json(&output, pretty)?);
        }
    }

    Ok(())
}
