use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jobaid::{
    analyze_course, build_structure,
    config::{Config, ConfigError, LogFormat},
    load_course_dir,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Extract job aid content from an unzipped course export.
#[derive(Debug, Parser)]
#[command(name = "jobaid", version)]
struct Cli {
    /// Root folder of the unzipped course
    course_dir: PathBuf,

    /// Cover title
    #[arg(long)]
    title: Option<String>,

    /// Cover author
    #[arg(long)]
    author: Option<String>,

    /// Number of files read concurrently
    #[arg(long)]
    concurrency: Option<usize>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the full course analysis instead of the document structure
    #[arg(long)]
    analysis: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = apply_cli(&cli, Config::from_env()?)?;

    init_tracing(config.log_format());

    let files = load_course_dir(&cli.course_dir, config.max_file_bytes())
        .with_context(|| format!("failed to load course folder {}", cli.course_dir.display()))?;

    let analysis = analyze_course(files, config.analyzer_options()).await;

    if analysis.main_index.is_none() {
        warn!("No root index.html found in {}", cli.course_dir.display());
    }
    for (lesson, media) in analysis.unresolved_media() {
        info!("Media '{}' in {} is not part of the course folder", media.src, lesson.path);
    }

    let json = if cli.analysis {
        serde_json::to_string_pretty(&analysis)?
    } else {
        let structure = build_structure(&analysis.lessons, &config.structure_options());
        info!(
            "Built job aid '{}' with {} sections",
            structure.title,
            structure.sections.len()
        );
        serde_json::to_string_pretty(&structure)?
    };

    match cli.output {
        Some(path) => tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}

/// Command-line flags take precedence over the environment.
fn apply_cli(cli: &Cli, mut config: Config) -> Result<Config, ConfigError> {
    if let Some(title) = &cli.title {
        config = config.with_title(title.as_str())?;
    }
    if let Some(author) = &cli.author {
        config = config.with_author(author.as_str())?;
    }
    if let Some(concurrency) = cli.concurrency {
        config = config.with_read_concurrency(concurrency);
    }
    Ok(config)
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
