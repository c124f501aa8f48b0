mod cli;
mod render;
mod translate;

use anyhow::{Context, Result};
use clap::Parser;
use curriculum_core::{build_curriculum, Corpus, CurriculumConfig};

use crate::cli::{Cli, Format};
use crate::translate::Translator;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tracing::info!("loading corpus from {}", cli.file.display());
    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read corpus file {}", cli.file.display()))?;
    tracing::info!("text size: {} bytes", text.len());

    let corpus = Corpus::from_text(&text)?;
    tracing::info!(
        "sentences: {}, words: {}, unique words: {}",
        corpus.sentences().len(),
        corpus.total_words(),
        corpus.distinct_words()
    );

    let config = CurriculumConfig {
        max_complexity: cli.max_complexity,
        max_steps: cli.count(),
        epsilon: cli.epsilon,
    };
    let steps = build_curriculum(&corpus, &config);
    tracing::info!("curriculum: {} steps", steps.len());

    match cli.format {
        Format::Report => print!("{}", render::report::render(&corpus, &steps)),
        Format::Html => print!("{}", render::html::render(&steps)),
        Format::Anki => {
            let translator = Translator::from_env(&cli.from, &cli.to)?;
            let cards = render::anki::render(&steps, &translator)
                .await
                .context("translation failed; curriculum was computed but not exported")?;
            print!("{cards}");
        }
    }

    Ok(())
}
