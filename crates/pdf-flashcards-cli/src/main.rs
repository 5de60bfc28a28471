use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use pdf_flashcards::{
    CancellationToken, ExtractionOutcome, Flashcard, FlashcardCount, Summarizer,
    SummarizerOptions,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdfc", about = "PDF flashcards CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one flashcard per non-blank line of a PDF
    Extract {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of flashcards to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: FlashcardCount,
    },

    /// Extract flashcards and summarize them through the completions API
    Summarize {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of flashcards to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: FlashcardCount,

        /// Completion model (overrides OPENAI_MODEL)
        #[arg(long)]
        model: Option<String>,
    },
}

/// Run an extraction, cancelling it at the next page boundary on Ctrl-C
async fn extract(input: &Path, count: FlashcardCount) -> Result<Option<Vec<Flashcard>>> {
    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let outcome = pdf_flashcards::extract_from_pdf(input, count, cancel, |state| {
        log::debug!(
            "Processed page {}/{} ({} flashcards)",
            state.pages_processed,
            state.total_pages,
            state.produced_count
        );
    })
    .await;
    ctrl_c.abort();

    match outcome? {
        ExtractionOutcome::Completed(cards) => Ok(Some(cards)),
        ExtractionOutcome::NoContent => {
            eprintln!("No text found. Please check the document format.");
            Ok(None)
        }
        ExtractionOutcome::Cancelled { .. } => {
            eprintln!("Operation cancelled.");
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, count } => {
            let Some(cards) = extract(&input, count).await? else {
                return Ok(());
            };
            for (i, card) in cards.iter().enumerate() {
                println!("{}. {}", i + 1, card.question);
                println!("   {}", card.answer);
            }
            println!("Generated {} flashcards from {}", cards.len(), input.display());
        }

        Commands::Summarize {
            input,
            count,
            model,
        } => {
            let mut options = SummarizerOptions::from_env();
            if let Some(model) = model {
                options.model = model;
            }
            // Fail on a missing key before spending time on the document
            let summarizer = Summarizer::new(options)?;

            let Some(cards) = extract(&input, count).await? else {
                bail!("Nothing to summarize");
            };
            let summary = summarizer.summarize_cards(&cards).await?;
            println!("{summary}");
        }
    }

    Ok(())
}
