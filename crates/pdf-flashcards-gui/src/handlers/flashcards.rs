use pdf_async_runtime::{CancellationToken, Flashcard, FlashcardCount, PdfUpdate, TaskId};
use pdf_flashcards::{ExtractionOutcome, Summarizer, SummarizerOptions};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_extract(
    task_id: TaskId,
    input_path: PathBuf,
    count: FlashcardCount,
    cancel: CancellationToken,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    log::info!("Extracting up to {count} flashcards from {}", input_path.display());

    let progress_tx = update_tx.clone();
    let result = pdf_flashcards::extract_from_pdf(&input_path, count, cancel, move |state| {
        let _ = progress_tx.send(PdfUpdate::ExtractionProgress {
            task_id,
            pages_processed: state.pages_processed,
            total_pages: state.total_pages,
        });
    })
    .await;

    match result {
        Ok(outcome) => {
            match &outcome {
                ExtractionOutcome::Completed(cards) => {
                    log::info!("Generated {} flashcards", cards.len())
                }
                ExtractionOutcome::NoContent => log::info!("No text found in document"),
                ExtractionOutcome::Cancelled { partial } => {
                    log::info!("Extraction cancelled, discarding {} cards", partial.len())
                }
            }
            let _ = update_tx.send(PdfUpdate::ExtractionFinished { task_id, outcome });
        }
        Err(e) => {
            log::error!("Extraction failed: {e}");
            let _ = update_tx.send(PdfUpdate::ExtractionFailed {
                task_id,
                message: format!("Failed to read PDF: {e}"),
            });
        }
    }
}

pub async fn handle_summarize(
    options: SummarizerOptions,
    cards: Vec<Flashcard>,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let result = match Summarizer::new(options) {
        Ok(summarizer) => summarizer.summarize_cards(&cards).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => {
            let _ = update_tx.send(PdfUpdate::SummaryReady { summary });
        }
        Err(e) => {
            log::error!("Summarization failed: {e}");
            let _ = update_tx.send(PdfUpdate::SummaryFailed {
                message: e.to_string(),
            });
        }
    }
}
