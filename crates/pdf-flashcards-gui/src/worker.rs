use pdf_async_runtime::{PdfCommand, PdfUpdate};
use pdf_flashcards::SummarizerOptions;
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes commands and sends updates
pub async fn worker_task(
    command_rx: mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: mpsc::UnboundedSender<PdfUpdate>,
) {
    run_worker(command_rx, update_tx, SummarizerOptions::from_env).await;
}

async fn run_worker<F>(
    mut command_rx: mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: mpsc::UnboundedSender<PdfUpdate>,
    summarizer_options: F,
) where
    F: Fn() -> SummarizerOptions,
{
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx, &summarizer_options);
    }
    log::debug!("Command channel closed, worker exiting");
}

/// Every command runs as its own task so a slow document or a stalled
/// completion request never holds up the next command.
fn process_command<F>(cmd: PdfCommand, update_tx: &mpsc::UnboundedSender<PdfUpdate>, summarizer_options: &F)
where
    F: Fn() -> SummarizerOptions,
{
    let update_tx = update_tx.clone();
    match cmd {
        PdfCommand::ExtractFlashcards {
            task_id,
            input_path,
            count,
            cancel,
        } => {
            tokio::spawn(async move {
                handlers::flashcards::handle_extract(task_id, input_path, count, cancel, &update_tx)
                    .await;
            });
        }
        PdfCommand::Summarize { cards } => {
            // Read per request so a key exported after launch is picked up
            let options = summarizer_options();
            tokio::spawn(async move {
                handlers::flashcards::handle_summarize(options, cards, &update_tx).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_async_runtime::{CancellationToken, Flashcard, FlashcardCount, TaskId};
    use std::time::Duration;

    #[tokio::test]
    async fn extraction_runs_while_summary_is_pending() {
        // Connections land in the backlog and are never answered
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(command_rx, update_tx, move || SummarizerOptions {
            api_key: Some("sk-test".to_string()),
            base_url: base_url.clone(),
            ..Default::default()
        }));

        command_tx
            .send(PdfCommand::Summarize {
                cards: vec![Flashcard::from_line("x")],
            })
            .unwrap();
        command_tx
            .send(PdfCommand::ExtractFlashcards {
                task_id: TaskId(1),
                input_path: "does-not-exist.pdf".into(),
                count: FlashcardCount::default(),
                cancel: CancellationToken::new(),
            })
            .unwrap();

        let update = tokio::time::timeout(Duration::from_secs(10), update_rx.recv())
            .await
            .expect("extraction should not wait for the summary");
        assert!(matches!(
            update,
            Some(PdfUpdate::ExtractionFailed {
                task_id: TaskId(1),
                ..
            })
        ));
        drop(listener);
    }
}
