//! PDF page text via lopdf

use crate::extract::{ExtractionOutcome, ExtractionState, PageSource, extract_flashcards};
use crate::types::{FlashcardCount, Result};
use lopdf::Document;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// A loaded PDF whose page text is extracted on demand, in page order
pub struct PdfPages {
    doc: Document,
    page_numbers: Vec<u32>,
}

impl PdfPages {
    pub fn from_document(doc: Document) -> Self {
        // get_pages is a BTreeMap, so keys are already in page order
        let page_numbers = doc.get_pages().keys().copied().collect();
        Self { doc, page_numbers }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)?;
        Ok(Self::from_document(doc))
    }
}

impl PageSource for PdfPages {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> String {
        let Some(&page_number) = self.page_numbers.get(index) else {
            return String::new();
        };
        match self.doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("No text extracted from page {page_number}: {e}");
                String::new()
            }
        }
    }
}

/// Load a PDF from disk
pub async fn load_pages(path: impl AsRef<Path>) -> Result<PdfPages> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let pages = tokio::task::spawn_blocking(move || PdfPages::from_bytes(&bytes)).await??;
    log::info!("Loaded {} ({} pages)", path.display(), pages.page_count());
    Ok(pages)
}

/// Load a PDF and run the extractor on a blocking thread
pub async fn extract_from_pdf<F>(
    path: impl AsRef<Path>,
    target_count: FlashcardCount,
    cancel: CancellationToken,
    on_progress: F,
) -> Result<ExtractionOutcome>
where
    F: FnMut(&ExtractionState) + Send + 'static,
{
    let pages = load_pages(path).await?;
    let outcome = tokio::task::spawn_blocking(move || {
        extract_flashcards(&pages, target_count, &cancel, on_progress)
    })
    .await?;
    Ok(outcome)
}
