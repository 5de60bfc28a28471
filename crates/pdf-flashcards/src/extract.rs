//! Line-by-line flashcard extraction over a sequence of pages

use crate::types::{Flashcard, FlashcardCount};
use tokio_util::sync::CancellationToken;

/// Ordered, lazily read page texts
///
/// Pages that yield no text return an empty string.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> String;
}

impl<S: AsRef<str>> PageSource for [S] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> String {
        self.get(index)
            .map(|page| page.as_ref().to_string())
            .unwrap_or_default()
    }
}

impl<S: AsRef<str>> PageSource for Vec<S> {
    fn page_count(&self) -> usize {
        self.as_slice().page_count()
    }

    fn page_text(&self, index: usize) -> String {
        self.as_slice().page_text(index)
    }
}

/// Bookkeeping for one extraction run, reported after every page
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionState {
    pub target_count: FlashcardCount,
    pub produced_count: usize,
    pub pages_processed: usize,
    pub total_pages: usize,
}

impl ExtractionState {
    pub fn new(target_count: FlashcardCount, total_pages: usize) -> Self {
        Self {
            target_count,
            produced_count: 0,
            pages_processed: 0,
            total_pages,
        }
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.total_pages == 0 {
            return 0.0;
        }
        (self.pages_processed as f32 / self.total_pages as f32).clamp(0.0, 1.0)
    }

    fn is_full(&self) -> bool {
        self.produced_count >= self.target_count.get()
    }
}

/// Terminal result of one extraction run
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Completed(Vec<Flashcard>),
    /// Every page was read and none had a non-blank line
    NoContent,
    /// Stopped at a page boundary; `partial` holds whatever came before
    Cancelled { partial: Vec<Flashcard> },
}

impl ExtractionOutcome {
    pub fn cards(&self) -> &[Flashcard] {
        match self {
            ExtractionOutcome::Completed(cards) => cards,
            ExtractionOutcome::NoContent => &[],
            ExtractionOutcome::Cancelled { partial } => partial,
        }
    }
}

/// Derive up to `target_count` flashcards from the non-blank lines of `pages`.
///
/// The cancellation token is checked once before each page is read. After
/// every processed page `on_progress` receives the updated state, so
/// `pages_processed / total_pages` only ever grows.
pub fn extract_flashcards<P, F>(
    pages: &P,
    target_count: FlashcardCount,
    cancel: &CancellationToken,
    mut on_progress: F,
) -> ExtractionOutcome
where
    P: PageSource + ?Sized,
    F: FnMut(&ExtractionState),
{
    let total_pages = pages.page_count();
    let mut state = ExtractionState::new(target_count, total_pages);
    let mut cards = Vec::with_capacity(target_count.get().min(256));

    log::debug!("Extracting up to {target_count} flashcards from {total_pages} pages");

    for index in 0..total_pages {
        if state.is_full() {
            break;
        }
        if cancel.is_cancelled() {
            log::info!(
                "Extraction cancelled after {} of {} pages",
                state.pages_processed,
                total_pages
            );
            return ExtractionOutcome::Cancelled { partial: cards };
        }

        let text = pages.page_text(index);
        for line in split_lines(&text) {
            if state.is_full() {
                break;
            }
            let line = line.trim();
            if !line.is_empty() {
                cards.push(Flashcard::from_line(line));
                state.produced_count += 1;
            }
        }

        state.pages_processed = index + 1;
        on_progress(&state);
    }

    log::debug!(
        "Extraction produced {} flashcards from {} pages",
        state.produced_count,
        state.pages_processed
    );

    if cards.is_empty() {
        ExtractionOutcome::NoContent
    } else {
        ExtractionOutcome::Completed(cards)
    }
}

/// Split on every line boundary PDF text layers are known to emit,
/// including bare carriage returns and form feeds.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}
