use std::path::PathBuf;
use thiserror::Error;

// Re-export types from library crates
pub use pdf_flashcards::{CancellationToken, ExtractionOutcome, Flashcard, FlashcardCount};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PdfCommand {
    ExtractFlashcards {
        task_id: TaskId,
        input_path: PathBuf,
        count: FlashcardCount,
        cancel: CancellationToken,
    },
    Summarize {
        cards: Vec<Flashcard>,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PdfUpdate {
    ExtractionProgress {
        task_id: TaskId,
        pages_processed: usize,
        total_pages: usize,
    },
    ExtractionFinished {
        task_id: TaskId,
        outcome: ExtractionOutcome,
    },
    ExtractionFailed {
        task_id: TaskId,
        message: String,
    },
    SummaryReady {
        summary: String,
    },
    SummaryFailed {
        message: String,
    },
}

/// Handle to one extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Error, Debug, PartialEq)]
pub enum TaskError {
    #[error("An extraction is already running.")]
    AlreadyRunning,
}

/// Foreground view of the extraction currently in flight
#[derive(Debug, Clone)]
pub struct ExtractionTask {
    pub id: TaskId,
    pub label: String,
    cancel: CancellationToken,
    pages_processed: usize,
    total_pages: usize,
}

impl ExtractionTask {
    pub fn progress_fraction(&self) -> f32 {
        if self.total_pages == 0 {
            return 0.0;
        }
        (self.pages_processed as f32 / self.total_pages as f32).clamp(0.0, 1.0)
    }

    pub fn pages(&self) -> (usize, usize) {
        (self.pages_processed, self.total_pages)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Holds at most one extraction at a time.
///
/// Starting a second one while the first is in flight is rejected, and
/// updates carrying a stale [`TaskId`] are ignored.
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Option<ExtractionTask>,
    next_id: u64,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the slot and hand back the id and token the worker will use
    pub fn start(&mut self, label: impl Into<String>) -> Result<(TaskId, CancellationToken), TaskError> {
        if self.current.is_some() {
            return Err(TaskError::AlreadyRunning);
        }
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let cancel = CancellationToken::new();
        self.current = Some(ExtractionTask {
            id,
            label: label.into(),
            cancel: cancel.clone(),
            pages_processed: 0,
            total_pages: 0,
        });
        Ok((id, cancel))
    }

    /// Signal the running task; returns false when nothing is running
    pub fn cancel(&self) -> bool {
        match &self.current {
            Some(task) => {
                task.cancel.cancel();
                true
            }
            None => false,
        }
    }

    pub fn record_progress(&mut self, id: TaskId, pages_processed: usize, total_pages: usize) -> bool {
        match &mut self.current {
            Some(task) if task.id == id => {
                // Progress only moves forward from the foreground's point of view
                task.pages_processed = task.pages_processed.max(pages_processed);
                task.total_pages = total_pages;
                true
            }
            _ => false,
        }
    }

    /// Release the slot if `id` is the running task
    pub fn finish(&mut self, id: TaskId) -> Option<ExtractionTask> {
        if self.current.as_ref().is_some_and(|task| task.id == id) {
            self.current.take()
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<&ExtractionTask> {
        self.current.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }
}
