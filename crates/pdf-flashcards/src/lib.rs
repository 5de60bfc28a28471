mod deck;
mod extract;
mod options;
mod pdf;
mod summarize;
mod types;

pub use deck::{CardView, Navigator, summary_text};
pub use extract::{ExtractionOutcome, ExtractionState, PageSource, extract_flashcards};
pub use options::*;
pub use pdf::{PdfPages, extract_from_pdf, load_pages};
pub use summarize::{Summarizer, build_prompt};
pub use types::*;

pub use tokio_util::sync::CancellationToken;
