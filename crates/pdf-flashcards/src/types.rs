use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("Invalid flashcard count: {0}")]
    InvalidCount(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Invalid summarizer configuration: {0}")]
    Config(String),
    #[error("Missing API key (set OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("Please upload a document first.")]
    EmptyDeck,
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    /// Wrap one stripped source line in the fixed question/answer template.
    pub fn from_line(line: &str) -> Self {
        Self {
            question: format!("What is: '{line}'?"),
            answer: format!("This is the answer: {line}"),
        }
    }
}

/// Validated number of flashcards to produce in one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashcardCount(NonZeroUsize);

impl FlashcardCount {
    pub const DEFAULT: usize = 10;

    pub fn new(count: usize) -> Result<Self> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or_else(|| FlashcardError::InvalidCount(count.to_string()))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for FlashcardCount {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl FromStr for FlashcardCount {
    type Err = FlashcardError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let count: i64 = trimmed
            .parse()
            .map_err(|_| FlashcardError::InvalidCount(trimmed.to_string()))?;
        if count <= 0 {
            return Err(FlashcardError::InvalidCount(trimmed.to_string()));
        }
        usize::try_from(count)
            .map_err(|_| FlashcardError::InvalidCount(trimmed.to_string()))
            .and_then(Self::new)
    }
}

impl std::fmt::Display for FlashcardCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
