use crate::types::Flashcard;

/// Text the flashcard window should show for the current navigator state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub primary: String,
    pub secondary: String,
    pub reveal_label: &'static str,
}

/// Owns the current deck and walks it circularly.
///
/// The card's answer is shown first and its question is what gets revealed.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    cards: Vec<Flashcard>,
    current_index: Option<usize>,
    revealed: bool,
}

impl Navigator {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        let mut navigator = Self::default();
        navigator.load(cards);
        navigator
    }

    /// Replace the deck wholesale, resetting position and reveal state
    pub fn load(&mut self, cards: Vec<Flashcard>) {
        self.current_index = if cards.is_empty() { None } else { Some(0) };
        self.cards = cards;
        self.revealed = false;
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.current_index.and_then(|index| self.cards.get(index))
    }

    /// Move to the next card, wrapping to the first. The new card starts hidden.
    pub fn advance(&mut self) {
        if let Some(index) = self.current_index {
            self.current_index = Some((index + 1) % self.cards.len());
            self.revealed = false;
        }
    }

    pub fn retreat(&mut self) {
        if let Some(index) = self.current_index {
            let len = self.cards.len();
            self.current_index = Some((index + len - 1) % len);
            self.revealed = false;
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn view(&self) -> CardView {
        let reveal_label = if self.revealed {
            "Show Answer"
        } else {
            "Show Question"
        };

        match (self.current_index, self.current()) {
            (Some(index), Some(card)) => CardView {
                primary: format!("Flashcard {}/{}: {}", index + 1, self.cards.len(), card.answer),
                secondary: if self.revealed {
                    card.question.clone()
                } else {
                    String::new()
                },
                reveal_label,
            },
            _ => CardView {
                primary: "No flashcards available.".to_string(),
                secondary: String::new(),
                reveal_label,
            },
        }
    }

    /// Every card as `"<question> <answer>"`, joined by single spaces in deck order
    pub fn summary_text(&self) -> String {
        summary_text(&self.cards)
    }
}

pub fn summary_text(cards: &[Flashcard]) -> String {
    cards
        .iter()
        .map(|card| format!("{} {}", card.question, card.answer))
        .collect::<Vec<_>>()
        .join(" ")
}
