use pdf_flashcards::*;

fn count(n: usize) -> FlashcardCount {
    FlashcardCount::new(n).unwrap()
}

fn run(pages: &[&str], n: usize) -> ExtractionOutcome {
    extract_flashcards(pages, count(n), &CancellationToken::new(), |_| {})
}

#[test]
fn test_stops_at_target_count() {
    let pages = ["Line A\n\nLine B", "Line C"];
    let outcome = run(&pages, 2);

    assert_eq!(
        outcome,
        ExtractionOutcome::Completed(vec![
            Flashcard {
                question: "What is: 'Line A'?".to_string(),
                answer: "This is the answer: Line A".to_string(),
            },
            Flashcard {
                question: "What is: 'Line B'?".to_string(),
                answer: "This is the answer: Line B".to_string(),
            },
        ])
    );
}

#[test]
fn test_lines_are_stripped_and_ordered_across_pages() {
    let pages = ["  first  \n\t\n second", "", "third\r\nfourth   "];
    let outcome = run(&pages, 10);

    let answers: Vec<&str> = outcome.cards().iter().map(|c| c.answer.as_str()).collect();
    assert_eq!(
        answers,
        vec![
            "This is the answer: first",
            "This is the answer: second",
            "This is the answer: third",
            "This is the answer: fourth",
        ]
    );
}

#[test]
fn test_at_most_n_and_exactly_n_iff_enough_lines() {
    let pages = ["a\nb\n\nc", "   ", "d\ne"];
    let available = 5;

    for n in 1..=8 {
        let produced = run(&pages, n).cards().len();
        assert!(produced <= n, "n={n} produced {produced}");
        assert_eq!(produced == n, available >= n, "n={n}");
    }
}

#[test]
fn test_blank_pages_are_no_content() {
    let outcome = run(&["   ", ""], 10);
    assert_eq!(outcome, ExtractionOutcome::NoContent);
    assert!(outcome.cards().is_empty());
}

#[test]
fn test_no_pages_is_no_content() {
    let pages: Vec<String> = Vec::new();
    let outcome = extract_flashcards(&pages, count(3), &CancellationToken::new(), |_| {});
    assert_eq!(outcome, ExtractionOutcome::NoContent);
}

#[test]
fn test_cancelled_before_first_page() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut reports = 0;
    let outcome = extract_flashcards(&["a", "b"][..], count(5), &cancel, |_| reports += 1);

    assert_eq!(outcome, ExtractionOutcome::Cancelled { partial: vec![] });
    assert_eq!(reports, 0);
}

#[test]
fn test_cancel_is_honored_at_next_page_boundary() {
    let pages = ["one\ntwo", "three", "four"];
    let cancel = CancellationToken::new();

    // Cancel while the first page's progress is being reported
    let outcome = extract_flashcards(&pages[..], count(10), &cancel, |state| {
        if state.pages_processed == 1 {
            cancel.cancel();
        }
    });

    match outcome {
        ExtractionOutcome::Cancelled { partial } => {
            assert_eq!(partial.len(), 2);
            assert_eq!(partial[1].question, "What is: 'two'?");
        }
        other => panic!("Expected Cancelled, got {other:?}"),
    }
}

#[test]
fn test_progress_reported_once_per_page() {
    let pages = ["a", "", "b", "c"];
    let mut fractions = Vec::new();
    let mut produced = Vec::new();

    let outcome = extract_flashcards(&pages[..], count(10), &CancellationToken::new(), |state| {
        assert_eq!(state.total_pages, 4);
        fractions.push(state.progress_fraction());
        produced.push(state.produced_count);
    });

    assert_eq!(outcome.cards().len(), 3);
    assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
    assert_eq!(produced, vec![1, 1, 2, 3]);
}

#[test]
fn test_extraction_stops_reading_pages_once_full() {
    struct CountingPages {
        pages: Vec<&'static str>,
        reads: std::cell::Cell<usize>,
    }

    impl PageSource for CountingPages {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> String {
            self.reads.set(self.reads.get() + 1);
            self.pages[index].to_string()
        }
    }

    let source = CountingPages {
        pages: vec!["a\nb", "c", "d"],
        reads: std::cell::Cell::new(0),
    };
    let outcome = extract_flashcards(&source, count(2), &CancellationToken::new(), |_| {});

    assert_eq!(outcome.cards().len(), 2);
    assert_eq!(source.reads.get(), 1);
}

#[test]
fn test_count_validation() {
    assert!(matches!(
        FlashcardCount::new(0),
        Err(FlashcardError::InvalidCount(_))
    ));
    assert!(matches!(
        "0".parse::<FlashcardCount>(),
        Err(FlashcardError::InvalidCount(_))
    ));
    assert!(matches!(
        "-3".parse::<FlashcardCount>(),
        Err(FlashcardError::InvalidCount(_))
    ));
    assert!(matches!(
        "ten".parse::<FlashcardCount>(),
        Err(FlashcardError::InvalidCount(_))
    ));
    assert!(matches!(
        "".parse::<FlashcardCount>(),
        Err(FlashcardError::InvalidCount(_))
    ));
    assert!("2.5".parse::<FlashcardCount>().is_err());

    assert_eq!(" 12 ".parse::<FlashcardCount>().unwrap().get(), 12);
    assert_eq!(FlashcardCount::default().get(), 10);
}
