use pdf_flashcards::*;

fn deck(lines: &[&str]) -> Vec<Flashcard> {
    lines.iter().map(|line| Flashcard::from_line(line)).collect()
}

#[test]
fn test_new_deck_starts_at_first_card_hidden() {
    let nav = Navigator::new(deck(&["a", "b"]));
    assert_eq!(nav.current_index(), Some(0));
    assert!(!nav.is_revealed());
}

#[test]
fn test_empty_deck_has_no_index_and_ignores_moves() {
    let mut nav = Navigator::new(Vec::new());
    assert_eq!(nav.current_index(), None);

    nav.advance();
    nav.retreat();
    assert_eq!(nav.current_index(), None);
    assert!(nav.current().is_none());
    assert_eq!(nav.view().primary, "No flashcards available.");
}

#[test]
fn test_advance_is_circular() {
    for len in 1..=6 {
        let lines: Vec<String> = (0..len).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut nav = Navigator::new(deck(&refs));
        nav.advance();
        let start = nav.current_index();

        for _ in 0..len {
            nav.advance();
        }
        assert_eq!(nav.current_index(), start, "len={len}");
    }
}

#[test]
fn test_retreat_wraps_to_last_card() {
    let mut nav = Navigator::new(deck(&["a", "b", "c"]));
    nav.retreat();
    assert_eq!(nav.current_index(), Some(2));
    nav.retreat();
    assert_eq!(nav.current_index(), Some(1));

    let mut single = Navigator::new(deck(&["only"]));
    single.retreat();
    assert_eq!(single.current_index(), Some(0));
}

#[test]
fn test_toggle_reveal_twice_restores_state() {
    let mut nav = Navigator::new(deck(&["a"]));
    let before = nav.view();

    nav.toggle_reveal();
    assert!(nav.is_revealed());
    nav.toggle_reveal();

    assert!(!nav.is_revealed());
    assert_eq!(nav.view(), before);
}

#[test]
fn test_view_shows_answer_first_and_reveals_question() {
    let mut nav = Navigator::new(deck(&["Line A", "Line B"]));
    nav.advance();

    let hidden = nav.view();
    assert_eq!(hidden.primary, "Flashcard 2/2: This is the answer: Line B");
    assert_eq!(hidden.secondary, "");
    assert_eq!(hidden.reveal_label, "Show Question");

    nav.toggle_reveal();
    let shown = nav.view();
    assert_eq!(shown.primary, hidden.primary);
    assert_eq!(shown.secondary, "What is: 'Line B'?");
    assert_eq!(shown.reveal_label, "Show Answer");
}

#[test]
fn test_moving_to_another_card_hides_it() {
    let mut nav = Navigator::new(deck(&["A", "B"]));

    nav.toggle_reveal();
    nav.advance();
    assert!(!nav.is_revealed());
    let view = nav.view();
    assert_eq!(view.primary, "Flashcard 2/2: This is the answer: B");
    assert_eq!(view.secondary, "");
    assert_eq!(view.reveal_label, "Show Question");

    nav.toggle_reveal();
    nav.retreat();
    assert!(!nav.is_revealed());
    assert_eq!(nav.view().secondary, "");
}

#[test]
fn test_load_resets_index_and_reveal() {
    let mut nav = Navigator::new(deck(&["a", "b", "c"]));
    nav.advance();
    nav.advance();
    nav.toggle_reveal();

    nav.load(deck(&["x", "y"]));
    assert_eq!(nav.current_index(), Some(0));
    assert!(!nav.is_revealed());
    assert_eq!(nav.len(), 2);

    nav.toggle_reveal();
    nav.load(Vec::new());
    assert_eq!(nav.current_index(), None);
    assert!(!nav.is_revealed());
}

#[test]
fn test_summary_text_joins_cards_in_order() {
    let nav = Navigator::new(deck(&["A", "B"]));
    assert_eq!(
        nav.summary_text(),
        "What is: 'A'? This is the answer: A What is: 'B'? This is the answer: B"
    );
    assert_eq!(summary_text(&[]), "");
    assert_eq!(
        build_prompt("x"),
        "Summarize the following content: x"
    );
}
