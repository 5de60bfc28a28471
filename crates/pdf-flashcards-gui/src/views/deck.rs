use eframe::egui;
use pdf_flashcards::Navigator;

use super::UiAction;

pub fn show_deck(
    ctx: &egui::Context,
    open: &mut bool,
    navigator: &Navigator,
    actions: &mut Vec<UiAction>,
) {
    let view = navigator.view();

    egui::Window::new("Flashcards")
        .open(open)
        .default_size([400.0, 400.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(&view.primary).size(16.0));
                ui.add_space(10.0);
                ui.label(egui::RichText::new(&view.secondary).size(14.0));
                ui.add_space(10.0);

                let has_cards = !navigator.is_empty();
                if ui
                    .add_enabled(has_cards, egui::Button::new(view.reveal_label))
                    .clicked()
                {
                    actions.push(UiAction::ToggleReveal);
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(has_cards, egui::Button::new("<< Previous"))
                        .clicked()
                    {
                        actions.push(UiAction::PreviousCard);
                    }
                    if ui
                        .add_enabled(has_cards, egui::Button::new("Next >>"))
                        .clicked()
                    {
                        actions.push(UiAction::NextCard);
                    }
                });
            });

            // Arrow keys and space mirror the buttons
            if ctx.wants_keyboard_input() {
                return;
            }
            ctx.input(|i| {
                if i.key_pressed(egui::Key::ArrowRight) {
                    actions.push(UiAction::NextCard);
                }
                if i.key_pressed(egui::Key::ArrowLeft) {
                    actions.push(UiAction::PreviousCard);
                }
                if i.key_pressed(egui::Key::Space) {
                    actions.push(UiAction::ToggleReveal);
                }
            });
        });
}
