use eframe::egui;
use pdf_async_runtime::ExtractionTask;

use super::UiAction;

/// Text the main window shows; written by the app, only read here
/// (apart from the count entry)
pub struct ControlsState {
    pub count_input: String,
    pub analysis: String,
    pub uploaded_doc: Option<String>,
    pub summary: String,
    pub loading: String,
    pub summarizing: bool,
    pub night_mode: bool,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            count_input: pdf_flashcards::FlashcardCount::DEFAULT.to_string(),
            analysis: String::new(),
            uploaded_doc: None,
            summary: String::new(),
            loading: String::new(),
            summarizing: false,
            night_mode: false,
        }
    }
}

pub fn show_controls(
    ui: &mut egui::Ui,
    state: &mut ControlsState,
    task: Option<&ExtractionTask>,
    actions: &mut Vec<UiAction>,
) {
    ui.horizontal(|ui| {
        if ui.button("📜 Log").clicked() {
            actions.push(UiAction::ToggleLog);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.night_mode {
                "☀ Day Mode"
            } else {
                "🌙 Night Mode"
            };
            if ui.button(label).clicked() {
                actions.push(UiAction::ToggleNightMode);
            }
        });
    });

    ui.add_space(10.0);

    ui.vertical_centered(|ui| {
        if ui
            .add_enabled(task.is_none(), egui::Button::new("📂 Upload PDF for Flashcards"))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Select a PDF")
                .add_filter("PDF files", &["pdf"])
                .pick_file()
            {
                actions.push(UiAction::Upload(path));
            }
        }

        ui.add_space(6.0);

        if ui
            .add_enabled(!state.summarizing, egui::Button::new("📝 Summarize Document"))
            .clicked()
        {
            actions.push(UiAction::Summarize);
        }

        ui.add_space(6.0);
        if !state.analysis.is_empty() {
            ui.label(&state.analysis);
        }
        if let Some(name) = &state.uploaded_doc {
            ui.label(format!("Uploaded Document: {name}"));
        }

        ui.add_space(6.0);
        egui::ScrollArea::vertical()
            .max_height(200.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut state.summary.as_str())
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.add_space(10.0);
        ui.label("Number of flashcards to generate:");
        ui.add(egui::TextEdit::singleline(&mut state.count_input).desired_width(80.0));

        ui.add_space(10.0);
        let fraction = task.map(ExtractionTask::progress_fraction).unwrap_or(0.0);
        let mut bar = egui::ProgressBar::new(fraction).desired_width(300.0);
        if let Some(task) = task {
            let (done, total) = task.pages();
            bar = bar.text(format!("{}: page {done}/{total}", task.label));
        }
        ui.add(bar);

        if !state.loading.is_empty() {
            ui.label(&state.loading);
        }

        ui.add_space(6.0);
        let can_cancel = task.is_some_and(|task| !task.is_cancelled());
        if ui
            .add_enabled(can_cancel, egui::Button::new("✖ Cancel"))
            .clicked()
        {
            actions.push(UiAction::Cancel);
        }
    });
}
