use eframe::egui;
use pdf_async_runtime::{ExtractionOutcome, FlashcardCount, PdfCommand, PdfUpdate, TaskSlot};
use pdf_flashcards::Navigator;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{ControlsState, UiAction, show_controls, show_deck, show_log_panel};

struct Alert {
    title: &'static str,
    message: String,
}

pub struct FlashcardApp {
    controls: ControlsState,
    navigator: Navigator,
    tasks: TaskSlot,
    show_deck: bool,
    show_log: bool,
    alert: Option<Alert>,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<PdfCommand>,
    update_rx: mpsc::UnboundedReceiver<PdfUpdate>,

    // Runtime handle
    _tokio_handle: Option<tokio::runtime::Handle>,
}

impl FlashcardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        // Night mode starts off regardless of the system theme
        cc.egui_ctx.set_theme(egui::Theme::Light);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        let mut app = Self::with_channels(command_tx, update_rx, logger);
        app._tokio_handle = Some(tokio_handle);
        app
    }

    fn with_channels(
        command_tx: mpsc::UnboundedSender<PdfCommand>,
        update_rx: mpsc::UnboundedReceiver<PdfUpdate>,
        logger: AppLogger,
    ) -> Self {
        Self {
            controls: ControlsState::default(),
            navigator: Navigator::default(),
            tasks: TaskSlot::new(),
            show_deck: false,
            show_log: false,
            alert: None,
            logger,
            command_tx,
            update_rx,
            _tokio_handle: None,
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Upload(path) => self.start_extraction(path),
            UiAction::Cancel => {
                if self.tasks.cancel() {
                    log::info!("Cancellation requested");
                    self.controls.loading = "Operation cancelled.".to_string();
                }
            }
            UiAction::Summarize => self.request_summary(),
            UiAction::ToggleNightMode => self.controls.night_mode = !self.controls.night_mode,
            UiAction::ToggleLog => self.show_log = !self.show_log,
            UiAction::NextCard => self.navigator.advance(),
            UiAction::PreviousCard => self.navigator.retreat(),
            UiAction::ToggleReveal => {
                if !self.navigator.is_empty() {
                    self.navigator.toggle_reveal();
                }
            }
        }
    }

    fn start_extraction(&mut self, path: PathBuf) {
        if self.tasks.is_busy() {
            self.controls.analysis = "An extraction is already running.".to_string();
            return;
        }

        let count: FlashcardCount = match self.controls.count_input.parse() {
            Ok(count) => count,
            Err(e) => {
                log::warn!("{e}");
                self.alert = Some(Alert {
                    title: "Invalid Input",
                    message: "Please enter a valid positive number for flashcards.".to_string(),
                });
                return;
            }
        };

        let file_name = display_name(&path);
        let (task_id, cancel) = match self.tasks.start(file_name.clone()) {
            Ok(started) => started,
            Err(e) => {
                self.controls.analysis = e.to_string();
                return;
            }
        };

        log::info!("Uploading {}", path.display());
        let sent = self.command_tx.send(PdfCommand::ExtractFlashcards {
            task_id,
            input_path: path,
            count,
            cancel,
        });
        if sent.is_err() {
            self.tasks.finish(task_id);
            self.controls.analysis = "Error: background worker is not running".to_string();
            return;
        }

        self.controls.analysis = "Analyzing document...".to_string();
        self.controls.loading.clear();
        self.controls.uploaded_doc = Some(file_name);
    }

    fn request_summary(&mut self) {
        if self.navigator.is_empty() {
            self.alert = Some(Alert {
                title: "No Document",
                message: "Please upload a document first.".to_string(),
            });
            return;
        }

        let sent = self.command_tx.send(PdfCommand::Summarize {
            cards: self.navigator.cards().to_vec(),
        });
        if sent.is_err() {
            self.controls.loading = "Failed to summarize.".to_string();
            return;
        }
        self.controls.summarizing = true;
        self.controls.loading = "Summarizing document...".to_string();
    }

    fn apply_update(&mut self, update: PdfUpdate) {
        match update {
            PdfUpdate::ExtractionProgress {
                task_id,
                pages_processed,
                total_pages,
            } => {
                if !self.tasks.record_progress(task_id, pages_processed, total_pages) {
                    log::debug!("Ignoring progress from stale task {task_id:?}");
                }
            }
            PdfUpdate::ExtractionFinished { task_id, outcome } => {
                if self.tasks.finish(task_id).is_none() {
                    log::debug!("Ignoring result from stale task {task_id:?}");
                    return;
                }
                match outcome {
                    ExtractionOutcome::Completed(cards) => {
                        self.navigator.load(cards);
                        self.controls.analysis = "Flashcards generated!".to_string();
                        self.show_deck = true;
                    }
                    ExtractionOutcome::NoContent => {
                        self.navigator.load(Vec::new());
                        self.show_deck = false;
                        self.controls.analysis =
                            "No text found. Please check the document format.".to_string();
                    }
                    ExtractionOutcome::Cancelled { .. } => {
                        self.navigator.load(Vec::new());
                        self.show_deck = false;
                        self.controls.analysis = "Operation cancelled.".to_string();
                        self.controls.loading.clear();
                    }
                }
            }
            PdfUpdate::ExtractionFailed { task_id, message } => {
                if self.tasks.finish(task_id).is_some() {
                    self.controls.analysis = format!("Error: {message}");
                }
            }
            PdfUpdate::SummaryReady { summary } => {
                self.controls.summary = summary;
                self.controls.summarizing = false;
                self.controls.loading = "Summary done!".to_string();
            }
            PdfUpdate::SummaryFailed { message } => {
                self.controls.summarizing = false;
                self.controls.loading = "Failed to summarize.".to_string();
                self.alert = Some(Alert {
                    title: "Error",
                    message: format!("An error occurred: {message}"),
                });
            }
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = &self.alert else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(alert.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&alert.message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.alert = None;
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

impl eframe::App for FlashcardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // Handle drag-and-drop for PDF files
        ctx.input(|i| {
            if let Some(path) = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .find(|path| is_pdf(path))
            {
                actions.push(UiAction::Upload(path));
            }
        });

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.apply_update(update);
        }

        if self.show_log {
            show_log_panel(ctx, &self.logger);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_controls(ui, &mut self.controls, self.tasks.current(), &mut actions);
            });
        });

        if self.show_deck {
            let mut open = true;
            show_deck(ctx, &mut open, &self.navigator, &mut actions);
            self.show_deck = open;
        }

        self.show_alert(ctx);

        let night_mode = self.controls.night_mode;
        for action in actions {
            self.apply_action(action);
        }
        if night_mode != self.controls.night_mode {
            ctx.set_theme(if self.controls.night_mode {
                egui::Theme::Dark
            } else {
                egui::Theme::Light
            });
        }

        // Keep polling while the worker has something in flight
        if self.tasks.is_busy() || self.controls.summarizing {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
