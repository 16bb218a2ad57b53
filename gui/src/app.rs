use eframe::egui;
use qr_forge::themes::PRESET_THEMES;
use qr_forge::{BitMatrix, EcLevel, GenerateError, RenderConfig, RenderMode, generate, render};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Delay between the last content edit and the generation request
const DEBOUNCE: Duration = Duration::from_millis(300);
/// How long the copy confirmation stays visible
const COPIED_FLASH: Duration = Duration::from_secs(2);

/// A generation job for the worker thread
///
/// `seq` is the request-generation counter value at send time; responses
/// carrying an older counter than the app's current one are stale and get
/// discarded.
struct GenerateRequest {
    seq: u64,
    text: String,
    ec_level: EcLevel,
}

struct GenerateResponse {
    seq: u64,
    result: Result<BitMatrix, GenerateError>,
}

/// Main application state for the QR Forge GUI
pub struct QrForgeApp {
    /// Content to encode
    text: String,
    /// Error-correction level for generation
    ec_level: EcLevel,
    /// Rendering parameters (mode, theme characters, invert)
    config: RenderConfig,
    /// Name of the selected preset theme, or "Custom"
    theme_name: String,
    /// Single-character input fields backing the theme characters
    dark_input: String,
    light_input: String,

    /// Display colors (presentation only, not module semantics)
    fg_color: egui::Color32,
    bg_color: egui::Color32,

    /// Last successfully generated matrix, reused across render-parameter
    /// changes without regenerating
    matrix: Option<BitMatrix>,
    /// Rendered output string
    ascii: String,
    /// Whether a generation request is in flight
    loading: bool,
    /// Error message to display (if any)
    error_message: Option<String>,

    /// When the content/EC level last changed; drives the debounce
    dirty_since: Option<Instant>,
    /// Monotonically increasing request-generation counter
    request_seq: u64,
    /// When the in-flight request was sent
    sent_at: Option<Instant>,
    /// Last generation time in milliseconds
    last_generate_ms: f64,
    /// When the output was last copied to the clipboard
    copied_at: Option<Instant>,

    request_tx: Sender<GenerateRequest>,
    response_rx: Receiver<GenerateResponse>,
}

impl QrForgeApp {
    /// Create a new QR Forge application
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let (request_tx, response_rx) = spawn_worker(cc.egui_ctx.clone());

        let classic = &PRESET_THEMES[0];
        Self {
            text: "https://example.com".to_string(),
            ec_level: EcLevel::L,
            config: RenderConfig::default(),
            theme_name: classic.name.to_string(),
            dark_input: classic.dark_char.to_string(),
            light_input: classic.light_char.to_string(),
            fg_color: egui::Color32::from_rgb(74, 222, 128),
            bg_color: egui::Color32::BLACK,
            matrix: None,
            ascii: String::new(),
            loading: false,
            error_message: None,
            // Generate the initial code on the first frame
            dirty_since: Some(
                Instant::now()
                    .checked_sub(DEBOUNCE)
                    .unwrap_or_else(Instant::now),
            ),
            request_seq: 0,
            sent_at: None,
            last_generate_ms: 0.0,
            copied_at: None,
            request_tx,
            response_rx,
        }
    }

    /// Save the rendered output to a text file
    pub fn save_output(&self, path: &std::path::Path) -> Result<(), String> {
        if self.ascii.is_empty() {
            return Err("No output to save".to_string());
        }
        std::fs::write(path, &self.ascii).map_err(|e| format!("Failed to save: {}", e))
    }

    /// Send the current content to the worker, superseding any in-flight job
    fn request_generation(&mut self) {
        self.dirty_since = None;
        self.request_seq += 1;

        if self.text.is_empty() {
            // Bumping the counter above already outdates in-flight results.
            self.matrix = None;
            self.ascii.clear();
            self.error_message = None;
            self.loading = false;
            return;
        }

        self.loading = true;
        self.sent_at = Some(Instant::now());
        let request = GenerateRequest {
            seq: self.request_seq,
            text: self.text.clone(),
            ec_level: self.ec_level,
        };
        if self.request_tx.send(request).is_err() {
            self.loading = false;
            self.error_message = Some("Generation worker has stopped".to_string());
        }
    }

    /// Drain worker responses, keeping only the one for the latest request
    fn poll_responses(&mut self) {
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => {
                    if response.seq != self.request_seq {
                        log::debug!("discarding stale result for request {}", response.seq);
                        continue;
                    }
                    self.loading = false;
                    if let Some(sent_at) = self.sent_at.take() {
                        self.last_generate_ms = sent_at.elapsed().as_secs_f64() * 1000.0;
                    }
                    match response.result {
                        Ok(matrix) => {
                            self.matrix = Some(matrix);
                            self.error_message = None;
                            self.rerender();
                        }
                        Err(GenerateError::DataTooLong) => {
                            self.matrix = None;
                            self.ascii.clear();
                            self.error_message = Some(
                                "Content is too long for this error-correction level. \
                                 Try shorter text or a lower level."
                                    .to_string(),
                            );
                        }
                        Err(err) => {
                            self.matrix = None;
                            self.ascii.clear();
                            self.error_message = Some(format!("Generation failed: {}", err));
                        }
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.loading = false;
                    break;
                }
            }
        }
    }

    /// Re-render the cached matrix with the current render parameters
    fn rerender(&mut self) {
        self.config.dark_char = self.dark_input.chars().next().unwrap_or('#');
        self.config.light_char = self.light_input.chars().next().unwrap_or('.');

        match self.config.validate() {
            Ok(_) => {
                if let Some(ref matrix) = self.matrix {
                    self.ascii = render(matrix, &self.config);
                    self.error_message = None;
                }
            }
            Err(e) => {
                self.error_message = Some(format!("Invalid config: {}", e));
            }
        }
    }

    /// Render the control panel UI
    ///
    /// Returns (content_changed, render_changed): the first requires a fresh
    /// matrix from the encoder, the second only a re-render of the cached one.
    fn render_controls(&mut self, ui: &mut egui::Ui) -> (bool, bool) {
        let mut content_changed = false;
        let mut render_changed = false;

        ui.heading("Configuration");
        ui.separator();

        // Content input
        ui.label("Content");
        content_changed |= ui
            .add(
                egui::TextEdit::singleline(&mut self.text)
                    .hint_text("Enter text or URL...")
                    .desired_width(f32::INFINITY),
            )
            .changed();

        ui.add_space(8.0);

        // Render mode
        ui.label("Render Mode");
        ui.horizontal(|ui| {
            render_changed |= ui
                .selectable_value(&mut self.config.mode, RenderMode::Block, "Block (Unicode)")
                .on_hover_text("Quadrant glyphs, two module-rows per line")
                .changed();
            render_changed |= ui
                .selectable_value(&mut self.config.mode, RenderMode::Text, "Text (ASCII)")
                .on_hover_text("One character per module")
                .changed();
        });

        ui.add_space(8.0);

        // Error correction
        ui.label("Error Correction");
        egui::ComboBox::from_id_salt("ec_level")
            .selected_text(self.ec_level.label())
            .show_ui(ui, |ui| {
                for level in EcLevel::ALL {
                    content_changed |= ui
                        .selectable_value(&mut self.ec_level, level, level.label())
                        .changed();
                }
            });

        ui.add_space(8.0);

        // Theme settings only apply to text mode
        if self.config.mode == RenderMode::Text {
            ui.collapsing("Theme", |ui| {
                ui.label("Presets");
                ui.horizontal_wrapped(|ui| {
                    for theme in &PRESET_THEMES {
                        let selected = self.theme_name == theme.name;
                        let label = format!("{}{}", theme.dark_char, theme.light_char);
                        if ui
                            .selectable_label(selected, egui::RichText::new(label).monospace())
                            .on_hover_text(theme.name)
                            .clicked()
                        {
                            self.theme_name = theme.name.to_string();
                            self.dark_input = theme.dark_char.to_string();
                            self.light_input = theme.light_char.to_string();
                            render_changed = true;
                        }
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Dark");
                    let dark_edit = ui.add(
                        egui::TextEdit::singleline(&mut self.dark_input)
                            .char_limit(1)
                            .desired_width(24.0),
                    );
                    ui.label("Light");
                    let light_edit = ui.add(
                        egui::TextEdit::singleline(&mut self.light_input)
                            .char_limit(1)
                            .desired_width(24.0),
                    );
                    if dark_edit.changed() || light_edit.changed() {
                        self.theme_name = "Custom".to_string();
                        render_changed = true;
                    }
                });
            });

            ui.add_space(8.0);
        }

        render_changed |= ui
            .checkbox(&mut self.config.invert, "Invert")
            .on_hover_text("Swap dark/light interpretation of every module")
            .changed();

        ui.add_space(8.0);

        // Display colors only affect painting, never the rendered string
        ui.collapsing("Colors", |ui| {
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(&mut self.fg_color);
                ui.label("Foreground");
            });
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(&mut self.bg_color);
                ui.label("Background");
            });
        });

        ui.add_space(16.0);
        ui.separator();

        // Show generation time
        if self.last_generate_ms > 0.0 {
            ui.label(format!("Last generate: {:.1} ms", self.last_generate_ms));
        }

        (content_changed, render_changed)
    }

    /// Render the output panel: spinner while loading, otherwise the art
    fn render_output(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Output");

            if !self.ascii.is_empty() && !self.loading {
                let copied = self
                    .copied_at
                    .is_some_and(|at| at.elapsed() < COPIED_FLASH);
                let copy_label = if copied { "Copied!" } else { "Copy" };
                if ui.button(copy_label).clicked() {
                    ui.ctx().copy_text(self.ascii.clone());
                    self.copied_at = Some(Instant::now());
                }
            }
        });
        ui.separator();

        if self.loading {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.spinner();
                ui.label("Compiling matrix...");
            });
            return;
        }

        if self.ascii.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.label("Enter content to generate a QR code");
            });
            return;
        }

        let rows = self.ascii.split('\n').count();
        let cols = self
            .ascii
            .split('\n')
            .next()
            .map_or(0, |line| line.chars().count());

        egui::Frame::default()
            .fill(self.bg_color)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.ascii.as_str())
                                    .monospace()
                                    .color(self.fg_color),
                            )
                            .extend(),
                        );
                    });
            });

        ui.label(format!("Ln {}, Col {}", rows, cols));
    }
}

/// Spawn the generation worker
///
/// The worker owns the encoding work so the UI thread never blocks on a slow
/// input. Before encoding it drains its queue to the newest request, so a
/// superseded job is skipped rather than computed and thrown away.
fn spawn_worker(ctx: egui::Context) -> (Sender<GenerateRequest>, Receiver<GenerateResponse>) {
    let (request_tx, request_rx) = mpsc::channel::<GenerateRequest>();
    let (response_tx, response_rx) = mpsc::channel();

    thread::spawn(move || {
        while let Ok(mut request) = request_rx.recv() {
            while let Ok(newer) = request_rx.try_recv() {
                log::debug!("skipping superseded request {}", request.seq);
                request = newer;
            }

            let result = generate(&request.text, request.ec_level);
            let response = GenerateResponse {
                seq: request.seq,
                result,
            };
            if response_tx.send(response).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });

    (request_tx, response_rx)
}

impl eframe::App for QrForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_responses();

        // Debounced generation for content/EC changes
        if let Some(since) = self.dirty_since {
            let elapsed = since.elapsed();
            if elapsed >= DEBOUNCE {
                self.request_generation();
            } else {
                ctx.request_repaint_after(DEBOUNCE - elapsed);
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save Output...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text", &["txt"])
                            .set_file_name("ascii-qr.txt")
                            .save_file()
                            && let Err(e) = self.save_output(&path)
                        {
                            log::warn!("save failed: {}", e);
                            self.error_message = Some(e);
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.error_message = Some(
                            "QR Forge\nScannable ASCII art QR codes\n\nBuilt with Rust + egui"
                                .to_string(),
                        );
                        ui.close();
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let (content_changed, render_changed) = self.render_controls(ui);

                    if content_changed {
                        self.dirty_since = Some(Instant::now());
                        ctx.request_repaint_after(DEBOUNCE);
                    }
                    if render_changed {
                        self.rerender();
                    }
                });
            });

        // Central panel: Output display
        egui::CentralPanel::default().show(ctx, |ui| {
            // Show error message if any
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            self.render_output(ui);
        });
    }
}
