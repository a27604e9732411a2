// app.rs - egui presentation adapter
// Renders snapshots from the runner and turns pointer input into cell edits.

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use tokio::runtime::Runtime;
use tracing::warn;

use conway_aging::patterns::{self, PATTERNS};
use conway_aging::{in_bounds, LifeError, Runner, Snapshot};

const BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;

/// Board size presets as (rows, cols), labelled cols x rows.
const SIZE_PRESETS: [(usize, usize); 2] = [(30, 50), (40, 70)];

/// Pointer gesture state. Only the front end knows whether a drag is in
/// progress; the simulation just receives toggle and paint calls.
#[derive(Debug, Default)]
struct DragGesture {
    active: bool,
    last_cell: Option<(usize, usize)>,
}

/// Edit produced by one frame of pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellAction {
    Toggle(usize, usize),
    Paint(usize, usize),
}

impl DragGesture {
    /// Advances the gesture by one frame. `hovered` is the cell under the
    /// pointer while it is over the board, `pointer` the cell under it
    /// anywhere. A press toggles and starts a drag, after which every new
    /// cell under the pointer is painted until the button is released.
    fn step(
        &mut self,
        pressed: bool,
        down: bool,
        hovered: Option<(usize, usize)>,
        pointer: Option<(usize, usize)>,
    ) -> Option<CellAction> {
        let action = if pressed {
            hovered.map(|(row, col)| {
                *self = DragGesture {
                    active: true,
                    last_cell: Some((row, col)),
                };
                CellAction::Toggle(row, col)
            })
        } else if self.active && down {
            pointer
                .filter(|&cell| self.last_cell != Some(cell))
                .map(|(row, col)| {
                    self.last_cell = Some((row, col));
                    CellAction::Paint(row, col)
                })
        } else {
            None
        };

        if !down {
            *self = DragGesture::default();
        }
        action
    }
}

/// Maps a pointer offset from the board's top-left corner to a cell.
fn cell_at(offset: Vec2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let pitch = BOX_SIZE + SPACING;
    let row = (offset.y / pitch).floor() as isize;
    let col = (offset.x / pitch).floor() as isize;
    in_bounds(rows, cols, row, col).then_some((row as usize, col as usize))
}

/// Draws `live` at opacity 1/age over white, so older cells are lighter.
fn fade_color(live: Color32, age: u8) -> Color32 {
    let keep = 1.0 / f32::from(age.max(1));
    let mix = |channel: u8| (f32::from(channel) * keep + 255.0 * (1.0 - keep)).round() as u8;
    Color32::from_rgb(mix(live.r()), mix(live.g()), mix(live.b()))
}

pub struct LifeApp {
    runner: Runner,
    drag: DragGesture,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    random_seed: u64,

    // Kept last so the tick task outlives everything that talks to it.
    _runtime: Runtime,
}

impl LifeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Runtime, runner: Runner) -> Self {
        // Repaint whenever the simulation publishes a new snapshot.
        let mut updates = runner.subscribe();
        let ctx = cc.egui_ctx.clone();
        runtime.spawn(async move {
            while updates.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            runner,
            drag: DragGesture::default(),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            random_seed: 0,
            _runtime: runtime,
        }
    }

    fn report(result: Result<(), LifeError>) {
        if let Err(err) = result {
            warn!(%err, "edit rejected");
        }
    }

    fn cell_color(&self, age: u8) -> Color32 {
        if age == 0 {
            self.dead_color
        } else {
            fade_color(self.live_color, age)
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, snapshot: &Snapshot) {
        ui.horizontal(|ui| {
            if ui.add_enabled(!snapshot.running, egui::Button::new("▶ Start")).clicked() {
                self.runner.start();
            }
            if ui.add_enabled(snapshot.running, egui::Button::new("⏸ Stop")).clicked() {
                self.runner.stop();
            }
            if ui.button("⏹ Clear").clicked() {
                self.runner.clear();
            }

            ui.separator();

            for (rows, cols) in SIZE_PRESETS {
                if ui.button(format!("{cols}x{rows}")).clicked() {
                    Self::report(self.runner.resize(rows, cols));
                }
            }

            ui.separator();

            ui.label(format!("Generation: {}", snapshot.generation));
        });

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                let board = PATTERNS[self.selected_pattern].stamp_centered(&snapshot.board.cleared());
                self.runner.load(board);
            }

            if ui.button("🎲 Random").clicked() {
                let (rows, cols) = snapshot.board.dimensions();
                match patterns::random_board(rows, cols, self.random_seed) {
                    Ok(board) => self.runner.load(board),
                    Err(err) => warn!(%err, "random fill failed"),
                }
                self.random_seed = self.random_seed.wrapping_add(1);
            }

            ui.separator();

            // Speed control
            ui.label("Speed:");
            let mut speed = 1000.0 / self.runner.tick_interval().as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                let interval = Duration::from_millis((1000.0 / speed) as u64);
                Self::report(self.runner.set_tick_interval(interval));
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui, snapshot: &Snapshot) {
        let (rows, cols) = snapshot.board.dimensions();
        let pitch = BOX_SIZE + SPACING;
        let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for (row, cells) in snapshot.board.iter_rows().enumerate() {
            for (col, &age) in cells.iter().enumerate() {
                let min = origin + Vec2::new(col as f32 * pitch, row as f32 * pitch);
                let rect = Rect::from_min_size(min, Vec2::splat(BOX_SIZE));
                painter.rect_filled(rect, 1.0, self.cell_color(age));
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        let (pressed, down, pointer) = ui.input(|i| {
            (i.pointer.primary_pressed(), i.pointer.primary_down(), i.pointer.interact_pos())
        });
        let pointer_cell = pointer.and_then(|pos| cell_at(pos - origin, rows, cols));
        let hovered_cell = pointer_cell.filter(|_| response.hovered());

        match self.drag.step(pressed, down, hovered_cell, pointer_cell) {
            Some(CellAction::Toggle(row, col)) => Self::report(self.runner.toggle_cell(row, col)),
            Some(CellAction::Paint(row, col)) => Self::report(self.runner.paint_cell(row, col)),
            None => {}
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.runner.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.toolbar(ui, &snapshot);

            ui.separator();

            ui.label("Click cells to toggle them, drag to paint. Older cells fade.");

            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| {
                self.board(ui, &snapshot);
            });

            ui.separator();

            // Statistics
            let total = snapshot.board.rows() * snapshot.board.cols();
            let live_cells = snapshot.board.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        // Keep animating between snapshot notifications while running.
        if snapshot.running {
            ctx.request_repaint_after(self.runner.tick_interval());
        }
    }
}
