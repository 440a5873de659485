use super::{App, Config};
use crate::{LifeError, SPEED_MAX_MS, SPEED_MIN_MS};
use eframe::egui::{vec2, Button, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2};
use std::time::Instant;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_run_controls(&mut self, ui: &mut Ui) {
        let text = if self.session.is_running() {
            "Stop"
        } else {
            "Start"
        };
        if ui.add(Self::new_button(text)).clicked() {
            if self.session.is_running() {
                self.session.stop();
            } else {
                self.session.start(Instant::now());
            }
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            // "-" lengthens the interval, "+" shortens it; both disable at
            // the clamp bounds like the original buttons.
            if ui
                .add_enabled(self.session.speed_ms() < SPEED_MAX_MS, Self::new_button("-"))
                .clicked()
            {
                self.session.slower(Instant::now());
            }
            if ui
                .add_enabled(self.session.speed_ms() > SPEED_MIN_MS, Self::new_button("+"))
                .clicked()
            {
                self.session.faster(Instant::now());
            }
        });

        ui.label(Self::new_text(&format!(
            "{:.1} generations/second",
            self.session.generations_per_sec()
        )));
    }

    fn draw_edit_controls(&mut self, ui: &mut Ui) {
        ui.add_enabled(!self.session.is_running(), |ui: &mut Ui| {
            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Randomize")).clicked() {
                    if let Err(err) = self.session.randomize(None) {
                        log::debug!("randomize rejected: {err}");
                    }
                }
                if ui.add(Self::new_button("Clear")).clicked() {
                    if let Err(err) = self.session.clear() {
                        log::debug!("clear rejected: {err}");
                    }
                }
            })
            .response
        });
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.session.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.session.grid().population()
        )));
        ui.label(Self::new_text(&format!(
            "Last step: {:.3} ms",
            self.last_step_duration * 1e3
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_run_controls(ui);

                    ui.add_space(Config::WIDGET_GAP);

                    self.draw_edit_controls(ui);

                    ui.add_space(Config::WIDGET_GAP);

                    self.draw_stats(ui);
                });

                // to adjust the bounds
                ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
            });
        });
    }

    /// Draws the grid as a wall of squares and routes clicks to the edit
    /// path. Rejected edits (while running) leave the grid untouched.
    fn draw_cell_wall(&mut self, ui: &mut Ui, size_px: f32) {
        let size = self.session.grid().size();
        let (response, painter) = ui.allocate_painter(Vec2::splat(size_px), Sense::click());
        let wall = response.rect;

        let pitch = size_px / size as f32;
        let gap = pitch * Config::CELL_GAP_RATIO / (1. + Config::CELL_GAP_RATIO);
        let side = pitch - gap;

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let x = ((pos.x - wall.min.x) / pitch) as usize;
                // The wall's y axis points up, the screen's points down.
                let y = size - 1 - (((pos.y - wall.min.y) / pitch) as usize).min(size - 1);
                match self.session.toggle_cell(x.min(size - 1), y) {
                    Ok(alive) => log::debug!("cell ({x}, {y}) -> {alive}"),
                    Err(LifeError::SimulationRunning) => {
                        log::debug!("toggle ignored while running")
                    }
                    Err(err) => log::error!("toggle failed: {err}"),
                }
            }
        }

        for x in 0..size {
            for y in 0..size {
                let min = wall.min
                    + vec2(
                        x as f32 * pitch + gap / 2.,
                        (size - 1 - y) as f32 * pitch + gap / 2.,
                    );
                let color = if self.session.grid().get(x, y) {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.rect_filled(
                    Rect::from_min_size(min, Vec2::splat(side)),
                    Rounding::same(Config::CELL_ROUNDING),
                    color,
                );
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_cell_wall(ui, size_px);
            });
        });
    }
}
