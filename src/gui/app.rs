use super::Config;
use crate::Session;
use eframe::egui::{CentralPanel, Context, Frame, Key, Margin};
use std::time::Instant;

pub struct App {
    pub(super) session: Session,        // Grid, mode flag, speed and step timer.
    pub(super) last_step_duration: f64, // Duration of the last generation step in seconds.
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            last_step_duration: 0.,
        }
    }

    /// Drives the session clock once per frame and schedules the next
    /// repaint for the pending step deadline, so an idle editing session
    /// does not busy-repaint.
    fn tick_session(&mut self, ctx: &Context) {
        let timer = Instant::now();
        match self.session.tick(timer) {
            Ok(true) => self.last_step_duration = timer.elapsed().as_secs_f64(),
            Ok(false) => {}
            Err(err) => {
                log::error!("generation step failed: {err}");
                self.session.stop();
            }
        }
        if let Some(deadline) = self.session.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                if self.session.is_running() {
                    self.session.stop();
                } else {
                    self.session.start(Instant::now());
                }
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.handle_keys(ctx);
                self.draw(ui);
            });

        self.tick_session(ctx);
    }
}
