//! Application module
//!
//! Contains the main application loop, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Form-state store and application state (EnrollmentState, AppState, View)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, Completion, EnrollmentState, View};

use crate::input::{InputHandler, InputResult, normalize_focus};
use crate::service::RegistrationService;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long one loop iteration waits for terminal input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    input_handler: InputHandler,
}

impl App {
    /// Create a new application instance around a registration service
    pub fn new(service: Box<dyn RegistrationService>) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(service),
            ui_renderer: UiRenderer::new(),
            input_handler: InputHandler::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run deferred actions due at `now` and report them in the status line
    pub fn tick(&mut self, now: Instant) {
        for completion in self.state.enrollment.tick(now) {
            match completion {
                Completion::EmailChecked { exists: true, .. } => {
                    self.state.status_message = "This email is already registered".to_string();
                }
                Completion::EmailChecked { exists: false, .. } => {}
                Completion::Submitted => {
                    self.state.status_message = "Enrollment Successful!".to_string();
                }
                Completion::SubmitFailed(reason) => {
                    self.state.status_message = format!("Submission failed: {}", reason);
                }
            }
        }
        normalize_focus(&mut self.state);
    }

    /// Handle one terminal event. Returns `true` when exit was requested.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key(&mut self.state, key, now) == InputResult::Quit
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                false
            }
            _ => false,
        }
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.state, self.input_handler.keybindings())
        })?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        info!("Starting main application loop");

        loop {
            self.tick(Instant::now());
            self.draw(terminal)?;

            if crossterm::event::poll(POLL_INTERVAL)? {
                let event = crossterm::event::read()?;
                if self.handle_event(event, Instant::now()) {
                    info!("Exit requested");
                    break;
                }
            }
        }

        Ok(())
    }
}
