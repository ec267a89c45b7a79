//! User interface rendering module
//!
//! - `header` - Title banner, progress indicator, status line, nav bar
//! - `screens` - One screen per wizard view

mod header;
pub mod screens;

pub use header::{APP_TITLE, progress_line};

use crate::app::{AppState, View};
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// UI renderer for the application
///
/// Entry point for rendering: lays out the frame and dispatches to the screen
/// for the current view.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header with progress
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_header(f, chunks[0], state.enrollment.step());

        match state.enrollment.view() {
            View::Details => screens::render_details_screen(f, chunks[1], state),
            View::Courses => screens::render_courses_screen(f, chunks[1], state),
            View::Review => screens::render_review_screen(f, chunks[1], state),
            View::Success => screens::render_success_screen(f, chunks[1], state),
        }

        header::render_status(f, chunks[2], &state.status_message);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[3]);

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
