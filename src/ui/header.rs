//! Header and common widget rendering
//!
//! The title banner with the three-step progress indicator, the status line,
//! the navigation bar, and the help overlay hook.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Styles, Theme};
use crate::wizard::Step;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Application title shown in the header border
pub const APP_TITLE: &str = "Online Course Enrollment";

/// Progress indicator line: every step up to the current one is highlighted
pub fn progress_line(current: Step) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, step) in Step::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ──── ", Styles::text_muted()));
        }
        let reached = current >= *step;
        spans.push(Span::styled(
            format!("({}) {}", step.number(), step.label()),
            Theme::step_style(reached, *step == current),
        ));
    }
    Line::from(spans)
}

/// Render the header block with the progress indicator
pub fn render_header(f: &mut Frame, area: Rect, current: Step) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let header = Paragraph::new(vec![Line::from(""), progress_line(current)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(Span::styled(format!(" {} ", APP_TITLE), Styles::title()))
                .title_alignment(Alignment::Center),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Render the one-line status message
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(message.to_string())
        .style(Styles::text_secondary())
        .alignment(Alignment::Left);
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(state.enrollment.view());
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(state.enrollment.view(), keybinding_ctx);
    help_overlay.render(f, f.area());
}
