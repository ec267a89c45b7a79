//! Help overlay component
//!
//! Displays context-sensitive help in a window centered over the form.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::View;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const WIDTH_PERCENT: u16 = 60;
const HEIGHT_PERCENT: u16 = 70;
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given view
    pub fn new(view: View, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(view);
        Self {
            content: Self::build_content(&sections, view),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], view: View) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Course Enrollment Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));

        let view_name = match view {
            View::Details => "Student Details",
            View::Courses => "Course Selection",
            View::Review => "Review & Submit",
            View::Success => "Enrollment Complete",
        };
        lines.push(Line::from(vec![
            Span::styled("Current: ", Styles::text_muted()),
            Span::styled(view_name.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::focused()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press F1 or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(parent);
        f.render_widget(Clear, area);
        let window = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Styles::border_active())
                    .style(Style::default().bg(Colors::BG_PRIMARY)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(window, area);
    }
}

// Size clamped to the parent, never below the minimums unless the parent is smaller.
fn centered_rect(parent: Rect) -> Rect {
    let width = ((u32::from(parent.width) * u32::from(WIDTH_PERCENT) / 100) as u16)
        .max(MIN_WIDTH)
        .min(parent.width);
    let height = ((u32::from(parent.height) * u32::from(HEIGHT_PERCENT) / 100) as u16)
        .max(MIN_HEIGHT)
        .min(parent.height);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}
