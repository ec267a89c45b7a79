//! Navigation bar component
//!
//! One line of `key label` hints at the bottom of the screen.

use super::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Build the hint line
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Styles::nav_hint()));
            }
            spans.push(Span::styled(
                item.key_display.clone(),
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        f.render_widget(Paragraph::new(self.line()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_every_item() {
        let bar = NavBar::new(vec![
            NavBarItem {
                key_display: "F1".to_string(),
                action_label: "Help".to_string(),
            },
            NavBarItem {
                key_display: "Esc".to_string(),
                action_label: "Quit".to_string(),
            },
        ]);
        let text: String = bar.line().spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "F1 Help  Esc Quit");
    }
}
