//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the view being
//! shown. The same registry drives key resolution, the navigation bar, and
//! the help overlay, so the three never disagree.

use crate::app::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    FocusNext,
    FocusPrevious,
    SelectNext,
    SelectPrevious,
    Activate,
    NextStep,
    PreviousStep,
    AddCourse,
    RemoveCourse,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding
    pub fn matches(&self, event: &KeyEvent) -> bool {
        // BackTab arrives with SHIFT set on most terminals
        let modifiers = event.modifiers - KeyModifiers::SHIFT;
        self.key == event.code && self.modifiers == modifiers
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// View-specific keybindings
    view_bindings: HashMap<View, Vec<Keybinding>>,
    /// Global keybindings (available in all views)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            view_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all views
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
        ];

        let focus_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::FocusNext, "Tab", "Next control"),
            Keybinding::new(KeyCode::Down, KeyAction::FocusNext, "Down", "Next control"),
            Keybinding::new(KeyCode::BackTab, KeyAction::FocusPrevious, "S-Tab", "Previous control"),
            Keybinding::new(KeyCode::Up, KeyAction::FocusPrevious, "Up", "Previous control"),
            Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Activate"),
        ];

        // Student details
        let mut details = focus_bindings.clone();
        details.extend([
            Keybinding::new(KeyCode::Right, KeyAction::SelectNext, "Right", "Next option"),
            Keybinding::new(KeyCode::Left, KeyAction::SelectPrevious, "Left", "Previous option"),
            Keybinding::with_modifiers(
                KeyCode::Char('n'),
                KeyModifiers::CONTROL,
                KeyAction::NextStep,
                "Ctrl+N",
                "Next step",
            ),
        ]);
        self.view_bindings.insert(View::Details, details);

        // Course selection
        let mut courses = focus_bindings.clone();
        courses.extend([
            Keybinding::new(KeyCode::Right, KeyAction::SelectNext, "Right", "Next course"),
            Keybinding::new(KeyCode::Left, KeyAction::SelectPrevious, "Left", "Previous course"),
            Keybinding::with_modifiers(
                KeyCode::Char('a'),
                KeyModifiers::CONTROL,
                KeyAction::AddCourse,
                "Ctrl+A",
                "Add course",
            ),
            Keybinding::new(KeyCode::Delete, KeyAction::RemoveCourse, "Del", "Remove course"),
            Keybinding::with_modifiers(
                KeyCode::Char('d'),
                KeyModifiers::CONTROL,
                KeyAction::RemoveCourse,
                "Ctrl+D",
                "Remove course",
            ),
            Keybinding::with_modifiers(
                KeyCode::Char('n'),
                KeyModifiers::CONTROL,
                KeyAction::NextStep,
                "Ctrl+N",
                "Next step",
            ),
            Keybinding::with_modifiers(
                KeyCode::Char('b'),
                KeyModifiers::CONTROL,
                KeyAction::PreviousStep,
                "Ctrl+B",
                "Back",
            ),
        ]);
        self.view_bindings.insert(View::Courses, courses);

        // Review
        let mut review = focus_bindings.clone();
        review.extend([
            Keybinding::new(KeyCode::Right, KeyAction::FocusNext, "Right", "Next control"),
            Keybinding::new(KeyCode::Left, KeyAction::FocusPrevious, "Left", "Previous control"),
            Keybinding::with_modifiers(
                KeyCode::Char('b'),
                KeyModifiers::CONTROL,
                KeyAction::PreviousStep,
                "Ctrl+B",
                "Back",
            ),
        ]);
        self.view_bindings.insert(View::Review, review);

        // Success
        self.view_bindings.insert(
            View::Success,
            vec![Keybinding::new(
                KeyCode::Enter,
                KeyAction::Activate,
                "Enter",
                "Enroll another student",
            )],
        );
    }

    /// Get keybindings for a specific view (includes global bindings)
    pub fn get_bindings(&self, view: View) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(view_bindings) = self.view_bindings.get(&view) {
            bindings.extend(view_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key event to an action for `view`
    pub fn resolve(&self, view: View, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(view)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, view: View) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(view);

        let priority_actions = match view {
            View::Details => vec![
                KeyAction::FocusNext,
                KeyAction::SelectNext,
                KeyAction::NextStep,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            View::Courses => vec![
                KeyAction::FocusNext,
                KeyAction::SelectNext,
                KeyAction::AddCourse,
                KeyAction::RemoveCourse,
                KeyAction::NextStep,
                KeyAction::PreviousStep,
                KeyAction::Help,
            ],
            View::Review => vec![
                KeyAction::FocusNext,
                KeyAction::Activate,
                KeyAction::PreviousStep,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            View::Success => vec![KeyAction::Activate, KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            let Some(binding) = bindings.iter().find(|b| b.action == action) else {
                continue;
            };
            let item = match action {
                KeyAction::FocusNext => NavBarItem {
                    key_display: "Tab/Up/Dn".to_string(),
                    action_label: "Move".to_string(),
                },
                KeyAction::SelectNext => NavBarItem {
                    key_display: "Left/Right".to_string(),
                    action_label: "Change".to_string(),
                },
                _ => NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                },
            };
            items.push(item);
        }
        items
    }

    /// Get full help content for a view (for help overlay)
    pub fn get_help_content(&self, view: View) -> Vec<HelpSection> {
        let mut sections = Vec::new();
        let bindings = self.get_bindings(view);

        let navigation: Vec<(String, String)> = bindings
            .iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::FocusNext
                        | KeyAction::FocusPrevious
                        | KeyAction::SelectNext
                        | KeyAction::SelectPrevious
                )
            })
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();
        if !navigation.is_empty() {
            sections.push(HelpSection {
                title: "Navigation".to_string(),
                items: navigation,
            });
        }

        let actions: Vec<(String, String)> = bindings
            .iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::Activate
                        | KeyAction::NextStep
                        | KeyAction::PreviousStep
                        | KeyAction::AddCourse
                        | KeyAction::RemoveCourse
                )
            })
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();
        if !actions.is_empty() {
            sections.push(HelpSection {
                title: "Actions".to_string(),
                items: actions,
            });
        }

        sections.push(HelpSection {
            title: "General".to_string(),
            items: self
                .global_bindings
                .iter()
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect(),
        });

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_bindings_everywhere() {
        let ctx = KeybindingContext::new();
        for view in [View::Details, View::Courses, View::Review, View::Success] {
            assert_eq!(ctx.resolve(view, &key(KeyCode::F(1))), Some(KeyAction::Help));
            assert_eq!(ctx.resolve(view, &key(KeyCode::Esc)), Some(KeyAction::Quit));
        }
    }

    #[test]
    fn test_course_editing_only_on_courses_view() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(View::Courses, &ctrl('a')), Some(KeyAction::AddCourse));
        assert_eq!(ctx.resolve(View::Details, &ctrl('a')), None);
        assert_eq!(
            ctx.resolve(View::Courses, &key(KeyCode::Delete)),
            Some(KeyAction::RemoveCourse)
        );
    }

    #[test]
    fn test_plain_char_is_unbound() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(View::Details, &key(KeyCode::Char('n'))), None);
    }

    #[test]
    fn test_backtab_with_shift_matches() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(View::Details, &event), Some(KeyAction::FocusPrevious));
    }

    #[test]
    fn test_nav_items_not_empty() {
        let ctx = KeybindingContext::new();
        for view in [View::Details, View::Courses, View::Review, View::Success] {
            assert!(!ctx.get_nav_items(view).is_empty());
        }
    }

    #[test]
    fn test_help_has_general_section() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(View::Courses);
        assert!(sections.iter().any(|s| s.title == "General"));
        assert!(sections.iter().any(|s| s.title == "Actions"));
    }
}
