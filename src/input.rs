//! Input handling module
//!
//! Turns key events into form operations. Every view has a focus ring (the
//! ordered list of controls Tab walks through); printable characters go to
//! the focused text field, everything else is resolved through the
//! keybinding registry.

use crate::app::{AppState, EnrollmentState, View};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::debug;

/// A control that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Name,
    Email,
    Country,
    Gender,
    /// Course entry at this index
    Course(usize),
    AddCourse,
    Back,
    Next,
    Confirm,
    EnrollAnother,
}

impl FocusTarget {
    /// Whether typed characters edit this control
    pub fn is_text_field(&self) -> bool {
        matches!(self, Self::Name | Self::Email)
    }
}

/// Controls of the current view in Tab order
pub fn focus_ring(state: &EnrollmentState) -> Vec<FocusTarget> {
    match state.view() {
        View::Details => vec![
            FocusTarget::Name,
            FocusTarget::Email,
            FocusTarget::Country,
            FocusTarget::Gender,
            FocusTarget::Next,
        ],
        View::Courses => {
            let mut ring: Vec<FocusTarget> = (0..state.form().courses().len())
                .map(FocusTarget::Course)
                .collect();
            ring.extend([FocusTarget::AddCourse, FocusTarget::Back, FocusTarget::Next]);
            ring
        }
        View::Review => vec![FocusTarget::Back, FocusTarget::Confirm],
        View::Success => vec![FocusTarget::EnrollAnother],
    }
}

/// Outcome of handling one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Key event dispatcher
pub struct InputHandler {
    keybindings: KeybindingContext,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            keybindings: KeybindingContext::new(),
        }
    }

    pub fn keybindings(&self) -> &KeybindingContext {
        &self.keybindings
    }

    /// Handle one key event against the application state
    pub fn handle_key(&self, state: &mut AppState, key: KeyEvent, now: Instant) -> InputResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputResult::Quit;
        }

        if state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                state.help_visible = false;
            }
            return InputResult::Continue;
        }

        if state.focus.is_text_field() && Self::edit_text(state, &key, now) {
            return InputResult::Continue;
        }

        let view = state.enrollment.view();
        let Some(action) = self.keybindings.resolve(view, &key) else {
            return InputResult::Continue;
        };
        debug!(?action, ?view, "Key action");

        let result = Self::apply(state, action, now);
        normalize_focus(state);
        result
    }

    // Returns whether the key was consumed as a text edit.
    fn edit_text(state: &mut AppState, key: &KeyEvent, now: Instant) -> bool {
        let target = state.focus;
        let mut value = match target {
            FocusTarget::Name => state.enrollment.form().name.clone(),
            FocusTarget::Email => state.enrollment.form().email.clone(),
            _ => return false,
        };
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                value.push(c);
            }
            KeyCode::Backspace => {
                value.pop();
            }
            _ => return false,
        }
        match target {
            FocusTarget::Name => state.enrollment.set_name(value),
            _ => state.enrollment.set_email(value, now),
        }
        true
    }

    fn apply(state: &mut AppState, action: KeyAction, now: Instant) -> InputResult {
        match action {
            KeyAction::Quit => return InputResult::Quit,
            KeyAction::Help => state.help_visible = true,
            KeyAction::FocusNext => move_focus(state, true),
            KeyAction::FocusPrevious => move_focus(state, false),
            KeyAction::SelectNext => Self::change_selection(state, true),
            KeyAction::SelectPrevious => Self::change_selection(state, false),
            KeyAction::Activate => Self::activate(state, now),
            KeyAction::NextStep => Self::next_step(state),
            KeyAction::PreviousStep => Self::previous_step(state),
            KeyAction::AddCourse => {
                let index = state.enrollment.add_course();
                state.focus = FocusTarget::Course(index);
            }
            KeyAction::RemoveCourse => match state.focus {
                FocusTarget::Course(index) => {
                    if !state.enrollment.remove_course(index) {
                        state.status_message = "At least one course is required".to_string();
                    }
                }
                _ => {
                    state.status_message = "Move to a course entry to remove it".to_string();
                }
            },
        }
        InputResult::Continue
    }

    fn change_selection(state: &mut AppState, forward: bool) {
        match state.focus {
            FocusTarget::Country => state.enrollment.cycle_country(forward),
            FocusTarget::Gender => state.enrollment.cycle_gender(forward),
            FocusTarget::Course(index) => {
                state.enrollment.cycle_course(index, forward);
            }
            FocusTarget::Back | FocusTarget::Next | FocusTarget::AddCourse => {
                move_focus(state, forward)
            }
            _ => {}
        }
    }

    fn activate(state: &mut AppState, now: Instant) {
        match state.focus {
            FocusTarget::Name
            | FocusTarget::Email
            | FocusTarget::Country
            | FocusTarget::Gender
            | FocusTarget::Course(_) => move_focus(state, true),
            FocusTarget::AddCourse => {
                let index = state.enrollment.add_course();
                state.focus = FocusTarget::Course(index);
            }
            FocusTarget::Back => Self::previous_step(state),
            FocusTarget::Next => Self::next_step(state),
            FocusTarget::Confirm => match state.enrollment.submit(now) {
                Ok(()) => state.status_message = "Submitting...".to_string(),
                Err(e) => state.status_message = e.to_string(),
            },
            FocusTarget::EnrollAnother => {
                state.enrollment.reset();
                state.focus = FocusTarget::Name;
                state.status_message = "Ready for a new enrollment".to_string();
            }
        }
    }

    fn next_step(state: &mut AppState) {
        match state.enrollment.next_step() {
            Ok(step) => {
                state.status_message = step.title().to_string();
                focus_first(state);
            }
            Err(e) => state.status_message = e.to_string(),
        }
    }

    fn previous_step(state: &mut AppState) {
        match state.enrollment.previous_step() {
            Ok(step) => {
                state.status_message = step.title().to_string();
                focus_first(state);
            }
            Err(e) => state.status_message = e.to_string(),
        }
    }
}

fn focus_first(state: &mut AppState) {
    if let Some(first) = focus_ring(&state.enrollment).first() {
        state.focus = *first;
    }
}

fn move_focus(state: &mut AppState, forward: bool) {
    let ring = focus_ring(&state.enrollment);
    if ring.is_empty() {
        return;
    }
    let len = ring.len();
    let next = match ring.iter().position(|t| *t == state.focus) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    state.focus = ring[next];
}

/// Keep focus on a control that exists in the current view.
///
/// A removed course entry hands focus to the entry now at its place (or the
/// last one); anything else falls back to the first control.
pub fn normalize_focus(state: &mut AppState) {
    let ring = focus_ring(&state.enrollment);
    if ring.contains(&state.focus) {
        return;
    }
    let courses = state.enrollment.form().courses().len();
    state.focus = match state.focus {
        FocusTarget::Course(_) if state.enrollment.view() == View::Courses => {
            FocusTarget::Course(courses.saturating_sub(1))
        }
        _ => ring.first().copied().unwrap_or(FocusTarget::Name),
    };
}
