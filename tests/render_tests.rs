//! Rendering and keyboard tests
//!
//! Drive the full application with key events and draw every frame into a
//! `TestBackend`, then look for the texts a student would see.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use enrollment_tui::app::{App, View};
use enrollment_tui::service::SimulatedRegistry;
use enrollment_tui::ui::APP_TITLE;
use enrollment_tui::ui::screens::{EMAIL_TAKEN_MESSAGE, SUCCESS_MESSAGE, SUCCESS_TITLE};
use ratatui::{Terminal, backend::TestBackend};
use std::time::{Duration, Instant};

fn instant_app() -> App {
    let registry = SimulatedRegistry::new(
        vec!["test@example.com".to_string()],
        Duration::ZERO,
        Duration::ZERO,
    );
    App::new(Box::new(registry))
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(110, 40)).unwrap()
}

fn screen(app: &App, terminal: &mut Terminal<TestBackend>) -> String {
    app.draw(terminal).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode, now: Instant) -> bool {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), now)
}

fn ctrl(app: &mut App, c: char, now: Instant) {
    app.handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        now,
    );
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), now);
    }
}

/// Fill the details step from the keyboard: name, email, country, gender
fn fill_details(app: &mut App, email: &str, now: Instant) {
    type_text(app, "Ada Lovelace", now);
    press(app, KeyCode::Tab, now);
    type_text(app, email, now);
    press(app, KeyCode::Tab, now);
    press(app, KeyCode::Right, now);
    press(app, KeyCode::Tab, now);
    press(app, KeyCode::Right, now);
    app.tick(now);
}

#[test]
fn test_first_frame_shows_details_step() {
    let app = instant_app();
    let mut terminal = terminal();
    let text = screen(&app, &mut terminal);

    assert!(text.contains(APP_TITLE));
    assert!(text.contains("(1) Student Details"));
    assert!(text.contains("(3) Review & Submit"));
    assert!(text.contains("Full Name *"));
    assert!(text.contains("Enter your email"));
    assert!(text.contains("Select Country"));
    assert!(text.contains("[ Next: Course Selection ]"));
    assert!(text.contains("Welcome to Online Course Enrollment"));
}

#[test]
fn test_reserved_email_message_is_drawn() {
    let now = Instant::now();
    let mut app = instant_app();
    let mut terminal = terminal();
    fill_details(&mut app, "test@example.com", now);

    assert!(app.state().enrollment.email_exists());
    let text = screen(&app, &mut terminal);
    assert!(text.contains(EMAIL_TAKEN_MESSAGE));

    // Next refuses and the status line says why
    ctrl(&mut app, 'n', now);
    assert_eq!(app.state().enrollment.view(), View::Details);
    assert!(app.state().status_message.contains("Complete Student Details"));
}

#[test]
fn test_next_refused_while_email_is_checked() {
    let start = Instant::now();
    let mut app = App::new(Box::new(SimulatedRegistry::default()));
    let mut terminal = terminal();
    type_text(&mut app, "Ada", start);
    press(&mut app, KeyCode::Tab, start);
    type_text(&mut app, "test@example.com", start);
    press(&mut app, KeyCode::Tab, start);
    press(&mut app, KeyCode::Right, start);
    press(&mut app, KeyCode::Tab, start);
    press(&mut app, KeyCode::Right, start);

    let text = screen(&app, &mut terminal);
    assert!(text.contains("Checking email..."));

    ctrl(&mut app, 'n', start + Duration::from_millis(200));
    assert_eq!(app.state().enrollment.view(), View::Details);
    assert!(app.state().status_message.contains("Still checking"));

    app.tick(start + Duration::from_millis(1000));
    ctrl(&mut app, 'n', start + Duration::from_millis(1100));
    assert_eq!(app.state().enrollment.view(), View::Details);
    assert!(app.state().enrollment.email_exists());
}

#[test]
fn test_keyboard_enrollment_reaches_success() {
    let now = Instant::now();
    let mut app = instant_app();
    let mut terminal = terminal();
    fill_details(&mut app, "ada@example.com", now);
    assert_eq!(app.state().enrollment.form().country, "us");

    ctrl(&mut app, 'n', now);
    assert_eq!(app.state().enrollment.view(), View::Courses);

    // First entry: React; second entry: Python
    press(&mut app, KeyCode::Right, now);
    ctrl(&mut app, 'a', now);
    for _ in 0..3 {
        press(&mut app, KeyCode::Right, now);
    }
    let text = screen(&app, &mut terminal);
    assert!(text.contains("Course Selection"));
    assert!(text.contains("React Mastery"));
    assert!(text.contains("Python for Beginners"));
    assert!(text.contains("10 weeks"));
    assert!(text.contains("$249"));

    ctrl(&mut app, 'n', now);
    assert_eq!(app.state().enrollment.view(), View::Review);
    let text = screen(&app, &mut terminal);
    assert!(text.contains("Review Your Information"));
    assert!(text.contains("Ada Lovelace"));
    assert!(text.contains("United States"));
    assert!(text.contains("Male"));
    assert!(text.contains("Course 2"));
    assert!(text.contains("[ Confirm Enrollment ]"));

    // Back -> Confirm, then activate
    press(&mut app, KeyCode::Right, now);
    press(&mut app, KeyCode::Enter, now);
    assert!(app.state().enrollment.is_submitting());
    let text = screen(&app, &mut terminal);
    assert!(text.contains("[ Submitting... ]"));

    app.tick(now);
    assert_eq!(app.state().enrollment.view(), View::Success);
    let text = screen(&app, &mut terminal);
    assert!(text.contains(SUCCESS_TITLE));
    assert!(text.contains(&SUCCESS_MESSAGE[..30]));
    assert!(text.contains("Enroll Another Student"));

    press(&mut app, KeyCode::Enter, now);
    assert_eq!(app.state().enrollment.view(), View::Details);
    assert!(app.state().enrollment.form().name.is_empty());
}

#[test]
fn test_last_course_cannot_be_removed() {
    let now = Instant::now();
    let mut app = instant_app();
    fill_details(&mut app, "ada@example.com", now);
    ctrl(&mut app, 'n', now);

    press(&mut app, KeyCode::Delete, now);
    assert_eq!(app.state().enrollment.form().courses().len(), 1);
    assert!(app.state().status_message.contains("At least one course"));

    ctrl(&mut app, 'a', now);
    press(&mut app, KeyCode::Delete, now);
    assert_eq!(app.state().enrollment.form().courses().len(), 1);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let now = Instant::now();
    let mut app = instant_app();
    let mut terminal = terminal();

    press(&mut app, KeyCode::F(1), now);
    assert!(app.state().help_visible);
    let text = screen(&app, &mut terminal);
    assert!(text.contains("Course Enrollment Help"));

    // Typing while help is open does not reach the name field
    type_text(&mut app, "zz", now);
    assert!(app.state().enrollment.form().name.is_empty());

    assert!(!press(&mut app, KeyCode::Esc, now));
    assert!(!app.state().help_visible);
    assert!(press(&mut app, KeyCode::Esc, now));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = instant_app();
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    app.draw(&mut terminal).unwrap();
}
