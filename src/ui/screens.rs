//! Enrollment wizard screens.
//!
//! One render function per view:
//! - `Details` - name, email, country, gender
//! - `Courses` - course entries with read-only duration and fees
//! - `Review` - summary with the confirm control
//! - `Success` - confirmation with the reset control
//!
//! Controls whose guard does not hold are drawn disabled; they still take
//! focus so the status line can say why they refuse.

use crate::app::AppState;
use crate::catalog::{CountryCatalog, CourseCatalog};
use crate::input::FocusTarget;
use crate::review::EnrollmentSummary;
use crate::theme::{Styles, Theme};
use crate::types::Gender;
use crate::wizard::Step;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

pub const EMAIL_TAKEN_MESSAGE: &str = "This email is already registered";
pub const SUCCESS_TITLE: &str = "Enrollment Successful!";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for enrolling in our courses. You will receive a confirmation email shortly.";

/// Lines each course entry occupies on the course screen
const COURSE_BLOCK_LINES: u16 = 4;

/// A `[ label ]` button span
pub fn button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    Span::styled(format!("[ {} ]", label), Theme::button_style(focused, enabled))
}

/// `◀ label ▶` for a cycle-select; placeholder text is muted
fn select_line(label: &str, has_value: bool, focused: bool) -> Line<'static> {
    let value_style = if has_value {
        Styles::text()
    } else {
        Styles::text_muted()
    };
    let arrow_style = if focused {
        Styles::focused()
    } else {
        Styles::text_muted()
    };
    Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(label.to_string(), value_style),
        Span::styled(" ▶", arrow_style),
    ])
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::field_border(focused))
        .title(Span::styled(format!(" {} ", title), Styles::label()))
}

fn render_text_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    invalid: bool,
) {
    let mut spans = if value.is_empty() {
        vec![Span::styled(placeholder.to_string(), Styles::text_muted())]
    } else {
        vec![Span::styled(value.to_string(), Styles::text())]
    };
    if focused {
        spans.push(Span::styled("▏", Styles::focused()));
    }
    let mut block = field_block(title, focused);
    if invalid {
        block = block.border_style(Styles::error());
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_button_row(f: &mut Frame, area: Rect, buttons: Vec<Span<'static>>) {
    let mut spans = Vec::new();
    for (i, b) in buttons.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(b);
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_step_title(f: &mut Frame, area: Rect, step: Step) {
    let title = Paragraph::new(step.title())
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

// ============================================================================
// Student Details
// ============================================================================

/// Render the student details step
pub fn render_details_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let enrollment = &state.enrollment;
    let form = enrollment.form();
    let focus = state.focus;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email hint
            Constraint::Length(3), // Country
            Constraint::Length(3), // Gender
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Next
            Constraint::Min(0),
        ])
        .split(area);

    render_step_title(f, chunks[0], Step::Details);

    render_text_field(
        f,
        chunks[1],
        "Full Name *",
        &form.name,
        "Enter your full name",
        focus == FocusTarget::Name,
        false,
    );
    render_text_field(
        f,
        chunks[2],
        "Email Address *",
        &form.email,
        "Enter your email",
        focus == FocusTarget::Email,
        enrollment.email_exists(),
    );

    let hint = if enrollment.email_exists() {
        Line::from(Span::styled(format!(" {}", EMAIL_TAKEN_MESSAGE), Styles::error()))
    } else if enrollment.email_check_pending() {
        Line::from(Span::styled(" Checking email...", Styles::warning()))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(hint), chunks[3]);

    let country = CountryCatalog::label(&form.country);
    let country_focused = focus == FocusTarget::Country;
    f.render_widget(
        Paragraph::new(select_line(country, !form.country.is_empty(), country_focused))
            .block(field_block("Country *", country_focused)),
        chunks[4],
    );

    let gender_focused = focus == FocusTarget::Gender;
    let mut radios = Vec::new();
    for gender in Gender::iter() {
        let checked = form.gender == Some(gender);
        let mark = if checked { "(•)" } else { "( )" };
        let style = if checked {
            Styles::text().add_modifier(Modifier::BOLD)
        } else {
            Styles::text_secondary()
        };
        radios.push(Span::styled(format!("{} {}   ", mark, gender.label()), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(radios)).block(field_block("Gender *", gender_focused)),
        chunks[5],
    );

    render_button_row(
        f,
        chunks[7],
        vec![button(
            Step::Details.next_label(),
            focus == FocusTarget::Next,
            enrollment.can_go_next(),
        )],
    );
}

// ============================================================================
// Course Selection
// ============================================================================

/// Lines describing one course entry
pub fn course_lines(
    index: usize,
    code: &str,
    focused: bool,
    removable: bool,
) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        format!("Course {}", index + 1),
        if focused { Styles::focused() } else { Styles::label() },
    )];
    if removable {
        header.push(Span::styled("   [Del] Remove", Styles::text_muted()));
    }

    let mut name = vec![Span::styled("  Course Name *  ", Styles::text_secondary())];
    name.extend(select_line(CourseCatalog::label(code), !code.is_empty(), focused).spans);

    let details = if code.is_empty() {
        Line::from("")
    } else {
        Line::from(vec![
            Span::styled("  Duration  ", Styles::text_secondary()),
            Span::styled(CourseCatalog::duration(code).to_string(), Styles::text()),
            Span::styled("    Fees  ", Styles::text_secondary()),
            Span::styled(CourseCatalog::fees(code).to_string(), Styles::text()),
        ])
    };

    vec![Line::from(header), Line::from(name), details, Line::from("")]
}

/// Rows to scroll so course entry `index` ends inside `visible` rows
fn course_scroll(index: usize, visible: u16) -> u16 {
    let bottom = u16::try_from(index + 1)
        .unwrap_or(u16::MAX)
        .saturating_mul(COURSE_BLOCK_LINES);
    bottom.saturating_sub(visible)
}

/// Render the course selection step
pub fn render_courses_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let enrollment = &state.enrollment;
    let courses = enrollment.form().courses();
    let focus = state.focus;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(4),    // Course list
            Constraint::Length(1), // Add course
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Back / Next
        ])
        .split(area);

    render_step_title(f, chunks[0], Step::Courses);

    let removable = courses.len() > 1;
    let mut lines = Vec::new();
    for (i, course) in courses.iter().enumerate() {
        lines.extend(course_lines(
            i,
            &course.name,
            focus == FocusTarget::Course(i),
            removable,
        ));
    }

    // Keep the focused entry in view
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_inactive());
    let visible = list_block.inner(chunks[1]).height;
    let scroll = match focus {
        FocusTarget::Course(i) => course_scroll(i, visible),
        _ => 0,
    };
    f.render_widget(
        Paragraph::new(lines).block(list_block).scroll((scroll, 0)),
        chunks[1],
    );

    render_button_row(
        f,
        chunks[2],
        vec![button("+ Add Another Course", focus == FocusTarget::AddCourse, true)],
    );
    render_button_row(
        f,
        chunks[4],
        vec![
            button("Back", focus == FocusTarget::Back, true),
            button(
                Step::Courses.next_label(),
                focus == FocusTarget::Next,
                enrollment.can_go_next(),
            ),
        ],
    );
}

// ============================================================================
// Review & Submit
// ============================================================================

/// Lines of the review summary
pub fn review_lines(summary: &EnrollmentSummary) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Student Details", Styles::label()))];
    for (label, value) in summary.detail_rows() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", label), Styles::text().add_modifier(Modifier::BOLD)),
            Span::styled(value, Styles::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Selected Courses", Styles::label())));
    for course in &summary.courses {
        lines.push(Line::from(Span::styled(
            format!("  Course {}", course.position),
            Styles::focused(),
        )));
        for (label, value) in [
            ("Course", course.label),
            ("Duration", course.duration),
            ("Fees", course.fees),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("    {}: ", label), Styles::text().add_modifier(Modifier::BOLD)),
                Span::styled(value.to_string(), Styles::text()),
            ]));
        }
    }
    lines
}

/// Render the review step
pub fn render_review_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let enrollment = &state.enrollment;
    let focus = state.focus;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(4),    // Summary
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Back / Confirm
        ])
        .split(area);

    render_step_title(f, chunks[0], Step::Review);

    let summary = EnrollmentSummary::from_form(enrollment.form());
    f.render_widget(
        Paragraph::new(review_lines(&summary))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_inactive()),
            )
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    let confirm_label = if enrollment.is_submitting() {
        "Submitting..."
    } else {
        Step::Review.next_label()
    };
    render_button_row(
        f,
        chunks[3],
        vec![
            button("Back", focus == FocusTarget::Back, true),
            button(
                confirm_label,
                focus == FocusTarget::Confirm,
                enrollment.can_submit(),
            ),
        ],
    );
}

// ============================================================================
// Success
// ============================================================================

/// Render the success view
pub fn render_success_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓",
            Styles::success().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SUCCESS_TITLE, Styles::success().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(SUCCESS_MESSAGE, Styles::text())),
        Line::from(""),
        Line::from(button(
            "Enroll Another Student",
            state.focus == FocusTarget::EnrollAnother,
            true,
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
