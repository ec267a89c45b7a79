//! Application state definitions
//!
//! `EnrollmentState` is the single form-state store: current step, field
//! values, derived flags, and the two deferred actions (email check and
//! submission). `AppState` wraps it with the purely presentational bits the
//! terminal needs (focus, status line, help overlay).

use crate::catalog::CountryCatalog;
use crate::form::EnrollmentForm;
use crate::input::FocusTarget;
use crate::scheduler::{Debouncer, Deferred};
use crate::service::RegistrationService;
use crate::types::Gender;
use crate::wizard::{self, Step, StepTransitionError};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Which view the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Details,
    Courses,
    Review,
    Success,
}

/// Something that finished during [`EnrollmentState::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The debounced check of `email` ran
    EmailChecked { email: String, exists: bool },
    /// The pending submission was registered
    Submitted,
    /// The registration service rejected the submission
    SubmitFailed(String),
}

/// Form-state store for the enrollment wizard
pub struct EnrollmentState {
    form: EnrollmentForm,
    step: Step,
    email_exists: bool,
    submitted: bool,
    email_check: Debouncer<String>,
    pending_submit: Option<Deferred<()>>,
    service: Box<dyn RegistrationService>,
}

impl EnrollmentState {
    pub fn new(service: Box<dyn RegistrationService>) -> Self {
        Self {
            form: EnrollmentForm::default(),
            step: Step::default(),
            email_exists: false,
            submitted: false,
            email_check: Debouncer::new(),
            pending_submit: None,
            service,
        }
    }

    pub fn form(&self) -> &EnrollmentForm {
        &self.form
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn email_exists(&self) -> bool {
        self.email_exists
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submit.is_some()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn email_check_pending(&self) -> bool {
        self.email_check.is_pending()
    }

    pub fn view(&self) -> View {
        if self.submitted {
            return View::Success;
        }
        match self.step {
            Step::Details => View::Details,
            Step::Courses => View::Courses,
            Step::Review => View::Review,
        }
    }

    // ------------------------------------------------------------------
    // Student details
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
    }

    /// Update the email and re-arm the uniqueness check.
    ///
    /// Any pending check is dropped. A non-empty value schedules a new one
    /// after the service's check delay; an empty value schedules nothing and
    /// leaves `email_exists` as it was.
    pub fn set_email(&mut self, value: impl Into<String>, now: Instant) {
        let value = value.into();
        if value == self.form.email {
            return;
        }
        self.form.email = value;
        self.email_check.cancel();
        if !self.form.email.is_empty() {
            let generation = self.email_check.schedule(
                self.form.email.clone(),
                now,
                self.service.email_check_delay(),
            );
            debug!(generation, "Email check scheduled");
        }
    }

    /// Select a country by catalog code. Unknown codes are ignored.
    pub fn set_country(&mut self, code: &str) -> bool {
        match CountryCatalog::find(code) {
            Some(option) => {
                self.form.country = option.code.to_string();
                true
            }
            None => false,
        }
    }

    pub fn cycle_country(&mut self, forward: bool) {
        self.form.country = CountryCatalog::cycle(&self.form.country, forward).to_string();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.form.gender = Some(gender);
    }

    pub fn cycle_gender(&mut self, forward: bool) {
        self.form.gender = Some(Gender::cycle(self.form.gender, forward));
    }

    // ------------------------------------------------------------------
    // Course list
    // ------------------------------------------------------------------

    pub fn add_course(&mut self) -> usize {
        let index = self.form.add_course();
        debug!(index, "Course entry added");
        index
    }

    pub fn remove_course(&mut self, index: usize) -> bool {
        let removed = self.form.remove_course(index);
        if removed {
            debug!(index, "Course entry removed");
        }
        removed
    }

    pub fn update_course_name(&mut self, index: usize, code: &str) -> bool {
        self.form.update_course_name(index, code)
    }

    pub fn cycle_course(&mut self, index: usize, forward: bool) -> bool {
        self.form.cycle_course(index, forward)
    }

    // ------------------------------------------------------------------
    // Step transitions
    // ------------------------------------------------------------------

    // A registered email and one still being checked both hold Details back.
    fn email_blocked(&self) -> bool {
        self.email_exists || self.email_check.is_pending()
    }

    /// Whether the forward control of the current step is enabled
    pub fn can_go_next(&self) -> bool {
        !self.submitted && wizard::can_advance(self.step, &self.form, self.email_blocked())
    }

    /// Advance to the next step if the current step's guard holds
    pub fn next_step(&mut self) -> Result<Step, StepTransitionError> {
        if self.submitted {
            return Err(StepTransitionError::AlreadySubmitted);
        }
        let Some(next) = self.step.next() else {
            return Err(StepTransitionError::FinalStep { step: self.step });
        };
        if !wizard::can_advance(self.step, &self.form, self.email_blocked()) {
            if self.step == Step::Details
                && !self.email_exists
                && self.email_check.is_pending()
                && self.form.details_filled()
            {
                return Err(StepTransitionError::EmailCheckPending);
            }
            return Err(StepTransitionError::GuardFailed { step: self.step });
        }
        info!(from = %self.step, to = %next, "Step advanced");
        self.step = next;
        Ok(next)
    }

    /// Go back one step; no guard applies
    pub fn previous_step(&mut self) -> Result<Step, StepTransitionError> {
        if self.submitted {
            return Err(StepTransitionError::AlreadySubmitted);
        }
        let Some(previous) = self.step.previous() else {
            return Err(StepTransitionError::FirstStep { step: self.step });
        };
        info!(from = %self.step, to = %previous, "Step went back");
        self.step = previous;
        Ok(previous)
    }

    /// Whether the confirm control is enabled
    pub fn can_submit(&self) -> bool {
        self.step == Step::Review && !self.submitted && !self.is_submitting()
    }

    /// Start the submission; it completes on a later [`tick`](Self::tick)
    pub fn submit(&mut self, now: Instant) -> Result<(), StepTransitionError> {
        if self.submitted {
            return Err(StepTransitionError::AlreadySubmitted);
        }
        if self.is_submitting() {
            return Err(StepTransitionError::SubmissionPending);
        }
        if self.step != Step::Review {
            return Err(StepTransitionError::NotReviewing { step: self.step });
        }
        self.pending_submit = Some(Deferred::new((), now, self.service.submit_delay()));
        info!(courses = self.form.courses().len(), "Submission started");
        Ok(())
    }

    /// Run every deferred action that is due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<Completion> {
        let mut completed = Vec::new();

        if let Some(email) = self.email_check.poll(now) {
            // A pending check is always dropped when the field changes,
            // so the payload still matches the field here.
            let exists = self.service.is_email_registered(&email);
            self.email_exists = exists;
            debug!(exists, "Email check finished");
            completed.push(Completion::EmailChecked { email, exists });
        }

        if self.pending_submit.as_ref().is_some_and(|d| d.is_due(now)) {
            self.pending_submit = None;
            match self.service.register(&self.form) {
                Ok(()) => {
                    self.submitted = true;
                    info!("Enrollment submitted");
                    completed.push(Completion::Submitted);
                }
                Err(e) => {
                    warn!(error = %e, "Enrollment submission failed");
                    completed.push(Completion::SubmitFailed(e.to_string()));
                }
            }
        }

        completed
    }

    /// Clear the form and return to the first step
    pub fn reset(&mut self) {
        self.form = EnrollmentForm::default();
        self.step = Step::Details;
        self.email_exists = false;
        self.submitted = false;
        self.email_check.cancel();
        self.pending_submit = None;
        info!("Form reset");
    }
}

/// Main application state
pub struct AppState {
    /// The enrollment form and wizard
    pub enrollment: EnrollmentState,
    /// Control that receives key input
    pub focus: FocusTarget,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    pub fn new(service: Box<dyn RegistrationService>) -> Self {
        Self {
            enrollment: EnrollmentState::new(service),
            focus: FocusTarget::Name,
            status_message: "Welcome to Online Course Enrollment".to_string(),
            help_visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::SimulatedRegistry;
    use std::time::Duration;

    fn state() -> EnrollmentState {
        EnrollmentState::new(Box::new(SimulatedRegistry::default()))
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.step(), Step::Details);
        assert_eq!(s.view(), View::Details);
        assert!(!s.email_exists());
        assert!(!s.is_submitting());
        assert!(!s.is_submitted());
        assert_eq!(s.form().courses().len(), 1);
    }

    #[test]
    fn test_set_country_rejects_unknown_code() {
        let mut s = state();
        assert!(!s.set_country("xx"));
        assert!(s.form().country.is_empty());
        assert!(s.set_country("de"));
        assert_eq!(s.form().country, "de");
    }

    #[test]
    fn test_previous_from_details_is_refused() {
        let mut s = state();
        assert_eq!(
            s.previous_step(),
            Err(StepTransitionError::FirstStep { step: Step::Details })
        );
        assert_eq!(s.step(), Step::Details);
    }

    #[test]
    fn test_submit_outside_review_is_refused() {
        let mut s = state();
        assert_eq!(
            s.submit(Instant::now()),
            Err(StepTransitionError::NotReviewing { step: Step::Details })
        );
        assert!(!s.is_submitting());
    }

    #[test]
    fn test_clearing_email_cancels_pending_check() {
        let start = Instant::now();
        let mut s = state();
        s.set_email("test@example.com", start);
        assert!(s.email_check_pending());
        s.set_email("", start + Duration::from_millis(10));
        assert!(!s.email_check_pending());
        assert!(s.tick(start + Duration::from_secs(5)).is_empty());
        assert!(!s.email_exists());
    }

    #[test]
    fn test_same_email_does_not_rearm() {
        let start = Instant::now();
        let mut s = state();
        s.set_email("a@b.com", start);
        s.set_email("a@b.com", start + Duration::from_millis(900));
        let done = s.tick(start + Duration::from_millis(1000));
        assert_eq!(done.len(), 1);
    }

    #[test]
    fn test_next_waits_for_email_check() {
        let start = Instant::now();
        let mut s = state();
        s.set_name("Ada");
        s.set_email("test@example.com", start);
        s.set_country("us");
        s.set_gender(Gender::Male);

        assert!(!s.can_go_next());
        assert_eq!(s.next_step(), Err(StepTransitionError::EmailCheckPending));
        assert_eq!(s.step(), Step::Details);

        s.tick(start + Duration::from_millis(1000));
        assert!(s.email_exists());
        assert_eq!(
            s.next_step(),
            Err(StepTransitionError::GuardFailed { step: Step::Details })
        );
        assert_eq!(s.step(), Step::Details);
    }

    #[test]
    fn test_app_state_defaults() {
        let app = AppState::new(Box::new(SimulatedRegistry::default()));
        assert_eq!(app.focus, FocusTarget::Name);
        assert!(!app.help_visible);
        assert!(app.status_message.contains("Welcome"));
    }
}
