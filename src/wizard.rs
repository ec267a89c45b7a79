//! Enrollment wizard step machine
//!
//! The wizard moves through its steps linearly. Moving forward is gated by
//! the guard of the step being left; moving back is always allowed (there is
//! simply nothing before the first step).
//!
//! # State Transitions
//!
//! ```text
//! Details -> Courses -> Review -> (submitted)
//! ```
//!
//! The submitted view is not a step: it is reached only through a completed
//! submission and left only by resetting the whole form.

use crate::form::EnrollmentForm;
use std::fmt;
use thiserror::Error;

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(u8)]
pub enum Step {
    /// Name, email, country, gender.
    #[default]
    Details = 1,
    /// One or more course entries.
    Courses = 2,
    /// Read-only summary with the confirm control.
    Review = 3,
}

impl Step {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 3;

    /// All steps in order.
    pub const fn all() -> &'static [Self] {
        &[Self::Details, Self::Courses, Self::Review]
    }

    /// Returns the next step, or `None` at the final step.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Details => Some(Self::Courses),
            Self::Courses => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// Returns the previous step, or `None` at the first step.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Details => None,
            Self::Courses => Some(Self::Details),
            Self::Review => Some(Self::Courses),
        }
    }

    /// Step number (1-indexed for display).
    pub const fn number(self) -> usize {
        self as usize
    }

    /// Label shown in the progress header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Details => "Student Details",
            Self::Courses => "Course Selection",
            Self::Review => "Review & Submit",
        }
    }

    /// Heading shown above the step body.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Details => "Student Details",
            Self::Courses => "Course Selection",
            Self::Review => "Review Your Information",
        }
    }

    /// Text of the forward control on this step.
    pub const fn next_label(self) -> &'static str {
        match self {
            Self::Details => "Next: Course Selection",
            Self::Courses => "Next: Review & Submit",
            Self::Review => "Confirm Enrollment",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Guard for leaving `step` in the forward direction.
///
/// - Details: every detail field filled and the email known to be free.
///   `email_blocked` is set while the email is registered or its check has
///   not finished yet.
/// - Courses: every course entry has a course selected
/// - Review: never (the way out of Review is a submission)
pub fn can_advance(step: Step, form: &EnrollmentForm, email_blocked: bool) -> bool {
    match step {
        Step::Details => form.details_filled() && !email_blocked,
        Step::Courses => form.courses_complete(),
        Step::Review => false,
    }
}

/// Reasons a step transition was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepTransitionError {
    /// The guard of the current step does not hold
    #[error("Complete {step} before continuing")]
    GuardFailed { step: Step },

    /// There is no step after the current one
    #[error("{step} is the final step")]
    FinalStep { step: Step },

    /// There is no step before the current one
    #[error("{step} is the first step")]
    FirstStep { step: Step },

    /// The email uniqueness check has not answered yet
    #[error("Still checking the email address")]
    EmailCheckPending,

    /// Only the review step can be submitted
    #[error("Cannot submit from {step}")]
    NotReviewing { step: Step },

    /// A submission is already on its way
    #[error("Submission already in progress")]
    SubmissionPending,

    /// The enrollment has been submitted; reset to start over
    #[error("Enrollment already submitted")]
    AlreadySubmitted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    fn filled_form() -> EnrollmentForm {
        let mut form = EnrollmentForm::default();
        form.name = "Ada".into();
        form.email = "a@b.com".into();
        form.country = "us".into();
        form.gender = Some(Gender::Female);
        form
    }

    #[test]
    fn test_step_order() {
        assert_eq!(Step::default(), Step::Details);
        assert_eq!(Step::Details.next(), Some(Step::Courses));
        assert_eq!(Step::Courses.next(), Some(Step::Review));
        assert_eq!(Step::Review.next(), None);
        assert_eq!(Step::Review.previous(), Some(Step::Courses));
        assert_eq!(Step::Details.previous(), None);
    }

    #[test]
    fn test_step_numbers_match_order() {
        for (i, step) in Step::all().iter().enumerate() {
            assert_eq!(step.number(), i + 1);
        }
        assert_eq!(Step::all().len(), Step::TOTAL_STEPS);
    }

    #[test]
    fn test_details_guard() {
        let form = filled_form();
        assert!(can_advance(Step::Details, &form, false));
        assert!(!can_advance(Step::Details, &form, true));

        let mut missing = form.clone();
        missing.country.clear();
        assert!(!can_advance(Step::Details, &missing, false));
    }

    #[test]
    fn test_courses_guard() {
        let mut form = filled_form();
        assert!(!can_advance(Step::Courses, &form, false));
        form.update_course_name(0, "react");
        assert!(can_advance(Step::Courses, &form, false));
        form.add_course();
        assert!(!can_advance(Step::Courses, &form, false));
    }

    #[test]
    fn test_review_never_advances() {
        let mut form = filled_form();
        form.update_course_name(0, "react");
        assert!(!can_advance(Step::Review, &form, false));
    }

    #[test]
    fn test_transition_error_display() {
        let err = StepTransitionError::GuardFailed { step: Step::Courses };
        assert_eq!(err.to_string(), "Complete Course Selection before continuing");
    }
}
