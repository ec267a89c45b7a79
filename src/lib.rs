//! Course Enrollment TUI Library
//!
//! A multi-step enrollment wizard: student details, course selection, review
//! and submit, with a debounced email-uniqueness check against a pluggable
//! registration service.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod review;
pub mod scheduler;
pub mod service;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, AppState, Completion, EnrollmentState, View};
pub use catalog::{CountryCatalog, CourseCatalog};
pub use config::EnrollmentConfig;
pub use error::{EnrollError, Result};
pub use form::{CourseId, CourseSelection, EnrollmentForm};
pub use review::{CourseSummary, EnrollmentSummary};
pub use service::{RegistrationService, SimulatedRegistry};
pub use types::Gender;
pub use wizard::{Step, StepTransitionError};
