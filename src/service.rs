//! Registration service contract.
//!
//! The wizard never talks to a backend directly. Email uniqueness checks and
//! the final registration go through the `RegistrationService` trait, and the
//! service also says how long each of those operations is expected to take.
//! The wizard turns those delays into deferred actions on its own event loop,
//! so an implementation only has to answer synchronously.
//!
//! `SimulatedRegistry` is the stand-in shipped with the binary: a fixed list
//! of reserved addresses and a registration that always succeeds.

use crate::config::EnrollmentConfig;
use crate::error::Result;
use crate::form::EnrollmentForm;
use std::time::Duration;
use tracing::info;

/// Trait for the collaborator behind email checks and registration.
///
/// # Contract
///
/// - `is_email_registered()`: answered when the debounce delay has elapsed,
///   for the email the form holds at that moment.
/// - `register()`: called once per submission, after `submit_delay()`.
/// - `email_check_delay()` / `submit_delay()`: how long the wizard waits
///   before calling the methods above.
pub trait RegistrationService {
    /// Whether `email` already belongs to a registered student.
    fn is_email_registered(&self, email: &str) -> bool;

    /// Register the completed enrollment.
    fn register(&self, form: &EnrollmentForm) -> Result<()>;

    /// Quiet period after the last email keystroke before checking it.
    fn email_check_delay(&self) -> Duration;

    /// Time a submission stays pending before `register()` is called.
    fn submit_delay(&self) -> Duration;
}

/// In-memory stand-in for a registration backend
#[derive(Debug, Clone)]
pub struct SimulatedRegistry {
    reserved_emails: Vec<String>,
    email_check_delay: Duration,
    submit_delay: Duration,
}

impl Default for SimulatedRegistry {
    fn default() -> Self {
        Self::from_config(&EnrollmentConfig::default())
    }
}

impl SimulatedRegistry {
    pub fn new(
        reserved_emails: Vec<String>,
        email_check_delay: Duration,
        submit_delay: Duration,
    ) -> Self {
        Self {
            reserved_emails,
            email_check_delay,
            submit_delay,
        }
    }

    pub fn from_config(config: &EnrollmentConfig) -> Self {
        Self::new(
            config.reserved_emails.clone(),
            config.email_check_delay(),
            config.submit_delay(),
        )
    }
}

impl RegistrationService for SimulatedRegistry {
    fn is_email_registered(&self, email: &str) -> bool {
        self.reserved_emails.iter().any(|e| e == email)
    }

    fn register(&self, form: &EnrollmentForm) -> Result<()> {
        info!(
            email = %form.email,
            courses = form.courses().len(),
            "Simulated registration accepted"
        );
        Ok(())
    }

    fn email_check_delay(&self) -> Duration {
        self.email_check_delay
    }

    fn submit_delay(&self) -> Duration {
        self.submit_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reserved_emails() {
        let registry = SimulatedRegistry::default();
        assert!(registry.is_email_registered("test@example.com"));
        assert!(registry.is_email_registered("user@domain.com"));
        assert!(!registry.is_email_registered("a@b.com"));
    }

    #[test]
    fn test_match_is_exact() {
        let registry = SimulatedRegistry::default();
        assert!(!registry.is_email_registered("TEST@example.com"));
        assert!(!registry.is_email_registered(" test@example.com"));
        assert!(!registry.is_email_registered("test@example.co"));
    }

    #[test]
    fn test_default_delays() {
        let registry = SimulatedRegistry::default();
        assert_eq!(registry.email_check_delay(), Duration::from_millis(1000));
        assert_eq!(registry.submit_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_register_always_succeeds() {
        let registry = SimulatedRegistry::default();
        assert!(registry.register(&EnrollmentForm::default()).is_ok());
    }
}
