//! Wizard configuration
//!
//! Timing of the simulated service and the reserved email list can be
//! tuned through a JSON file. Every key is optional; missing keys fall back
//! to the defaults below.

use crate::error::{EnrollError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Longest delay accepted for either simulated operation
pub const MAX_DELAY_MS: u64 = 60_000;

/// Configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    /// Quiet period after the last email keystroke before it is checked
    pub email_check_delay_ms: u64,
    /// How long a submission stays pending
    pub submit_delay_ms: u64,
    /// Addresses the simulated service reports as already registered
    pub reserved_emails: Vec<String>,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            email_check_delay_ms: 1000,
            submit_delay_ms: 2000,
            reserved_emails: vec![
                "test@example.com".to_string(),
                "user@domain.com".to_string(),
            ],
        }
    }
}

impl EnrollmentConfig {
    pub fn email_check_delay(&self) -> Duration {
        Duration::from_millis(self.email_check_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.email_check_delay_ms > MAX_DELAY_MS {
            return Err(EnrollError::config(format!(
                "email_check_delay_ms must be at most {} (got {})",
                MAX_DELAY_MS, self.email_check_delay_ms
            )));
        }
        if self.submit_delay_ms > MAX_DELAY_MS {
            return Err(EnrollError::config(format!(
                "submit_delay_ms must be at most {} (got {})",
                MAX_DELAY_MS, self.submit_delay_ms
            )));
        }
        for email in &self.reserved_emails {
            if email.trim().is_empty() {
                return Err(EnrollError::config("reserved_emails contains an empty entry"));
            }
            if !email.contains('@') {
                return Err(EnrollError::config(format!(
                    "reserved email '{}' is not an email address",
                    email
                )));
            }
        }
        Ok(())
    }
}
