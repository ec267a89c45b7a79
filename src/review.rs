//! Review summary
//!
//! A read-only projection of the form into the labels shown on the review
//! step. Codes are resolved against the catalogs here so rendering never has
//! to.

use crate::catalog::CountryCatalog;
use crate::form::EnrollmentForm;

/// One course line of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    /// 1-indexed position in the course list
    pub position: usize,
    pub label: &'static str,
    pub duration: &'static str,
    pub fees: &'static str,
}

/// Human-readable view of a filled form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentSummary {
    pub name: String,
    pub email: String,
    pub country: &'static str,
    pub gender: &'static str,
    pub courses: Vec<CourseSummary>,
}

impl EnrollmentSummary {
    pub fn from_form(form: &EnrollmentForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            country: CountryCatalog::label(&form.country),
            gender: form.gender.map(|g| g.label()).unwrap_or(""),
            courses: form
                .courses()
                .iter()
                .enumerate()
                .map(|(i, course)| CourseSummary {
                    position: i + 1,
                    label: course.label(),
                    duration: course.duration(),
                    fees: course.fees(),
                })
                .collect(),
        }
    }

    /// Summary as `(label, value)` rows, student details first
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Country", self.country.to_string()),
            ("Gender", self.gender.to_string()),
        ]
    }
}
