//! Enrollment form data
//!
//! The form holds exactly what the student typed or picked. Course duration
//! and fees are never stored: they are looked up in [`CourseCatalog`] from
//! the selected course code every time they are read.

use crate::catalog::CourseCatalog;
use crate::types::Gender;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_COURSE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a course entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(u64);

impl CourseId {
    /// Allocate an id never handed out before in this process
    pub fn fresh() -> Self {
        Self(NEXT_COURSE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course-{}", self.0)
    }
}

/// One course entry in the course selection step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSelection {
    pub id: CourseId,
    /// Catalog code, empty while nothing is selected
    pub name: String,
}

impl CourseSelection {
    /// A fresh entry with nothing selected
    pub fn empty() -> Self {
        Self {
            id: CourseId::fresh(),
            name: String::new(),
        }
    }

    pub fn duration(&self) -> &'static str {
        CourseCatalog::duration(&self.name)
    }

    pub fn fees(&self) -> &'static str {
        CourseCatalog::fees(&self.name)
    }

    pub fn label(&self) -> &'static str {
        CourseCatalog::label(&self.name)
    }

    /// Whether name, duration, and fees are all present
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.duration().is_empty() && !self.fees().is_empty()
    }
}

/// Everything the student enters across the wizard.
///
/// `courses` is never empty: it starts with one blank entry and
/// [`EnrollmentForm::remove_course`] refuses to remove the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentForm {
    pub name: String,
    pub email: String,
    /// Country catalog code, empty while nothing is selected
    pub country: String,
    pub gender: Option<Gender>,
    courses: Vec<CourseSelection>,
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            country: String::new(),
            gender: None,
            courses: vec![CourseSelection::empty()],
        }
    }
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[CourseSelection] {
        &self.courses
    }

    /// Append a blank course entry and return its index
    pub fn add_course(&mut self) -> usize {
        self.courses.push(CourseSelection::empty());
        self.courses.len() - 1
    }

    /// Remove the course at `index`.
    ///
    /// Returns `false` without touching the list when `index` is out of
    /// range or it is the only entry left.
    pub fn remove_course(&mut self, index: usize) -> bool {
        if self.courses.len() <= 1 || index >= self.courses.len() {
            return false;
        }
        self.courses.remove(index);
        true
    }

    /// Set the selected course code of the entry at `index`.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn update_course_name(&mut self, index: usize, code: impl Into<String>) -> bool {
        match self.courses.get_mut(index) {
            Some(course) => {
                course.name = code.into();
                true
            }
            None => false,
        }
    }

    /// Move the entry at `index` to the next/previous catalog option
    pub fn cycle_course(&mut self, index: usize, forward: bool) -> bool {
        let Some(current) = self.courses.get(index).map(|c| c.name.clone()) else {
            return false;
        };
        self.update_course_name(index, CourseCatalog::cycle(&current, forward))
    }

    /// Whether every student detail field has a value
    pub fn details_filled(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.country.is_empty()
            && self.gender.is_some()
    }

    /// Whether every course entry has a course selected
    pub fn courses_complete(&self) -> bool {
        self.courses.iter().all(CourseSelection::is_complete)
    }
}
