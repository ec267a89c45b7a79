//! Type-safe form value types
//!
//! Fixed-choice form fields are Rust enums rather than free strings so the
//! UI can only ever produce values the catalogs and guards understand.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Student gender, chosen with a three-way radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Label shown next to the radio button and in the review summary
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Step through the radio group, wrapping at either end.
    ///
    /// With nothing selected, moving forward picks the first option and
    /// moving backward picks the last.
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let len = all.len();
        let next = match current.and_then(|g| all.iter().position(|x| *x == g)) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        all[next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes_are_lowercase() {
        assert_eq!(Gender::Female.to_string(), "female");
        assert_eq!("other".parse::<Gender>().ok(), Some(Gender::Other));
        assert!("Female".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_label_is_capitalised_code() {
        for gender in Gender::iter() {
            let code = gender.to_string();
            let mut expected = code[..1].to_uppercase();
            expected.push_str(&code[1..]);
            assert_eq!(gender.label(), expected);
        }
    }

    #[test]
    fn test_gender_cycle_wraps() {
        assert_eq!(Gender::cycle(None, true), Gender::Male);
        assert_eq!(Gender::cycle(None, false), Gender::Other);
        assert_eq!(Gender::cycle(Some(Gender::Other), true), Gender::Male);
        assert_eq!(Gender::cycle(Some(Gender::Male), false), Gender::Other);
        assert_eq!(Gender::cycle(Some(Gender::Male), true), Gender::Female);
    }

    #[test]
    fn test_gender_serde_uses_codes() {
        let json = serde_json::to_string(&Gender::Male).unwrap();
        assert_eq!(json, "\"male\"");
    }
}
