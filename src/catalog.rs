//! Static option catalogs
//!
//! Countries and courses are fixed lookup tables for the lifetime of the
//! process. The first entry of each table is the empty-code placeholder shown
//! when nothing is selected.

/// A selectable country
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// A selectable course with its display attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseOption {
    pub code: &'static str,
    pub label: &'static str,
    pub duration: &'static str,
    pub fees: &'static str,
}

const COUNTRIES: &[CountryOption] = &[
    CountryOption { code: "", label: "Select Country" },
    CountryOption { code: "us", label: "United States" },
    CountryOption { code: "uk", label: "United Kingdom" },
    CountryOption { code: "ca", label: "Canada" },
    CountryOption { code: "au", label: "Australia" },
    CountryOption { code: "in", label: "India" },
    CountryOption { code: "de", label: "Germany" },
    CountryOption { code: "fr", label: "France" },
];

const COURSES: &[CourseOption] = &[
    CourseOption { code: "", label: "Select Course", duration: "", fees: "" },
    CourseOption {
        code: "react",
        label: "React Mastery",
        duration: "8 weeks",
        fees: "$299",
    },
    CourseOption {
        code: "javascript",
        label: "JavaScript Fundamentals",
        duration: "6 weeks",
        fees: "$199",
    },
    CourseOption {
        code: "python",
        label: "Python for Beginners",
        duration: "10 weeks",
        fees: "$249",
    },
    CourseOption {
        code: "webdev",
        label: "Full Stack Web Development",
        duration: "12 weeks",
        fees: "$399",
    },
    CourseOption {
        code: "datascience",
        label: "Data Science Essentials",
        duration: "14 weeks",
        fees: "$349",
    },
];

/// Country lookup table
pub struct CountryCatalog;

impl CountryCatalog {
    /// All options in display order, placeholder first
    pub fn options() -> &'static [CountryOption] {
        COUNTRIES
    }

    /// Find a country by code
    pub fn find(code: &str) -> Option<&'static CountryOption> {
        COUNTRIES.iter().find(|c| c.code == code)
    }

    /// Label for a code, empty if the code is unknown
    pub fn label(code: &str) -> &'static str {
        Self::find(code).map(|c| c.label).unwrap_or("")
    }

    /// Code of the option after (or before) `code`, wrapping around
    pub fn cycle(code: &str, forward: bool) -> &'static str {
        let codes: Vec<&'static str> = COUNTRIES.iter().map(|c| c.code).collect();
        cycle_codes(&codes, code, forward)
    }
}

/// Course lookup table
pub struct CourseCatalog;

impl CourseCatalog {
    /// All options in display order, placeholder first
    pub fn options() -> &'static [CourseOption] {
        COURSES
    }

    /// Find a course by code
    pub fn find(code: &str) -> Option<&'static CourseOption> {
        COURSES.iter().find(|c| c.code == code)
    }

    /// Label for a code, empty if the code is unknown
    pub fn label(code: &str) -> &'static str {
        Self::find(code).map(|c| c.label).unwrap_or("")
    }

    /// Duration for a code; empty for the placeholder or an unknown code
    pub fn duration(code: &str) -> &'static str {
        Self::find(code).map(|c| c.duration).unwrap_or("")
    }

    /// Fees for a code; empty for the placeholder or an unknown code
    pub fn fees(code: &str) -> &'static str {
        Self::find(code).map(|c| c.fees).unwrap_or("")
    }

    /// Code of the option after (or before) `code`, wrapping around
    pub fn cycle(code: &str, forward: bool) -> &'static str {
        let codes: Vec<&'static str> = COURSES.iter().map(|c| c.code).collect();
        cycle_codes(&codes, code, forward)
    }
}

// Unknown codes restart from the placeholder.
fn cycle_codes(codes: &[&'static str], current: &str, forward: bool) -> &'static str {
    let len = codes.len();
    if len == 0 {
        return "";
    }
    let pos = codes.iter().position(|c| *c == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    codes[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes_include_placeholder() {
        assert_eq!(CountryCatalog::options().len(), 8);
        assert_eq!(CourseCatalog::options().len(), 6);
        assert_eq!(CountryCatalog::options()[0].code, "");
        assert_eq!(CourseCatalog::options()[0].code, "");
    }

    #[test]
    fn test_course_lookup() {
        assert_eq!(CourseCatalog::label("react"), "React Mastery");
        assert_eq!(CourseCatalog::duration("python"), "10 weeks");
        assert_eq!(CourseCatalog::fees("datascience"), "$349");
    }

    #[test]
    fn test_placeholder_and_unknown_have_no_attributes() {
        assert_eq!(CourseCatalog::duration(""), "");
        assert_eq!(CourseCatalog::fees(""), "");
        assert_eq!(CourseCatalog::duration("cobol"), "");
        assert_eq!(CountryCatalog::label("zz"), "");
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(CountryCatalog::label("us"), "United States");
        assert_eq!(CountryCatalog::label("fr"), "France");
    }

    #[test]
    fn test_cycle_wraps_through_placeholder() {
        assert_eq!(CourseCatalog::cycle("", true), "react");
        assert_eq!(CourseCatalog::cycle("datascience", true), "");
        assert_eq!(CourseCatalog::cycle("", false), "datascience");
        assert_eq!(CountryCatalog::cycle("fr", true), "");
        assert_eq!(CountryCatalog::cycle("us", false), "");
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = CourseCatalog::options().iter().map(|c| c.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), CourseCatalog::options().len());
    }
}
