//! Severity levels for recorded events.
//!
//! Six canonical levels plus an open custom label. All comparisons run
//! through an integer rank, so custom labels always sort above the
//! canonical levels.

use std::cmp::Ordering;
use std::fmt;

/// Importance classification of a single event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Undefined,
    Debugging,
    Information,
    Warning,
    Error,
    Fatal,
    /// Caller-defined label outside the canonical set.
    Custom(String),
}

impl Severity {
    /// Integer rank used for ordering. Every custom label shares one rank.
    pub fn rank(&self) -> i8 {
        match self {
            Severity::Undefined => -1,
            Severity::Debugging => 0,
            Severity::Information => 1,
            Severity::Warning => 2,
            Severity::Error => 3,
            Severity::Fatal => 4,
            Severity::Custom(_) => 5,
        }
    }

    /// Maps any string to a severity. Canonical names match case-sensitively
    /// after trimming; an empty string maps to `Undefined`. Anything else
    /// becomes a custom label.
    pub fn parse(text: &str) -> Severity {
        match text.trim() {
            "" => Severity::Undefined,
            "Undefined" => Severity::Undefined,
            "Debugging" => Severity::Debugging,
            "Information" => Severity::Information,
            "Warning" => Severity::Warning,
            "Error" => Severity::Error,
            "Fatal" => Severity::Fatal,
            other => Severity::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Undefined => "Undefined",
            Severity::Debugging => "Debugging",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
            Severity::Custom(label) => label,
        };
        write!(f, "{name}")
    }
}

impl From<&str> for Severity {
    fn from(text: &str) -> Severity {
        Severity::parse(text)
    }
}

/// Ranks order every pair except two distinct custom labels, which share a
/// rank without being equal and therefore do not compare.
impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Severity) -> Option<Ordering> {
        match (self, other) {
            (Severity::Custom(a), Severity::Custom(b)) if a != b => None,
            _ => Some(self.rank().cmp(&other.rank())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        let levels = [
            Severity::Undefined,
            Severity::Debugging,
            Severity::Information,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ];
        for level in levels {
            assert_eq!(Severity::parse(&level.to_string()), level);
        }
    }

    #[test]
    fn test_custom_label_round_trips() {
        let custom = Severity::Custom("Audit".to_string());
        assert_eq!(Severity::parse(&custom.to_string()), custom);
    }

    #[test]
    fn test_custom_label_colliding_with_canonical_name_parses_canonical() {
        // A custom label spelled "Error" is indistinguishable from the
        // canonical name on the wire; parsing resolves to the canonical
        // variant. Expected behavior, not a defect.
        let custom = Severity::Custom("Error".to_string());
        assert_eq!(Severity::parse(&custom.to_string()), Severity::Error);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Severity::parse("  Warning \n"), Severity::Warning);
        assert_eq!(
            Severity::parse(" network \t"),
            Severity::Custom("network".to_string())
        );
    }

    #[test]
    fn test_parse_empty_is_undefined() {
        assert_eq!(Severity::parse(""), Severity::Undefined);
        assert_eq!(Severity::parse("   "), Severity::Undefined);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            Severity::parse("information"),
            Severity::Custom("information".to_string())
        );
    }

    #[test]
    fn test_rank_ordering_chain() {
        let chain = [
            Severity::Undefined,
            Severity::Debugging,
            Severity::Information,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
            Severity::Custom("anything".to_string()),
        ];
        for pair in chain.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_distinct_custom_labels_do_not_compare() {
        let a = Severity::Custom("A".to_string());
        let b = Severity::Custom("B".to_string());
        assert_ne!(a, b);
        assert_eq!(a.rank(), b.rank());
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn test_equal_custom_labels_compare_equal() {
        let a = Severity::Custom("A".to_string());
        let b = Severity::Custom("A".to_string());
        assert_eq!(a, b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
    }

    #[test]
    fn test_from_str_delegates_to_parse() {
        assert_eq!(Severity::from("Fatal"), Severity::Fatal);
    }
}
