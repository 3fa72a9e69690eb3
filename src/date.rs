//! Date and date-range values.
//!
//! A `SnacDate` is either a single date (only the from-side meaningful)
//! or a range. Standardized values use a leading `-` for BC years; the
//! sign is stripped on the way in and tracked in a separate flag so the
//! stored machine date is always unsigned.

use serde::{Deserialize, Serialize};

use crate::record::{Record, VersionedRecord};
use crate::term::Term;
use crate::wire;

/// Fuzzy bounds around a date (`@notBefore` / `@notAfter`).
///
/// Always present on both sides of a date, never optional: equality can
/// assume both sides have a range to compare, bound by bound.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    not_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    not_after: Option<String>,
}

impl FuzzyRange {
    pub fn not_before(&self) -> Option<&str> {
        self.not_before.as_deref()
    }

    pub fn not_after(&self) -> Option<&str> {
        self.not_after.as_deref()
    }

    pub fn set(&mut self, not_before: Option<String>, not_after: Option<String>) {
        self.not_before = not_before;
        self.not_after = not_after;
    }

    pub(crate) fn is_unset(&self) -> bool {
        self.not_before.is_none() && self.not_after.is_none()
    }
}

/// Split a standardized date into its unsigned form and a BC flag.
///
/// Only the first character is examined: a leading `-` is stripped and
/// flagged, anything else passes through unchanged.
fn parse_bc(standard: &str) -> (&str, bool) {
    match standard.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (standard, false),
    }
}

/// A date or date range attached to a record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnacDate {
    #[serde(rename = "dataType", default)]
    tag: wire::SnacDateTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from_date_original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from_type: Option<Term>,
    #[serde(rename = "fromBC", default, skip_serializing_if = "wire::is_false")]
    from_bc: bool,
    #[serde(default, skip_serializing_if = "FuzzyRange::is_unset")]
    from_range: FuzzyRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to_date_original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to_type: Option<Term>,
    #[serde(rename = "toBC", default, skip_serializing_if = "wire::is_false")]
    to_bc: bool,
    #[serde(default, skip_serializing_if = "FuzzyRange::is_unset")]
    to_range: FuzzyRange,
    #[serde(default, skip_serializing_if = "wire::is_false")]
    is_range: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

crate::record::versioned_record!(SnacDate, dates: crate::record::DateLimit::AtMost(0));

impl SnacDate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The machine-readable begin date, unsigned (see [`from_bc`]).
    ///
    /// [`from_bc`]: SnacDate::from_bc
    pub fn from_date(&self) -> Option<&str> {
        self.from_date.as_deref()
    }

    /// The begin date exactly as a human entered it. There deliberately
    /// is no setter for this alone; use [`set_from_date`] or [`set_date`].
    ///
    /// [`set_from_date`]: SnacDate::set_from_date
    /// [`set_date`]: SnacDate::set_date
    pub fn from_date_original(&self) -> Option<&str> {
        self.from_date_original.as_deref()
    }

    /// Kind of the begin date, such as "Birth".
    pub fn from_type(&self) -> Option<&Term> {
        self.from_type.as_ref()
    }

    pub fn from_bc(&self) -> bool {
        self.from_bc
    }

    pub fn from_range(&self) -> &FuzzyRange {
        &self.from_range
    }

    pub fn to_date(&self) -> Option<&str> {
        self.to_date.as_deref()
    }

    pub fn to_date_original(&self) -> Option<&str> {
        self.to_date_original.as_deref()
    }

    /// Kind of the end date, such as "Death".
    pub fn to_type(&self) -> Option<&Term> {
        self.to_type.as_ref()
    }

    pub fn to_bc(&self) -> bool {
        self.to_bc
    }

    pub fn to_range(&self) -> &FuzzyRange {
        &self.to_range
    }

    /// Whether this is a from/to range rather than a single date. When
    /// false only the from-side fields are meaningful.
    pub fn is_range(&self) -> bool {
        self.is_range
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    pub fn set_range(&mut self, is_range: bool) {
        self.is_range = is_range;
    }

    /// Store the begin date: the original text verbatim, the standard
    /// form stripped of a BC sign, and the derived BC flag.
    pub fn set_from_date(
        &mut self,
        original: Option<String>,
        standard: &str,
        from_type: Option<Term>,
    ) {
        let (date, bc) = parse_bc(standard);
        self.from_date = Some(date.to_owned());
        self.from_bc = bc;
        self.from_date_original = original;
        self.from_type = from_type;
    }

    pub fn set_from_date_range(&mut self, not_before: Option<String>, not_after: Option<String>) {
        self.from_range.set(not_before, not_after);
    }

    /// Store the end date; see [`set_from_date`].
    ///
    /// [`set_from_date`]: SnacDate::set_from_date
    pub fn set_to_date(
        &mut self,
        original: Option<String>,
        standard: &str,
        to_type: Option<Term>,
    ) {
        let (date, bc) = parse_bc(standard);
        self.to_date = Some(date.to_owned());
        self.to_bc = bc;
        self.to_date_original = original;
        self.to_type = to_type;
    }

    pub fn set_to_date_range(&mut self, not_before: Option<String>, not_after: Option<String>) {
        self.to_range.set(not_before, not_after);
    }

    /// Store a single (non-range) date on the from side.
    pub fn set_date(&mut self, original: Option<String>, standard: &str, date_type: Option<Term>) {
        self.set_from_date(original, standard, date_type);
        self.is_range = false;
    }

    /// Fuzzy bounds of the single date (the from side).
    pub fn set_date_range(&mut self, not_before: Option<String>, not_after: Option<String>) {
        self.set_from_date_range(not_before, not_after);
    }

    pub fn set_from_bc(&mut self, bc: bool) {
        self.from_bc = bc;
    }

    pub fn set_to_bc(&mut self, bc: bool) {
        self.to_bc = bc;
    }

    /// Set the BC flag of a single date; alias for [`set_from_bc`].
    ///
    /// [`set_from_bc`]: SnacDate::set_from_bc
    pub fn set_bc(&mut self, bc: bool) {
        self.set_from_bc(bc);
    }
}

impl PartialEq for SnacDate {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.from_bc == other.from_bc
            && self.to_bc == other.to_bc
            && self.is_range == other.is_range
            && self.from_date == other.from_date
            && self.from_date_original == other.from_date_original
            && self.to_date == other.to_date
            && self.to_date_original == other.to_date_original
            && self.note == other.note
            && self.from_range == other.from_range
            && self.to_range == other.to_range
            && self.from_type == other.from_type
            && self.to_type == other.to_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bc_sign_is_stripped_and_flagged() {
        let mut d = SnacDate::new();
        d.set_from_date(Some("52 BC".into()), "-0052", None);
        assert_eq!(d.from_date(), Some("0052"));
        assert!(d.from_bc());
        assert_eq!(d.from_date_original(), Some("52 BC"));

        d.set_to_date(None, "1905", None);
        assert_eq!(d.to_date(), Some("1905"));
        assert!(!d.to_bc());
    }

    #[test]
    fn bc_round_trip_reconstructs_the_standard_string() {
        for s in ["-0052", "1860-08-13", "-1", "0"] {
            let mut d = SnacDate::new();
            d.set_from_date(None, s, None);
            assert_eq!(d.from_bc(), s.starts_with('-'));
            let rebuilt = if d.from_bc() {
                format!("-{}", d.from_date().unwrap())
            } else {
                d.from_date().unwrap().to_owned()
            };
            assert_eq!(rebuilt, s);
        }
    }

    #[test]
    fn only_the_first_character_is_examined() {
        let mut d = SnacDate::new();
        d.set_from_date(None, "1860-08-13", None);
        assert_eq!(d.from_date(), Some("1860-08-13"));
        assert!(!d.from_bc());
    }

    #[test]
    fn set_date_forces_single_date() {
        let mut d = SnacDate::new();
        d.set_range(true);
        d.set_date(None, "1905", None);
        assert!(!d.is_range());
    }

    #[test]
    fn set_bc_aliases_the_from_side() {
        let mut d = SnacDate::new();
        d.set_date(None, "1905", None);
        d.set_bc(true);
        assert!(d.from_bc());
        assert!(!d.to_bc());
    }

    #[test]
    fn equality_covers_every_field() {
        let mk = || {
            let mut d = SnacDate::new();
            d.set_from_date(Some("b. 1860".into()), "1860", Some(Term::from_vocabulary(689, "Birth")));
            d.set_to_date(Some("d. 1926".into()), "1926", Some(Term::from_vocabulary(690, "Death")));
            d.set_range(true);
            d
        };
        assert_eq!(mk(), mk());

        let mut other = mk();
        other.set_note(Some("approximate".into()));
        assert_ne!(mk(), other);

        let mut other = mk();
        other.set_to_bc(true);
        assert_ne!(mk(), other);
    }

    #[test]
    fn fuzzy_ranges_compare_bound_by_bound() {
        let mut a = SnacDate::new();
        a.set_from_date_range(Some("1900".into()), None);
        let mut b = SnacDate::new();
        b.set_from_date_range(Some("1900".into()), Some("1905".into()));
        assert_ne!(a, b);

        b.set_from_date_range(Some("1900".into()), None);
        assert_eq!(a, b);
    }

    #[test]
    fn operation_is_not_part_of_equality() {
        use crate::record::Operation;
        let mut a = SnacDate::new();
        a.set_date(None, "1905", None);
        let mut b = a.clone();
        b.set_operation(Operation::Delete);
        assert_eq!(a, b);
    }
}
