//! Versioned-record base shared by every entity.
//!
//! Composition instead of inheritance: each entity embeds a [`Record`]
//! value carrying identity, version, lifecycle operation, the bounded
//! date list, and attached control metadata. The [`VersionedRecord`]
//! trait supplies the shared accessors and the recursive cleanse walk.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::SnacDate;
use crate::error::ModelError;
use crate::metadata::ControlMetadata;
use crate::wire;

/// Lifecycle intent for a record revision.
///
/// Excluded from every equality comparison by design: a record mid-edit
/// must still compare equal to its persisted baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Per-kind bound on how many dates a record may hold.
///
/// `AtMost(0)` means dates are disallowed for that kind. `Unbounded` is
/// used only by the constellation root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateLimit {
    AtMost(usize),
    Unbounded,
}

impl DateLimit {
    /// Whether a date list of `count` entries stays within the bound.
    pub fn admits(&self, count: usize) -> bool {
        match self {
            Self::AtMost(n) => count <= *n,
            Self::Unbounded => true,
        }
    }

    /// Whether this record kind may hold dates at all.
    pub fn allows_dates(&self) -> bool {
        !matches!(self, Self::AtMost(0))
    }
}

impl fmt::Display for DateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtMost(n) => write!(f, "at most {n}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Identity/version/operation/date/provenance state embedded in every
/// entity. `id == 0` and `version == 0` mean "not yet assigned"; real
/// values are stamped by the external store when a revision persists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(
        default,
        deserialize_with = "wire::id_number",
        skip_serializing_if = "wire::is_zero"
    )]
    pub(crate) id: u64,
    #[serde(
        default,
        deserialize_with = "wire::id_number",
        skip_serializing_if = "wire::is_zero"
    )]
    pub(crate) version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) operation: Option<Operation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) dates: Vec<SnacDate>,
    #[serde(
        rename = "snacControlMetadata",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub(crate) control_metadata: Vec<ControlMetadata>,
}

impl Record {
    /// Reset every directly-owned date and control-metadata entry to the
    /// unassigned state, stamp `op` on it, and recurse into its own
    /// sub-elements.
    pub(crate) fn cleanse(&mut self, op: Operation) {
        cleanse_children(&mut self.dates, op);
        cleanse_children(&mut self.control_metadata, op);
    }
}

/// Shared behavior of every entity embedding a [`Record`].
pub trait VersionedRecord {
    /// How many dates this record kind admits.
    const DATE_LIMIT: DateLimit;

    fn record(&self) -> &Record;
    fn record_mut(&mut self) -> &mut Record;

    fn id(&self) -> u64 {
        self.record().id
    }

    fn set_id(&mut self, id: u64) {
        self.record_mut().id = id;
    }

    fn version(&self) -> u64 {
        self.record().version
    }

    fn set_version(&mut self, version: u64) {
        self.record_mut().version = version;
    }

    fn operation(&self) -> Option<Operation> {
        self.record().operation
    }

    /// Invalid operations are unrepresentable; use [`clear_operation`]
    /// for the unset state.
    ///
    /// [`clear_operation`]: VersionedRecord::clear_operation
    fn set_operation(&mut self, op: Operation) {
        self.record_mut().operation = Some(op);
    }

    fn clear_operation(&mut self) {
        self.record_mut().operation = None;
    }

    fn dates(&self) -> &[SnacDate] {
        &self.record().dates
    }

    /// Append a date, refusing (without mutation) when the kind's limit
    /// would be exceeded.
    fn add_date(&mut self, date: SnacDate) -> Result<(), ModelError> {
        let record = self.record_mut();
        let attempted = record.dates.len() + 1;
        if !Self::DATE_LIMIT.admits(attempted) {
            return Err(ModelError::DateLimitExceeded {
                limit: Self::DATE_LIMIT,
                attempted,
            });
        }
        record.dates.push(date);
        Ok(())
    }

    /// Replace the date list, refusing (without mutation) when the
    /// kind's limit would be exceeded.
    fn set_dates(&mut self, dates: Vec<SnacDate>) -> Result<(), ModelError> {
        if !Self::DATE_LIMIT.admits(dates.len()) {
            return Err(ModelError::DateLimitExceeded {
                limit: Self::DATE_LIMIT,
                attempted: dates.len(),
            });
        }
        self.record_mut().dates = dates;
        Ok(())
    }

    fn control_metadata(&self) -> &[ControlMetadata] {
        &self.record().control_metadata
    }

    fn add_control_metadata(&mut self, scm: ControlMetadata) {
        self.record_mut().control_metadata.push(scm);
    }

    fn set_control_metadata(&mut self, scm: Vec<ControlMetadata>) {
        self.record_mut().control_metadata = scm;
    }

    /// Prepare this record's sub-tree to be treated as brand-new: zero
    /// the ids/versions of every owned child and stamp the resolved
    /// operation (`op`, defaulting to `Insert`) on it, recursively.
    ///
    /// Kinds owning child collections beyond dates and control metadata
    /// override this and extend the walk over those collections.
    fn cleanse_sub_elements(&mut self, op: Option<Operation>) {
        let resolved = op.unwrap_or(Operation::Insert);
        self.record_mut().cleanse(resolved);
    }

    /// Identity, version, and (where dates are admitted) date-list set
    /// equality. `operation` and control metadata are excluded by design.
    fn base_equals(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        let (a, b) = (self.record(), other.record());
        a.id == b.id
            && a.version == b.version
            && (!Self::DATE_LIMIT.allows_dates() || set_equal(&a.dates, &b.dates))
    }
}

/// Mutual containment. Order and duplicate multiplicity are not checked:
/// `[n]` and `[n, n]` compare equal, which downstream relies on.
pub(crate) fn set_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().all(|x| b.contains(x)) && b.iter().all(|y| a.contains(y))
}

/// Reset one owned child and recurse into its sub-elements.
pub(crate) fn cleanse_child<T: VersionedRecord>(child: &mut T, op: Operation) {
    {
        let record = child.record_mut();
        record.id = 0;
        record.version = 0;
        record.operation = Some(op);
    }
    child.cleanse_sub_elements(Some(op));
}

pub(crate) fn cleanse_children<T: VersionedRecord>(children: &mut [T], op: Operation) {
    for child in children {
        cleanse_child(child, op);
    }
}

/// Implements [`VersionedRecord`] for an entity with no child collections
/// beyond its embedded record.
macro_rules! versioned_record {
    ($ty:ty, dates: $limit:expr) => {
        impl $crate::record::VersionedRecord for $ty {
            const DATE_LIMIT: $crate::record::DateLimit = $limit;

            fn record(&self) -> &$crate::record::Record {
                &self.record
            }

            fn record_mut(&mut self) -> &mut $crate::record::Record {
                &mut self.record
            }
        }
    };
}

pub(crate) use versioned_record;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default)]
    struct TwoDates {
        record: Record,
    }

    versioned_record!(TwoDates, dates: DateLimit::AtMost(2));

    #[derive(Clone, Debug, Default)]
    struct Dateless {
        record: Record,
    }

    versioned_record!(Dateless, dates: DateLimit::AtMost(0));

    #[test]
    fn add_date_respects_the_limit() {
        let mut rec = TwoDates::default();
        assert!(rec.add_date(SnacDate::default()).is_ok());
        assert!(rec.add_date(SnacDate::default()).is_ok());
        let err = rec.add_date(SnacDate::default()).unwrap_err();
        assert_eq!(
            err,
            ModelError::DateLimitExceeded {
                limit: DateLimit::AtMost(2),
                attempted: 3
            }
        );
        // refused without mutation
        assert_eq!(rec.dates().len(), 2);
    }

    #[test]
    fn dateless_kind_refuses_any_date() {
        let mut rec = Dateless::default();
        assert!(rec.add_date(SnacDate::default()).is_err());
        assert!(rec.dates().is_empty());
        // an empty replacement list stays within the bound
        assert!(rec.set_dates(Vec::new()).is_ok());
    }

    #[test]
    fn set_dates_accepts_exactly_the_limit() {
        let mut rec = TwoDates::default();
        assert!(rec
            .set_dates(vec![SnacDate::default(), SnacDate::default()])
            .is_ok());
        assert!(rec
            .set_dates(vec![
                SnacDate::default(),
                SnacDate::default(),
                SnacDate::default()
            ])
            .is_err());
        assert_eq!(rec.dates().len(), 2);
    }

    #[test]
    fn base_equality_ignores_operation_and_metadata() {
        let mut a = TwoDates::default();
        let b = TwoDates::default();
        a.set_operation(Operation::Update);
        a.add_control_metadata(ControlMetadata::default());
        assert!(a.base_equals(&b));

        a.set_id(9);
        assert!(!a.base_equals(&b));
    }

    #[test]
    fn dateless_equality_skips_date_lists() {
        let mut a = Dateless::default();
        let b = Dateless::default();
        // a stray date (as decoded legacy input may carry) does not
        // break equality for a kind that admits none
        a.record.dates.push(SnacDate::default());
        assert!(a.base_equals(&b));
    }

    #[test]
    fn set_equal_ignores_order_and_multiplicity() {
        assert!(set_equal(&[1, 2], &[2, 1]));
        assert!(set_equal(&[1], &[1, 1]));
        assert!(!set_equal(&[1, 2], &[1]));
        assert!(set_equal::<u64>(&[], &[]));
    }

    #[test]
    fn cleanse_resets_children_and_stamps_default_insert() {
        let mut rec = TwoDates::default();
        let mut date = SnacDate::default();
        date.set_id(12);
        date.set_version(7);
        rec.add_date(date).unwrap();
        let mut scm = ControlMetadata::default();
        scm.set_id(44);
        rec.add_control_metadata(scm);

        rec.cleanse_sub_elements(None);

        let date = &rec.dates()[0];
        assert_eq!((date.id(), date.version()), (0, 0));
        assert_eq!(date.operation(), Some(Operation::Insert));
        let scm = &rec.control_metadata()[0];
        assert_eq!((scm.id(), scm.version()), (0, 0));
        assert_eq!(scm.operation(), Some(Operation::Insert));
    }

    #[test]
    fn cleanse_propagates_an_explicit_operation() {
        let mut rec = TwoDates::default();
        rec.add_date(SnacDate::default()).unwrap();
        rec.cleanse_sub_elements(Some(Operation::Update));
        assert_eq!(rec.dates()[0].operation(), Some(Operation::Update));
    }
}
