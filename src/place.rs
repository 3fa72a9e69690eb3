//! Places associated with the described identity.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::{
    cleanse_children, set_equal, versioned_record, DateLimit, Operation, Record, VersionedRecord,
};
use crate::term::{GeoTerm, Term};
use crate::wire;

/// One ordered line of a postal address.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLine {
    #[serde(rename = "dataType", default)]
    tag: wire::AddressLineTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<Term>,
    #[serde(default, skip_serializing_if = "wire::is_zero_i32")]
    pub order: i32,
}

versioned_record!(AddressLine, dates: DateLimit::AtMost(0));

impl PartialEq for AddressLine {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.text == other.text
            && self.line_type == other.line_type
            && self.order == other.order
    }
}

/// A place statement: the original text plus an optional resolved
/// geographic term and a resolution score.
///
/// Confirmation asserts a human has vetted the geographic match, so it
/// is only meaningful (and only settable) while a [`GeoTerm`] is
/// attached.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "dataType", default)]
    tag: wire::PlaceTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub place_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Term>,
    #[serde(default, skip_serializing_if = "wire::is_zero_f64")]
    pub score: f64,
    #[serde(default, skip_serializing_if = "wire::is_false")]
    confirmed: bool,
    #[serde(rename = "geoplace", default, skip_serializing_if = "Option::is_none")]
    geo_term: Option<GeoTerm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    address: Vec<AddressLine>,
}

impl Place {
    pub fn geo_term(&self) -> Option<&GeoTerm> {
        self.geo_term.as_ref()
    }

    pub fn set_geo_term(&mut self, geo_term: Option<GeoTerm>) {
        self.geo_term = geo_term;
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    /// Record whether a human vetted the geographic match. Fails, with
    /// state untouched, when no geographic term is attached.
    pub fn set_confirmed(&mut self, confirmed: bool) -> Result<(), ModelError> {
        if self.geo_term.is_none() {
            return Err(ModelError::NoGeoTerm);
        }
        self.confirmed = confirmed;
        Ok(())
    }

    pub fn confirm(&mut self) -> Result<(), ModelError> {
        self.set_confirmed(true)
    }

    pub fn deconfirm(&mut self) -> Result<(), ModelError> {
        self.set_confirmed(false)
    }

    pub fn address(&self) -> &[AddressLine] {
        &self.address
    }

    pub fn add_address_line(&mut self, line: AddressLine) {
        self.address.push(line);
    }

    pub fn set_address(&mut self, address: Vec<AddressLine>) {
        self.address = address;
    }
}

impl VersionedRecord for Place {
    const DATE_LIMIT: DateLimit = DateLimit::AtMost(1);

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn cleanse_sub_elements(&mut self, op: Option<Operation>) {
        let resolved = op.unwrap_or(Operation::Insert);
        self.record.cleanse(resolved);
        cleanse_children(&mut self.address, resolved);
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.original == other.original
            && self.score == other.score
            && self.confirmed == other.confirmed
            && self.note == other.note
            && self.place_type == other.place_type
            && self.role == other.role
            && self.geo_term == other.geo_term
            && set_equal(&self.address, &other.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_requires_a_geo_term() {
        let mut place = Place::default();
        assert_eq!(place.confirm(), Err(ModelError::NoGeoTerm));
        assert!(!place.confirmed());

        place.set_geo_term(Some(GeoTerm {
            id: 3,
            ..GeoTerm::default()
        }));
        assert!(place.confirm().is_ok());
        assert!(place.confirmed());
        assert!(place.deconfirm().is_ok());
        assert!(!place.confirmed());
    }

    #[test]
    fn confirmed_is_part_of_equality() {
        let geo = GeoTerm {
            id: 3,
            ..GeoTerm::default()
        };
        let mut a = Place::default();
        a.set_geo_term(Some(geo.clone()));
        let mut b = Place::default();
        b.set_geo_term(Some(geo));
        assert_eq!(a, b);

        a.confirm().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn address_lines_compare_as_a_set() {
        let line = |text: &str, order: i32| AddressLine {
            text: Some(text.into()),
            order,
            ..AddressLine::default()
        };
        let mut a = Place::default();
        a.add_address_line(line("1 Main St", 1));
        a.add_address_line(line("Springfield", 2));
        let mut b = Place::default();
        b.add_address_line(line("Springfield", 2));
        b.add_address_line(line("1 Main St", 1));
        assert_eq!(a, b);
    }

    #[test]
    fn cleanse_reaches_address_lines() {
        let mut place = Place::default();
        let mut line = AddressLine::default();
        line.set_id(11);
        line.set_version(3);
        place.add_address_line(line);

        place.cleanse_sub_elements(None);

        let line = &place.address()[0];
        assert_eq!((line.id(), line.version()), (0, 0));
        assert_eq!(line.operation(), Some(Operation::Insert));
    }
}
