//! Controlled-vocabulary values.
//!
//! A `Term` arrives already resolved against the vocabulary store; a
//! non-zero id is authoritative and overrides every other field in
//! comparisons. `GeoTerm` follows the same rule for geographic places.

use serde::{Deserialize, Serialize};

use crate::wire;

/// A resolved controlled-vocabulary value.
///
/// `term_type` is the vocabulary category (entity_type, date_type,
/// gender, ...), `term` the display text in whatever language the
/// vocabulary carries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Term {
    #[serde(
        default,
        deserialize_with = "wire::id_number",
        skip_serializing_if = "wire::is_zero"
    )]
    pub id: u64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub term_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Term {
    /// A vocabulary-store term: id plus display text.
    pub fn from_vocabulary(id: u64, term: impl Into<String>) -> Self {
        Self {
            id,
            term: Some(term.into()),
            ..Self::default()
        }
    }

    /// An unresolved freeform term (id 0): compared field by field.
    pub fn freeform(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Whether nothing has been filled in (the category tag alone does
    /// not make a term non-empty).
    pub fn is_unset(&self) -> bool {
        self.id == 0 && self.term.is_none() && self.uri.is_none() && self.description.is_none()
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        // Non-zero ids are authoritative; everything else is ignored.
        if self.id != 0 && other.id != 0 {
            return self.id == other.id;
        }
        // Freeform fallback. An absent field never equals a present one.
        self.uri == other.uri && self.term == other.term && self.description == other.description
    }
}

/// A resolved geographic place from the external gazetteer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoTerm {
    #[serde(
        default,
        deserialize_with = "wire::id_number",
        skip_serializing_if = "wire::is_zero"
    )]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "wire::is_zero_f64")]
    pub latitude: f64,
    #[serde(default, skip_serializing_if = "wire::is_zero_f64")]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl PartialEq for GeoTerm {
    fn eq(&self, other: &Self) -> bool {
        if self.id != 0 && other.id != 0 {
            return self.id == other.id;
        }
        self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.name == other.name
            && self.uri == other.uri
            && self.administration_code == other.administration_code
            && self.country_code == other.country_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_ids_override_other_fields() {
        let a = Term::from_vocabulary(7, "A");
        let b = Term::from_vocabulary(7, "B");
        assert_eq!(a, b);

        let c = Term::from_vocabulary(8, "A");
        assert_ne!(a, c);
    }

    #[test]
    fn zero_id_falls_back_to_field_comparison() {
        let mk = |uri: Option<&str>| Term {
            term: Some("A".into()),
            uri: uri.map(String::from),
            description: Some("d1".into()),
            ..Term::default()
        };
        assert_eq!(mk(Some("u1")), mk(Some("u1")));
        assert_ne!(mk(Some("u1")), mk(Some("u2")));
        // absent vs present must report unequal, not fault
        assert_ne!(mk(None), mk(Some("u1")));
        assert_ne!(mk(Some("u1")), mk(None));
        assert_eq!(mk(None), mk(None));
    }

    #[test]
    fn one_zero_id_disables_the_id_shortcut() {
        let resolved = Term::from_vocabulary(7, "A");
        let freeform = Term::freeform("A");
        // id 7 vs id 0: fall back to fields, where uri/term/description decide
        assert_eq!(resolved, freeform);
    }

    #[test]
    fn category_tag_is_ignored_by_the_fallback() {
        let mut a = Term::freeform("A");
        a.term_type = Some("gender".into());
        let mut b = Term::freeform("A");
        b.term_type = Some("subject".into());
        assert_eq!(a, b);
    }

    #[test]
    fn unset_term_detection() {
        assert!(Term::default().is_unset());
        assert!(!Term::freeform("x").is_unset());
        let mut t = Term::default();
        t.term_type = Some("gender".into());
        assert!(t.is_unset());
    }

    #[test]
    fn geo_term_id_priority_and_fallback() {
        let a = GeoTerm {
            id: 3,
            name: Some("Vienna".into()),
            ..GeoTerm::default()
        };
        let b = GeoTerm {
            id: 3,
            name: Some("Wien".into()),
            ..GeoTerm::default()
        };
        assert_eq!(a, b);

        let c = GeoTerm {
            latitude: 48.2,
            longitude: 16.4,
            ..GeoTerm::default()
        };
        let d = GeoTerm {
            latitude: 48.2,
            longitude: 16.4,
            ..GeoTerm::default()
        };
        assert_eq!(c, d);
        let e = GeoTerm {
            latitude: 48.2,
            longitude: 16.3,
            ..GeoTerm::default()
        };
        assert_ne!(c, e);
    }

    #[test]
    fn term_decodes_legacy_string_id() {
        let t: Term = serde_json::from_str(
            r#"{"id": "689", "term": "Birth", "type": "date_type"}"#,
        )
        .unwrap();
        assert_eq!(t.id, 689);
        assert_eq!(t.term_type.as_deref(), Some("date_type"));
    }
}
