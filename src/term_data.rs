//! Term-valued descriptive facets: controlled-vocabulary assertions
//! attached to a constellation.

use serde::{Deserialize, Serialize};

use crate::record::{versioned_record, DateLimit, Record, VersionedRecord};
use crate::term::Term;
use crate::wire;

/// Generates a dateless facet wrapping a single vocabulary term.
macro_rules! term_facet {
    ($(#[$doc:meta])* $name:ident, $tag:ty) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(rename = "dataType", default)]
            tag: $tag,
            #[serde(flatten)]
            record: Record,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub term: Option<Term>,
        }

        versioned_record!($name, dates: DateLimit::AtMost(0));

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.base_equals(other) && self.term == other.term
            }
        }
    };
}

term_facet! {
    /// A gender assertion.
    Gender, wire::GenderTag
}

term_facet! {
    /// A legal status held by a corporate body.
    LegalStatus, wire::LegalStatusTag
}

term_facet! {
    /// A nationality assertion.
    Nationality, wire::NationalityTag
}

term_facet! {
    /// A topical subject heading.
    Subject, wire::SubjectTag
}

/// An occupation held by the described identity, optionally dated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    #[serde(rename = "dataType", default)]
    tag: wire::OccupationTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

versioned_record!(Occupation, dates: DateLimit::AtMost(1));

impl PartialEq for Occupation {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.term == other.term
            && self.vocabulary_source == other.vocabulary_source
            && self.note == other.note
    }
}

/// A function or activity carried out by the described identity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnacFunction {
    #[serde(rename = "dataType", default)]
    tag: wire::SnacFunctionTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub function_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_source: Option<String>,
}

versioned_record!(SnacFunction, dates: DateLimit::AtMost(1));

impl PartialEq for SnacFunction {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.term == other.term
            && self.function_type == other.function_type
            && self.note == other.note
            && self.vocabulary_source == other.vocabulary_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::SnacDate;

    #[test]
    fn term_decides_facet_equality() {
        let mut a = Subject::default();
        a.term = Some(Term::from_vocabulary(311, "Ornithology"));
        let mut b = Subject::default();
        b.term = Some(Term::from_vocabulary(311, "Ornithology (birds)"));
        // same vocabulary id wins over the differing label
        assert_eq!(a, b);

        b.term = Some(Term::from_vocabulary(312, "Ornithology"));
        assert_ne!(a, b);
    }

    #[test]
    fn occupation_admits_a_single_date() {
        let mut occ = Occupation::default();
        assert!(occ.add_date(SnacDate::default()).is_ok());
        assert!(occ.add_date(SnacDate::default()).is_err());
        assert_eq!(occ.dates().len(), 1);
    }

    #[test]
    fn function_note_participates_in_equality() {
        let mut a = SnacFunction::default();
        let b = SnacFunction::default();
        assert_eq!(a, b);
        a.note = Some("attested 1870-1912".into());
        assert_ne!(a, b);
    }

    #[test]
    fn legal_status_wire_tag_is_lowercase() {
        let json = serde_json::to_value(LegalStatus::default()).unwrap();
        assert_eq!(json["dataType"], "legalStatus");
    }
}
