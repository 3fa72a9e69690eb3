//! Archival resources and the relations pointing at them.
//!
//! A `Resource` lives in an external catalog and is shared by reference:
//! cleansing a constellation never resets a resource reached through a
//! `ResourceRelation`. Its holding repository is likewise a bare ark
//! key, not an embedded constellation.

use serde::{Deserialize, Serialize};

use crate::identifiers::Ark;
use crate::language::Language;
use crate::record::{versioned_record, DateLimit, Record, VersionedRecord};
use crate::term::Term;
use crate::wire;

/// A name under which an archival resource originated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginationName {
    #[serde(rename = "dataType", default)]
    tag: wire::OriginationNameTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

versioned_record!(OriginationName, dates: DateLimit::AtMost(0));

impl PartialEq for OriginationName {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other) && self.name == other.name
    }
}

/// A described archival resource (finding aid, collection, ...).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "dataType", default)]
    tag: wire::ResourceTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<String>,
    /// Ark of the holding repository's constellation; resolved by an
    /// external lookup, never embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Ark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_entry: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origination_names: Vec<OriginationName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
}

versioned_record!(Resource, dates: DateLimit::AtMost(0));

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        // date, display_entry, origination_names, and languages are
        // carried but not compared
        self.base_equals(other)
            && self.title == other.title
            && self.abstract_text == other.abstract_text
            && self.source == other.source
            && self.extent == other.extent
            && self.link == other.link
            && self.document_type == other.document_type
            && self.entry_type == other.entry_type
            && self.link_type == other.link_type
            && self.repository == other.repository
    }
}

/// A relation from a constellation to an archival resource.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRelation {
    #[serde(rename = "dataType", default)]
    tag: wire::ResourceRelationTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// The default cleanse walk covers dates and control metadata only; the
// referenced resource belongs to the external catalog and is never
// reset through a relation.
versioned_record!(ResourceRelation, dates: DateLimit::AtMost(0));

impl PartialEq for ResourceRelation {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.content == other.content
            && self.note == other.note
            && self.resource == other.resource
            && self.role == other.role
    }
}
