//! Provenance and maintenance records.
//!
//! Control metadata (SCM) is the citation trail attached to a field or
//! entity; maintenance events and images are constellation-level
//! housekeeping excluded from equality by the aggregate.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::record::{versioned_record, DateLimit, Record, VersionedRecord};
use crate::source::Source;
use crate::term::Term;
use crate::wire;

/// A citation/provenance entry attached to a piece of data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlMetadata {
    #[serde(rename = "dataType", default)]
    tag: wire::ControlMetadataTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptive_rule: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

versioned_record!(ControlMetadata, dates: DateLimit::AtMost(0));

impl PartialEq for ControlMetadata {
    fn eq(&self, other: &Self) -> bool {
        // A citation inside an SCM may carry nothing but its id, so
        // citations compare by id alone.
        let citation_matches = match (&self.citation, &other.citation) {
            (None, None) => true,
            (Some(a), Some(b)) => a.id() == b.id(),
            _ => false,
        };
        self.base_equals(other)
            && citation_matches
            && self.sub_citation == other.sub_citation
            && self.source_data == other.source_data
            && self.note == other.note
            && self.descriptive_rule == other.descriptive_rule
            && self.language == other.language
    }
}

/// One maintenance action recorded against the constellation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEvent {
    #[serde(rename = "dataType", default)]
    tag: wire::MaintenanceEventTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
}

versioned_record!(MaintenanceEvent, dates: DateLimit::AtMost(0));

impl PartialEq for MaintenanceEvent {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.event_type == other.event_type
            && self.event_date_time == other.event_date_time
            && self.standard_date_time == other.standard_date_time
            && self.agent_type == other.agent_type
            && self.agent == other.agent
            && self.event_description == other.event_description
    }
}

/// An image associated with the described identity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(rename = "dataType", default)]
    tag: wire::ImageTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(rename = "infoURL", default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "authorURL", default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(rename = "licenseURL", default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
}

versioned_record!(Image, dates: DateLimit::AtMost(0));

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.url == other.url
            && self.info == other.info
            && self.info_url == other.info_url
            && self.author == other.author
            && self.author_url == other.author_url
            && self.license == other.license
            && self.license_url == other.license_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scm_citations_compare_by_id_alone() {
        let mut full_with_id = Source::default();
        full_with_id.display_name = Some("Census 1901".into());
        full_with_id.set_id(17);
        let mut bare = Source::default();
        bare.set_id(17);

        let a = ControlMetadata {
            citation: Some(full_with_id),
            ..ControlMetadata::default()
        };
        let b = ControlMetadata {
            citation: Some(bare),
            ..ControlMetadata::default()
        };
        assert_eq!(a, b);

        let c = ControlMetadata {
            citation: None,
            ..ControlMetadata::default()
        };
        assert_ne!(a, c);
    }

    #[test]
    fn scm_source_data_differs() {
        let a = ControlMetadata {
            source_data: Some("Francs-Bourgeois (rue des)".into()),
            ..ControlMetadata::default()
        };
        let b = ControlMetadata::default();
        assert_ne!(a, b);
    }
}
