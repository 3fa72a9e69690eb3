//! Sources: external documents this description draws on.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::record::{versioned_record, DateLimit, Record, VersionedRecord};
use crate::term::Term;
use crate::wire;

/// A cited external document.
///
/// Within control metadata a Source may arrive as a bare id with no
/// other field filled in; see `ControlMetadata`'s equality rule.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "dataType", default)]
    tag: wire::SourceTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<Term>,
}

versioned_record!(Source, dates: DateLimit::AtMost(0));

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        // citation is carried but not compared
        self.base_equals(other)
            && self.text == other.text
            && self.uri == other.uri
            && self.source_type == other.source_type
            && self.display_name == other.display_name
            && self.note == other.note
            && self.language == other.language
    }
}
