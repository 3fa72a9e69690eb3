//! External identifiers: ark keys and sameAs/entityId links.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::{versioned_record, DateLimit, Record, VersionedRecord};
use crate::term::Term;
use crate::wire;

/// Persistent archival resource identifier.
///
/// Also serves as the non-owning lookup key wherever one record points
/// at a constellation it does not own (a resource's holding repository,
/// a relation's endpoints): resolution is an external concern, so the
/// instance graph stays acyclic by construction.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ark(String);

impl Ark {
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        if s.trim().is_empty() {
            Err(ModelError::EmptyArk)
        } else {
            Ok(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Ark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ark({:?})", self.0)
    }
}

impl fmt::Display for Ark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An alternate record for the same identity in another system.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SameAs {
    #[serde(rename = "dataType", default)]
    tag: wire::SameAsTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<Term>,
}

versioned_record!(SameAs, dates: DateLimit::AtMost(0));

impl PartialEq for SameAs {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.text == other.text
            && self.uri == other.uri
            && self.link_type == other.link_type
    }
}

/// An identifier assigned to this entity by another authority.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityId {
    #[serde(rename = "dataType", default)]
    tag: wire::EntityIdTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub id_type: Option<Term>,
}

versioned_record!(EntityId, dates: DateLimit::AtMost(0));

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.text == other.text
            && self.uri == other.uri
            && self.id_type == other.id_type
    }
}
