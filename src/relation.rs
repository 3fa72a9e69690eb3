//! Constellation-to-constellation relations.

use serde::{Deserialize, Serialize};

use crate::identifiers::Ark;
use crate::record::{versioned_record, DateLimit, Record, VersionedRecord};
use crate::term::Term;
use crate::wire;

/// A CPF relation between two constellations, held by the source side.
///
/// Endpoints are numeric constellation ids plus ark keys; the target is
/// never embedded. Admits one date (the relation's active period).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstellationRelation {
    #[serde(rename = "dataType", default)]
    tag: wire::ConstellationRelationTag,
    #[serde(flatten)]
    record: Record,
    #[serde(
        default,
        deserialize_with = "wire::id_number",
        skip_serializing_if = "wire::is_zero"
    )]
    pub source_constellation: u64,
    #[serde(
        default,
        deserialize_with = "wire::id_number",
        skip_serializing_if = "wire::is_zero"
    )]
    pub target_constellation: u64,
    #[serde(rename = "sourceArkID", default, skip_serializing_if = "Option::is_none")]
    pub source_ark: Option<Ark>,
    #[serde(rename = "targetArkID", default, skip_serializing_if = "Option::is_none")]
    pub target_ark: Option<Ark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_entity_type: Option<Term>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf_relation_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

versioned_record!(ConstellationRelation, dates: DateLimit::AtMost(1));

impl PartialEq for ConstellationRelation {
    fn eq(&self, other: &Self) -> bool {
        // source_constellation and target_entity_type are carried but
        // not compared: the source id is implied by the owning record
        self.base_equals(other)
            && self.target_constellation == other.target_constellation
            && self.source_ark == other.source_ark
            && self.target_ark == other.target_ark
            && self.content == other.content
            && self.note == other.note
            && self.relation_type == other.relation_type
            && self.alt_type == other.alt_type
            && self.cpf_relation_type == other.cpf_relation_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_decides_equality_source_id_does_not() {
        let mut a = ConstellationRelation::default();
        a.target_constellation = 42;
        let mut b = ConstellationRelation::default();
        b.target_constellation = 42;
        b.source_constellation = 7;
        assert_eq!(a, b);

        b.target_constellation = 43;
        assert_ne!(a, b);
    }

    #[test]
    fn ark_endpoints_are_null_safe() {
        let mut a = ConstellationRelation::default();
        a.target_ark = Some(Ark::new("ark:/99166/t1").unwrap());
        let b = ConstellationRelation::default();
        assert_ne!(a, b);
    }
}
