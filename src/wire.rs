//! JSON wire helpers.
//!
//! Three concerns live here: the constant `dataType` discriminator each
//! record kind must always emit, tolerant decoding of ids that legacy
//! documents carry as either JSON numbers or numeric strings, and the
//! skip-at-default predicates shared by the serde derives.

use serde::de::{Error as DeError, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) fn is_zero(n: &u64) -> bool {
    *n == 0
}

pub(crate) fn is_zero_i32(n: &i32) -> bool {
    *n == 0
}

pub(crate) fn is_zero_f64(n: &f64) -> bool {
    *n == 0.0
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

/// Decode an id/version that may arrive as a number or a numeric string.
///
/// Legacy exports emit `"id": "25298391"` and `"id": 25298391`
/// interchangeably; both must parse.
pub(crate) fn id_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("`{text}` is not a numeric id"))),
    }
}

/// Zero-sized `dataType` markers, one per record kind.
///
/// Serialization always emits the literal, even on an otherwise-default
/// record; deserialization tolerates any value (the tag is informational
/// on the way in, the Rust type already fixes the kind).
macro_rules! data_type_tags {
    ($($name:ident => $literal:literal,)*) => {
        $(
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str($literal)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let _ = IgnoredAny::deserialize(deserializer)?;
                    Ok($name)
                }
            }
        )*
    };
}

data_type_tags! {
    ConstellationTag => "Constellation",
    SnacDateTag => "SNACDate",
    ControlMetadataTag => "SNACControlMetadata",
    SourceTag => "Source",
    LanguageTag => "Language",
    MaintenanceEventTag => "MaintenanceEvent",
    ImageTag => "Image",
    NameEntryTag => "NameEntry",
    NameComponentTag => "NameComponent",
    ContributorTag => "Contributor",
    PlaceTag => "Place",
    AddressLineTag => "AddressLine",
    ResourceTag => "Resource",
    OriginationNameTag => "OriginationName",
    ResourceRelationTag => "ResourceRelation",
    ConstellationRelationTag => "Relation",
    BiogHistTag => "BiogHist",
    ConventionDeclarationTag => "ConventionDeclaration",
    GeneralContextTag => "GeneralContext",
    MandateTag => "Mandate",
    StructureOrGenealogyTag => "StructureOrGenealogy",
    GenderTag => "Gender",
    LegalStatusTag => "legalStatus",
    NationalityTag => "Nationality",
    SubjectTag => "Subject",
    OccupationTag => "Occupation",
    SnacFunctionTag => "SNACFunction",
    SameAsTag => "SameAs",
    EntityIdTag => "EntityId",
}
