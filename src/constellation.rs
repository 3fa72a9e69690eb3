//! The identity constellation: the aggregate root tying every descriptive
//! facet of one identity together.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::identifiers::{Ark, EntityId, SameAs};
use crate::language::Language;
use crate::metadata::{Image, MaintenanceEvent};
use crate::name::NameEntry;
use crate::place::Place;
use crate::record::{
    cleanse_children, set_equal, DateLimit, Operation, Record, VersionedRecord,
};
use crate::relation::ConstellationRelation;
use crate::resource::ResourceRelation;
use crate::source::Source;
use crate::term::Term;
use crate::term_data::{Gender, LegalStatus, Nationality, Occupation, SnacFunction, Subject};
use crate::text_data::{
    BiogHist, ConventionDeclaration, GeneralContext, Mandate, StructureOrGenealogy,
};
use crate::wire;

/// One complete described identity.
///
/// Collections are reached through accessors only; the preferred-name
/// bookmark is kept consistent by routing every list replacement through
/// [`set_name_entries`](Constellation::set_name_entries).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constellation {
    #[serde(rename = "dataType", default)]
    tag: wire::ConstellationTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ark: Option<Ark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_status: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_agency: Option<String>,

    #[serde(
        rename = "otherRecordIDs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    other_record_ids: Vec<SameAs>,
    #[serde(rename = "entityIDs", default, skip_serializing_if = "Vec::is_empty")]
    entity_ids: Vec<EntityId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    legal_statuses: Vec<LegalStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    convention_declarations: Vec<ConventionDeclaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    languages_used: Vec<Language>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    name_entries: Vec<NameEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    occupations: Vec<Occupation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    biog_hists: Vec<BiogHist>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    relations: Vec<ConstellationRelation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    resource_relations: Vec<ResourceRelation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    functions: Vec<SnacFunction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    places: Vec<Place>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    subjects: Vec<Subject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nationalities: Vec<Nationality>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    genders: Vec<Gender>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    general_contexts: Vec<GeneralContext>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    structure_or_genealogies: Vec<StructureOrGenealogy>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    mandates: Vec<Mandate>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    maintenance_events: Vec<MaintenanceEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    flags: Vec<String>,

    /// Index into `name_entries`, valid only within one in-memory life.
    #[serde(skip)]
    preferred_name: Option<usize>,
}

/// Read/append/replace accessor triples for the plain collections.
macro_rules! collection_accessors {
    ($($field:ident: $ty:ty { add $add:ident, set $set:ident }),* $(,)?) => {
        impl Constellation {
            $(
                pub fn $field(&self) -> &[$ty] {
                    &self.$field
                }

                pub fn $add(&mut self, value: $ty) {
                    self.$field.push(value);
                }

                pub fn $set(&mut self, values: Vec<$ty>) {
                    self.$field = values;
                }
            )*
        }
    };
}

collection_accessors! {
    other_record_ids: SameAs { add add_other_record_id, set set_other_record_ids },
    entity_ids: EntityId { add add_entity_id, set set_entity_ids },
    sources: Source { add add_source, set set_sources },
    legal_statuses: LegalStatus { add add_legal_status, set set_legal_statuses },
    convention_declarations: ConventionDeclaration {
        add add_convention_declaration, set set_convention_declarations
    },
    languages_used: Language { add add_language_used, set set_languages_used },
    occupations: Occupation { add add_occupation, set set_occupations },
    biog_hists: BiogHist { add add_biog_hist, set set_biog_hists },
    relations: ConstellationRelation { add add_relation, set set_relations },
    resource_relations: ResourceRelation {
        add add_resource_relation, set set_resource_relations
    },
    functions: SnacFunction { add add_function, set set_functions },
    places: Place { add add_place, set set_places },
    subjects: Subject { add add_subject, set set_subjects },
    nationalities: Nationality { add add_nationality, set set_nationalities },
    genders: Gender { add add_gender, set set_genders },
    general_contexts: GeneralContext { add add_general_context, set set_general_contexts },
    structure_or_genealogies: StructureOrGenealogy {
        add add_structure_or_genealogy, set set_structure_or_genealogies
    },
    mandates: Mandate { add add_mandate, set set_mandates },
    maintenance_events: MaintenanceEvent {
        add add_maintenance_event, set set_maintenance_events
    },
    images: Image { add add_image, set set_images },
}

impl Constellation {
    pub fn name_entries(&self) -> &[NameEntry] {
        &self.name_entries
    }

    pub fn add_name_entry(&mut self, entry: NameEntry) {
        self.name_entries.push(entry);
    }

    /// Replaces the name-entry list. Any preferred-name bookmark pointing
    /// into the old list is dropped.
    pub fn set_name_entries(&mut self, entries: Vec<NameEntry>) {
        self.name_entries = entries;
        self.preferred_name = None;
    }

    /// The entry to display for this identity: the bookmarked one if any,
    /// otherwise the first entry holding the highest preference score.
    pub fn preferred_name_entry(&self) -> Option<&NameEntry> {
        if let Some(index) = self.preferred_name {
            if let Some(entry) = self.name_entries.get(index) {
                return Some(entry);
            }
        }
        let mut best = 0usize;
        let mut best_score = 0.0_f64;
        for (index, entry) in self.name_entries.iter().enumerate() {
            if entry.preference_score > best_score {
                best = index;
                best_score = entry.preference_score;
            }
        }
        self.name_entries.get(best)
    }

    /// Bookmark `entry` as preferred. The entry must already be in the
    /// name-entry list.
    pub fn set_preferred_name_entry(&mut self, entry: &NameEntry) -> Result<(), ModelError> {
        match self.name_entries.iter().position(|known| known == entry) {
            Some(index) => {
                self.preferred_name = Some(index);
                Ok(())
            }
            None => Err(ModelError::PreferredNameNotKnown),
        }
    }

    /// The narrative for `language`: the last entry whose language term
    /// matches by vocabulary id, otherwise the first entry.
    pub fn biog_hist(&self, language: Option<&Language>) -> Option<&BiogHist> {
        if let Some(wanted) = language.and_then(|l| l.language.as_ref()) {
            let matched = self.biog_hists.iter().rev().find(|entry| {
                entry
                    .language
                    .as_ref()
                    .and_then(|l| l.language.as_ref())
                    .is_some_and(|term| term.id == wanted.id)
            });
            if matched.is_some() {
                return matched;
            }
        }
        self.biog_hists.first()
    }

    /// Raise a processing flag. Raising the same flag twice keeps one copy.
    pub fn set_flag(&mut self, flag: &str) {
        if !self.has_flag(flag) {
            self.flags.push(flag.to_owned());
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|known| known == flag)
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Whether no descriptive content has been recorded yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Decodes a constellation from its JSON encoding. Malformed input
    /// yields `None` with the failure logged at debug level.
    pub fn from_json(encoded: &str) -> Option<Self> {
        match serde_json::from_str(encoded) {
            Ok(constellation) => Some(constellation),
            Err(err) => {
                tracing::debug!(error = %err, "constellation decode failed");
                None
            }
        }
    }

    /// Reads and decodes a constellation from a JSON file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(encoded) => Self::from_json(&encoded),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "constellation read failed");
                None
            }
        }
    }

    /// Encodes this constellation as pretty-printed JSON.
    pub fn to_json(&self) -> Option<String> {
        match serde_json::to_string_pretty(self) {
            Ok(encoded) => Some(encoded),
            Err(err) => {
                tracing::debug!(error = %err, "constellation encode failed");
                None
            }
        }
    }
}

impl VersionedRecord for Constellation {
    const DATE_LIMIT: DateLimit = DateLimit::Unbounded;

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn cleanse_sub_elements(&mut self, op: Option<Operation>) {
        let resolved = op.unwrap_or(Operation::Insert);
        self.record.cleanse(resolved);
        cleanse_children(&mut self.other_record_ids, resolved);
        cleanse_children(&mut self.entity_ids, resolved);
        cleanse_children(&mut self.sources, resolved);
        cleanse_children(&mut self.legal_statuses, resolved);
        cleanse_children(&mut self.convention_declarations, resolved);
        cleanse_children(&mut self.languages_used, resolved);
        cleanse_children(&mut self.name_entries, resolved);
        cleanse_children(&mut self.occupations, resolved);
        cleanse_children(&mut self.biog_hists, resolved);
        cleanse_children(&mut self.relations, resolved);
        cleanse_children(&mut self.resource_relations, resolved);
        cleanse_children(&mut self.functions, resolved);
        cleanse_children(&mut self.places, resolved);
        cleanse_children(&mut self.subjects, resolved);
        cleanse_children(&mut self.nationalities, resolved);
        cleanse_children(&mut self.genders, resolved);
        cleanse_children(&mut self.general_contexts, resolved);
        cleanse_children(&mut self.structure_or_genealogies, resolved);
        cleanse_children(&mut self.mandates, resolved);
    }
}

impl PartialEq for Constellation {
    /// Descriptive-content equality. Maintenance history, images, flags,
    /// status fields, and the preferred-name bookmark are provenance or
    /// presentation state and do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.ark == other.ark
            && self.entity_type == other.entity_type
            && set_equal(&self.other_record_ids, &other.other_record_ids)
            && set_equal(&self.entity_ids, &other.entity_ids)
            && set_equal(&self.sources, &other.sources)
            && set_equal(&self.legal_statuses, &other.legal_statuses)
            && set_equal(&self.convention_declarations, &other.convention_declarations)
            && set_equal(&self.languages_used, &other.languages_used)
            && set_equal(&self.name_entries, &other.name_entries)
            && set_equal(&self.occupations, &other.occupations)
            && set_equal(&self.biog_hists, &other.biog_hists)
            && set_equal(&self.relations, &other.relations)
            && set_equal(&self.resource_relations, &other.resource_relations)
            && set_equal(&self.functions, &other.functions)
            && set_equal(&self.places, &other.places)
            && set_equal(&self.subjects, &other.subjects)
            && set_equal(&self.nationalities, &other.nationalities)
            && set_equal(&self.genders, &other.genders)
            && set_equal(&self.general_contexts, &other.general_contexts)
            && set_equal(&self.structure_or_genealogies, &other.structure_or_genealogies)
            && set_equal(&self.mandates, &other.mandates)
    }
}
