//! In-memory record model for archival identity constellations.
//!
//! A constellation gathers everything known about one identity described
//! in EAC-CPF records: its name headings, biographical prose, controlled
//! vocabulary assertions, places, relations to other identities, and
//! links to archival resources. Every entity is a versioned record and
//! the whole tree round-trips through a stable JSON encoding.
//!
//! Layering (leaves first):
//! - `error`: the model error enum
//! - `wire`: JSON encoding helpers and `dataType` tag markers
//! - `record`: the embedded record base and `VersionedRecord` trait
//! - `term`, `date`, `language`, `source`, `metadata`: shared leaves
//! - `name`, `place`, `identifiers`, `resource`, `relation`,
//!   `text_data`, `term_data`: descriptive facets
//! - `constellation`: the aggregate root

#![forbid(unsafe_code)]

mod constellation;
mod date;
mod error;
mod identifiers;
mod language;
mod metadata;
mod name;
mod place;
mod record;
mod relation;
mod resource;
mod source;
mod term;
mod term_data;
mod text_data;
mod wire;

pub use constellation::Constellation;
pub use date::{FuzzyRange, SnacDate};
pub use error::ModelError;
pub use identifiers::{Ark, EntityId, SameAs};
pub use language::Language;
pub use metadata::{ControlMetadata, Image, MaintenanceEvent};
pub use name::{Contributor, NameComponent, NameEntry};
pub use place::{AddressLine, Place};
pub use record::{DateLimit, Operation, Record, VersionedRecord};
pub use relation::ConstellationRelation;
pub use resource::{OriginationName, Resource, ResourceRelation};
pub use source::Source;
pub use term::{GeoTerm, Term};
pub use term_data::{Gender, LegalStatus, Nationality, Occupation, SnacFunction, Subject};
pub use text_data::{
    BiogHist, ConventionDeclaration, GeneralContext, Mandate, StructureOrGenealogy,
};
