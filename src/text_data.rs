//! Text-valued descriptive facets, including the biographical history.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::record::{
    cleanse_child, versioned_record, DateLimit, Operation, Record, VersionedRecord,
};
use crate::wire;

/// A biographical/historical narrative, one per translation language.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiogHist {
    #[serde(rename = "dataType", default)]
    tag: wire::BiogHistTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl VersionedRecord for BiogHist {
    const DATE_LIMIT: DateLimit = DateLimit::AtMost(0);

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn cleanse_sub_elements(&mut self, op: Option<Operation>) {
        let resolved = op.unwrap_or(Operation::Insert);
        self.record.cleanse(resolved);
        if let Some(language) = self.language.as_mut() {
            cleanse_child(language, resolved);
        }
    }
}

impl PartialEq for BiogHist {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other) && self.text == other.text && self.language == other.language
    }
}

/// Generates a facet that is a versioned record around one text field.
macro_rules! text_facet {
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
            pub text: Option<String>,
        }

        versioned_record!($name, dates: DateLimit::AtMost(0));

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.base_equals(other) && self.text == other.text
            }
        }
    };
}

text_facet! {
    /// A descriptive-rules declaration from the source document.
    ConventionDeclaration, wire::ConventionDeclarationTag
}

text_facet! {
    /// Free-prose context about the described identity.
    GeneralContext, wire::GeneralContextTag
}

text_facet! {
    /// A mandate under which a corporate body operated.
    Mandate, wire::MandateTag
}

text_facet! {
    /// Corporate structure or family genealogy prose.
    StructureOrGenealogy, wire::StructureOrGenealogyTag
}
