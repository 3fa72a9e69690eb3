//! Language-and-script pairs attached to descriptive content.

use serde::{Deserialize, Serialize};

use crate::record::{versioned_record, DateLimit, Record, VersionedRecord};
use crate::term::Term;
use crate::wire;

/// A language (and optional script) in which some piece of content is
/// expressed, both as vocabulary terms.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(rename = "dataType", default)]
    tag: wire::LanguageTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

versioned_record!(Language, dates: DateLimit::AtMost(0));

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.language == other.language
            && self.script == other.script
            && self.vocabulary_source == other.vocabulary_source
            && self.note == other.note
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_null_safe_per_field() {
        let mut a = Language::default();
        let b = Language::default();
        assert_eq!(a, b);

        a.script = Some(Term::from_vocabulary(4, "Latn"));
        assert_ne!(a, b);
    }
}
