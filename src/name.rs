//! Name headings for the described identity.
//!
//! A name entry carries the full original heading plus its parsed
//! components, the institutions that contributed it, and a preference
//! score the aggregate uses to pick a display name.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::record::{
    cleanse_child, cleanse_children, versioned_record, DateLimit, Operation, Record,
    VersionedRecord,
};
use crate::term::Term;
use crate::wire;

/// One ordered piece of a parsed name heading (surname, forename, ...).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameComponent {
    #[serde(rename = "dataType", default)]
    tag: wire::NameComponentTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<Term>,
    #[serde(default, skip_serializing_if = "wire::is_zero_i32")]
    pub order: i32,
}

versioned_record!(NameComponent, dates: DateLimit::AtMost(0));

impl PartialEq for NameComponent {
    fn eq(&self, other: &Self) -> bool {
        self.base_equals(other)
            && self.text == other.text
            && self.component_type == other.component_type
            && self.order == other.order
    }
}

/// An institution (or rule set) that contributed a name heading.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[serde(rename = "dataType", default)]
    tag: wire::ContributorTag,
    #[serde(flatten)]
    record: Record,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub name_type: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

versioned_record!(Contributor, dates: DateLimit::AtMost(0));

impl PartialEq for Contributor {
    fn eq(&self, other: &Self) -> bool {
        // rule is carried but not compared
        self.base_equals(other) && self.name_type == other.name_type && self.name == other.name
    }
}

/// One name heading. Admits a single date (the name's use period).
///
/// Components and contributors are owned sub-trees for the cleanse walk
/// but are deliberately not part of equality.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameEntry {
    #[serde(rename = "dataType", default)]
    tag: wire::NameEntryTag,
    #[serde(flatten)]
    record: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "wire::is_zero_f64")]
    pub preference_score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    components: Vec<NameComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    contributors: Vec<Contributor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl NameEntry {
    /// A heading with its full original text.
    pub fn with_original(original: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            ..Self::default()
        }
    }

    pub fn components(&self) -> &[NameComponent] {
        &self.components
    }

    pub fn add_component(&mut self, component: NameComponent) {
        self.components.push(component);
    }

    pub fn set_components(&mut self, components: Vec<NameComponent>) {
        self.components = components;
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn add_contributor(&mut self, contributor: Contributor) {
        self.contributors.push(contributor);
    }

    pub fn set_contributors(&mut self, contributors: Vec<Contributor>) {
        self.contributors = contributors;
    }
}

impl VersionedRecord for NameEntry {
    const DATE_LIMIT: DateLimit = DateLimit::AtMost(1);

    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn cleanse_sub_elements(&mut self, op: Option<Operation>) {
        let resolved = op.unwrap_or(Operation::Insert);
        self.record.cleanse(resolved);
        cleanse_children(&mut self.contributors, resolved);
        cleanse_children(&mut self.components, resolved);
        if let Some(language) = self.language.as_mut() {
            cleanse_child(language, resolved);
        }
    }
}

impl PartialEq for NameEntry {
    fn eq(&self, other: &Self) -> bool {
        // components and contributors are not compared
        self.base_equals(other)
            && self.original == other.original
            && self.preference_score == other.preference_score
            && self.language == other.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_do_not_affect_equality() {
        let mut a = NameEntry::with_original("Washington, George");
        a.add_component(NameComponent {
            text: Some("Washington".into()),
            order: 1,
            ..NameComponent::default()
        });
        let b = NameEntry::with_original("Washington, George");
        assert_eq!(a, b);
    }

    #[test]
    fn preference_score_affects_equality() {
        let mut a = NameEntry::with_original("n");
        a.preference_score = 0.9;
        let b = NameEntry::with_original("n");
        assert_ne!(a, b);
    }

    #[test]
    fn cleanse_reaches_components_contributors_and_language() {
        let mut entry = NameEntry::with_original("n");
        let mut component = NameComponent::default();
        component.set_id(5);
        component.set_version(2);
        entry.add_component(component);
        let mut contributor = Contributor::default();
        contributor.set_id(6);
        entry.add_contributor(contributor);
        let mut language = Language::default();
        language.set_id(7);
        entry.language = Some(language);

        entry.cleanse_sub_elements(Some(Operation::Update));

        let component = &entry.components()[0];
        assert_eq!((component.id(), component.version()), (0, 0));
        assert_eq!(component.operation(), Some(Operation::Update));
        assert_eq!(entry.contributors()[0].id(), 0);
        let language = entry.language.as_ref().unwrap();
        assert_eq!(language.id(), 0);
        assert_eq!(language.operation(), Some(Operation::Update));
    }

    #[test]
    fn contributor_rule_is_excluded_from_equality() {
        let mut a = Contributor::default();
        a.rule = Some(Term::from_vocabulary(9, "AACR2"));
        let b = Contributor::default();
        assert_eq!(a, b);
    }

    #[test]
    fn name_entry_admits_one_date() {
        use crate::date::SnacDate;
        let mut entry = NameEntry::default();
        assert!(entry.add_date(SnacDate::default()).is_ok());
        assert!(entry.add_date(SnacDate::default()).is_err());
        assert_eq!(entry.dates().len(), 1);
    }
}
