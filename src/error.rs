//! Model errors (rejected invariants).
//!
//! These are bounded and stable: every variant names one invariant an
//! operation refused to violate. A failed setter returns `Err` and leaves
//! prior state untouched.

use thiserror::Error;

use crate::record::DateLimit;

/// Canonical error enum for the record model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("date list limit is {limit}, refused growing to {attempted}")]
    DateLimitExceeded { limit: DateLimit, attempted: usize },

    #[error("preferred name entry is not one of this constellation's name entries")]
    PreferredNameNotKnown,

    #[error("place has no geographic term attached, cannot set confirmation")]
    NoGeoTerm,

    #[error("ark identifier is empty")]
    EmptyArk,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_invariant() {
        let err = ModelError::DateLimitExceeded {
            limit: DateLimit::AtMost(1),
            attempted: 2,
        };
        assert_eq!(
            err.to_string(),
            "date list limit is at most 1, refused growing to 2"
        );
        assert!(ModelError::NoGeoTerm.to_string().contains("geographic term"));
    }
}
