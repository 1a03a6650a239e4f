use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a backend-owned entity.
///
/// The backend generates numeric ids; the frontend only carries them around
/// in URLs and tab keys, so the string round-trip is all it needs.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a transparent `i64` id newtype implementing [`AggregateId`].
#[macro_export]
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid id '{}': {}", s, e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    numeric_id!(TestId);

    #[test]
    fn parses_trimmed_numeric_ids() {
        assert_eq!(TestId::from_string(" 42 ").unwrap(), TestId(42));
        assert_eq!(TestId(7).as_string(), "7");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(TestId::from_string("abc").is_err());
    }

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&TestId(5)).unwrap(), "5");
    }
}
