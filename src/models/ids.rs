//! Strongly-typed ID wrappers for expenses and budgets
//!
//! Server-issued ids are kept exactly as the server sent them (JSON number or
//! string). Ids synthesized during a local fallback live in their own
//! `local-` namespace so they can never collide with a server id.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

/// Prefix reserved for client-synthesized identifiers
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Raw identifier as it appears on the wire
///
/// Equality and hashing go by the rendered text, so a server id sent as the
/// string `"42"` matches the number `42` typed on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl RecordId {
    /// Build a local identifier from a generator value
    pub fn local(value: i64) -> Self {
        Self::Text(format!("{}{}", LOCAL_ID_PREFIX, value))
    }

    /// Interpret user-supplied text: integers become numeric ids
    pub fn from_text(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(s.to_string()),
        }
    }

    fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Numeric(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Whether this id was synthesized client-side
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Text(s) if s.starts_with(LOCAL_ID_PREFIX))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_text(s))
    }
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RecordId);

        impl $name {
            /// Create a client-side id from a generator value
            pub fn local(value: i64) -> Self {
                Self(RecordId::local(value))
            }

            /// Whether this id was synthesized during a local fallback
            pub fn is_local(&self) -> bool {
                self.0.is_local()
            }

            /// Get the underlying record id
            pub fn as_record(&self) -> &RecordId {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                Self(RecordId::Numeric(n))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(RecordId::from_text(s))
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }
    };
}

define_id!(ExpenseId);
define_id!(BudgetId);

/// Source of client-side identifier values
///
/// Values are wall-clock milliseconds, bumped by one whenever the clock has
/// not advanced past the previous value, so they strictly increase for the
/// lifetime of the generator.
#[derive(Debug, Default)]
pub struct LocalIdGenerator {
    last: AtomicI64,
}

impl LocalIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next strictly increasing value
    pub fn next_value(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or_else(|prev| prev);
        now.max(prev + 1)
    }

    pub fn next_expense_id(&self) -> ExpenseId {
        ExpenseId::local(self.next_value())
    }

    pub fn next_budget_id(&self) -> BudgetId {
        BudgetId::local(self.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_deserialize() {
        let numeric: ExpenseId = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, ExpenseId::from(42));

        let text: BudgetId = serde_json::from_str("\"65f0c2a1\"").unwrap();
        assert_eq!(text.to_string(), "65f0c2a1");
        assert!(!text.is_local());
    }

    #[test]
    fn test_id_serialization_preserves_shape() {
        assert_eq!(serde_json::to_string(&ExpenseId::from(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&ExpenseId::from("abc")).unwrap(),
            "\"abc\""
        );
    }

    #[test]
    fn test_parse_from_cli_text() {
        assert_eq!("12".parse::<BudgetId>().unwrap(), BudgetId::from(12));
        assert!("local-1700000000000"
            .parse::<BudgetId>()
            .unwrap()
            .is_local());
    }

    #[test]
    fn test_text_and_numeric_ids_compare_by_rendering() {
        let from_server: ExpenseId = serde_json::from_str("\"42\"").unwrap();
        let from_cli: ExpenseId = "42".parse().unwrap();
        assert_eq!(from_server, from_cli);
        assert_ne!(from_server, ExpenseId::from(43));

        use std::collections::HashSet;
        let ids: HashSet<RecordId> = [RecordId::Numeric(7), RecordId::Text("7".into())]
            .into_iter()
            .collect();
        assert_eq!(ids.len(), 1);

        // The wire shape is still preserved
        assert_eq!(serde_json::to_string(&from_server).unwrap(), "\"42\"");
    }

    #[test]
    fn test_local_ids_are_namespaced() {
        let id = ExpenseId::local(1_700_000_000_000);
        assert!(id.is_local());
        assert_eq!(id.to_string(), "local-1700000000000");
        assert_ne!(id, ExpenseId::from(1_700_000_000_000));
    }

    #[test]
    fn test_generator_strictly_increases() {
        let generator = LocalIdGenerator::new();
        let mut prev = generator.next_value();
        for _ in 0..1000 {
            let next = generator.next_value();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_generator_is_clock_derived() {
        let before = Utc::now().timestamp_millis();
        let value = LocalIdGenerator::new().next_value();
        assert!(value >= before);
    }
}
