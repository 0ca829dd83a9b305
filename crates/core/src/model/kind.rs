//! Transaction kind normalization.
//!
//! The household API reports a transaction's kind either as the tag
//! `"Receita"`/`"Despesa"` or as the integer code `2`/`1`, depending on the
//! endpoint. Every sum in this crate goes through [`KindValue::classify`].

use serde::{Deserialize, Serialize};

/// Normalized two-valued transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in; increases the balance.
    #[serde(rename = "Receita", alias = "Income")]
    Income,
    /// Money going out; decreases the balance.
    #[serde(rename = "Despesa", alias = "Expense")]
    Expense,
}

impl TransactionKind {
    /// Integer code used by the household API (`1` = expense, `2` = income).
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Expense => 1,
            Self::Income => 2,
        }
    }

    /// Tag used by the household API.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match KindValue::Tag(s.to_string()).recognize() {
            Some(kind) => Ok(kind),
            None => Err(format!("Unknown transaction kind: {s}")),
        }
    }
}

/// Raw kind value exactly as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindValue {
    /// Integer code (`1` = expense, `2` = income).
    Code(i64),
    /// Symbolic tag (`"Receita"`, `"Despesa"`, or the English aliases).
    Tag(String),
    /// Anything else (`null`, a float, an object); never recognized.
    Other(serde_json::Value),
}

impl Default for KindValue {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl KindValue {
    /// Returns the kind if the value is a known tag or code.
    ///
    /// Tags are compared case-insensitively after trimming.
    #[must_use]
    pub fn recognize(&self) -> Option<TransactionKind> {
        match self {
            Self::Code(2) => Some(TransactionKind::Income),
            Self::Code(1) => Some(TransactionKind::Expense),
            Self::Code(_) | Self::Other(_) => None,
            Self::Tag(tag) => match tag.trim().to_lowercase().as_str() {
                "receita" | "income" => Some(TransactionKind::Income),
                "despesa" | "expense" => Some(TransactionKind::Expense),
                _ => None,
            },
        }
    }

    /// Normalizes the value to a kind; anything unrecognized counts as an expense.
    #[must_use]
    pub fn classify(&self) -> TransactionKind {
        self.recognize().unwrap_or(TransactionKind::Expense)
    }

    /// Returns true if the value is a known tag or code.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.recognize().is_some()
    }
}

impl From<TransactionKind> for KindValue {
    fn from(kind: TransactionKind) -> Self {
        Self::Tag(kind.tag().to_string())
    }
}

impl std::fmt::Display for KindValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Tag(tag) => write!(f, "{tag:?}"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KindValue::Tag("Receita".into()), TransactionKind::Income)]
    #[case(KindValue::Tag("Despesa".into()), TransactionKind::Expense)]
    #[case(KindValue::Tag("income".into()), TransactionKind::Income)]
    #[case(KindValue::Tag(" EXPENSE ".into()), TransactionKind::Expense)]
    #[case(KindValue::Code(2), TransactionKind::Income)]
    #[case(KindValue::Code(1), TransactionKind::Expense)]
    fn test_classify_recognized(#[case] raw: KindValue, #[case] expected: TransactionKind) {
        assert!(raw.is_recognized());
        assert_eq!(raw.classify(), expected);
    }

    #[rstest]
    #[case(KindValue::Code(0))]
    #[case(KindValue::Code(3))]
    #[case(KindValue::Code(-1))]
    #[case(KindValue::Tag(String::new()))]
    #[case(KindValue::Tag("Transferência".into()))]
    #[case(KindValue::Other(serde_json::Value::Null))]
    #[case(KindValue::Other(serde_json::json!(2.5)))]
    fn test_unrecognized_defaults_to_expense(#[case] raw: KindValue) {
        assert!(!raw.is_recognized());
        assert_eq!(raw.classify(), TransactionKind::Expense);
    }

    #[test]
    fn test_kind_value_deserializes_both_representations() {
        let code: KindValue = serde_json::from_str("2").unwrap();
        assert_eq!(code, KindValue::Code(2));

        let tag: KindValue = serde_json::from_str("\"Despesa\"").unwrap();
        assert_eq!(tag, KindValue::Tag("Despesa".into()));
    }

    #[test]
    fn test_kind_value_keeps_other_json_values() {
        let null: KindValue = serde_json::from_str("null").unwrap();
        assert_eq!(null, KindValue::Other(serde_json::Value::Null));
        assert_eq!(null.to_string(), "null");

        let object: KindValue = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert!(!object.is_recognized());
        assert_eq!(object.classify(), TransactionKind::Expense);
    }

    #[test]
    fn test_transaction_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"Receita\""
        );
        let kind: TransactionKind = serde_json::from_str("\"Expense\"").unwrap();
        assert_eq!(kind, TransactionKind::Expense);
    }

    #[test]
    fn test_codes_and_parse() {
        assert_eq!(TransactionKind::Expense.code(), 1);
        assert_eq!(TransactionKind::Income.code(), 2);
        assert_eq!(
            "despesa".parse::<TransactionKind>(),
            Ok(TransactionKind::Expense)
        );
        assert!("other".parse::<TransactionKind>().is_err());
    }
}
