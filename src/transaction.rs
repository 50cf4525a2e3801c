use crate::error::ApiError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A JSON value shown exactly as the backend sent it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Verbatim(pub Value);

impl fmt::Display for Verbatim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Null => Ok(()),
            other => write!(f, "{}", other),
        }
    }
}

/// One ledger entry, display-only
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: Verbatim,
    #[serde(default)]
    pub date: Verbatim,
    #[serde(default)]
    pub amount: Verbatim,
    #[serde(default)]
    pub description: Verbatim,
}

impl TransactionRecord {
    /// List item text: `date: amount - description`
    pub fn line(&self) -> String {
        format!("{}: {} - {}", self.date, self.amount, self.description)
    }
}

/// The history endpoint must answer with a JSON array of records
pub fn parse_records(payload: Value) -> Result<Vec<TransactionRecord>, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_are_kept_verbatim() {
        let records = parse_records(json!([
            {"id": "a1", "date": "2024-05-01", "amount": 50, "description": "rent"},
            {"id": 2, "date": "2024-05-02", "amount": "-12.50", "description": "coffee"},
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line(), "2024-05-01: 50 - rent");
        assert_eq!(records[1].line(), "2024-05-02: -12.50 - coffee");
        assert_eq!(records[1].id.to_string(), "2");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let records = parse_records(json!([{"amount": 5}])).unwrap();
        assert_eq!(records[0].line(), ": 5 - ");
    }

    #[test]
    fn test_non_array_is_a_decode_error() {
        let err = parse_records(Value::String("| id | amount |".to_string())).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
