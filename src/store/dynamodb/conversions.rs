//! DynamoDB attribute conversion functions.
//!
//! Pure functions between JSON records and DynamoDB `AttributeValue` maps,
//! testable without a DynamoDB endpoint.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value as JsonValue};

use crate::store::{Record, StoreError, StoreResult};

/// Convert a JSON record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    record
        .iter()
        .map(|(name, value)| (name.clone(), json_to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB item to a JSON record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> StoreResult<Record> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_json(value)?)))
        .collect()
}

fn json_to_attribute(value: &JsonValue) -> AttributeValue {
    match value {
        JsonValue::Null => AttributeValue::Null(true),
        JsonValue::Bool(b) => AttributeValue::Bool(*b),
        JsonValue::Number(n) => AttributeValue::N(n.to_string()),
        JsonValue::String(s) => AttributeValue::S(s.clone()),
        JsonValue::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        JsonValue::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

fn attribute_to_json(value: &AttributeValue) -> StoreResult<JsonValue> {
    match value {
        AttributeValue::Null(_) => Ok(JsonValue::Null),
        AttributeValue::Bool(b) => Ok(JsonValue::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(JsonValue::Number),
        AttributeValue::S(s) => Ok(JsonValue::String(s.clone())),
        AttributeValue::Ss(values) => Ok(JsonValue::Array(
            values.iter().cloned().map(JsonValue::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(JsonValue::Number))
            .collect::<StoreResult<Vec<_>>>()
            .map(JsonValue::Array),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<StoreResult<Vec<_>>>()
            .map(JsonValue::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), attribute_to_json(v)?)))
            .collect::<StoreResult<Record>>()
            .map(JsonValue::Object),
        other => Err(StoreError::new(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// DynamoDB numbers travel as strings; integers stay integers.
fn parse_number(raw: &str) -> StoreResult<Number> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Number::from(i));
    }

    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| StoreError::new(format!("Invalid number attribute: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: JsonValue) -> Record {
        match value {
            JsonValue::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_photographer_record_to_item() {
        let item = record_to_item(&record(json!({
            "id": 1,
            "name": "Rajesh Kumar",
            "rating": 4.9
        })));

        assert_eq!(item.get("id"), Some(&AttributeValue::N("1".to_string())));
        assert_eq!(
            item.get("name"),
            Some(&AttributeValue::S("Rajesh Kumar".to_string()))
        );
        assert_eq!(item.get("rating"), Some(&AttributeValue::N("4.9".to_string())));
    }

    #[test]
    fn test_item_to_record_numbers() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::N("3".to_string()));
        item.insert("rating".to_string(), AttributeValue::N("4.7".to_string()));

        let record = item_to_record(&item).unwrap();
        assert_eq!(record["id"], json!(3));
        assert!(record["id"].is_i64());
        assert_eq!(record["rating"], json!(4.7));
    }

    #[test]
    fn test_nested_values() {
        let original = record(json!({
            "features": ["Online gallery", "USB drive"],
            "meta": { "flag": true, "note": null }
        }));

        let item = record_to_item(&original);
        assert!(matches!(item.get("features"), Some(AttributeValue::L(_))));
        assert!(matches!(item.get("meta"), Some(AttributeValue::M(_))));
        assert_eq!(item_to_record(&item).unwrap(), original);
    }

    #[test]
    fn test_string_set_becomes_array() {
        let mut item = HashMap::new();
        item.insert(
            "tags".to_string(),
            AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]),
        );

        let record = item_to_record(&item).unwrap();
        assert_eq!(record["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::N("NaN-ish".to_string()));

        let err = item_to_record(&item).unwrap_err();
        assert!(err.message.contains("Invalid number attribute"));
    }
}
