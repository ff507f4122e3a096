//! Consumption dataset store.
//!
//! The dataset is a JSON array of flat objects, one per reading, mapping a
//! metric key to a number. It is loaded once at startup and shared
//! read-only for the lifetime of the process.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::error::{AquaError, Result};

/// One reading: metric key -> value. Keys are optional per record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a numeric metric.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        let value = serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.0.insert(key.into(), value);
        self
    }

    /// Builder-style insert of a raw JSON value.
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// The value stored under `key`. A JSON `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered, immutable sequence of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// An empty dataset; every aggregation over it reports no data.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a dataset from JSON text.
    ///
    /// The document must be a non-empty array of objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(AquaError::Dataset("dataset contains no records".to_string()));
        }
        Ok(Self { records })
    }

    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            "Dataset loaded successfully"
        );
        Ok(dataset)
    }

    /// Load a dataset, continuing with an empty one if loading fails.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error loading dataset");
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_dataset(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_json_str_keeps_order() {
        let dataset =
            Dataset::from_json_str(r#"[{"a": 1}, {"a": 2, "b": 3.5}, {"b": 0}]"#).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].get("a"), Some(&json!(1)));
        assert_eq!(dataset.records()[1].get("b"), Some(&json!(3.5)));
        assert!(!dataset.records()[2].contains("a"));
    }

    #[test]
    fn test_null_value_counts_as_absent() {
        let dataset = Dataset::from_json_str(r#"[{"a": null, "b": 0}]"#).unwrap();
        let record = &dataset.records()[0];
        assert!(!record.contains("a"));
        assert!(record.contains("b"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let err = Dataset::from_json_str("[]").unwrap_err();
        assert!(matches!(err, AquaError::Dataset(_)));
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = Dataset::from_json_str(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, AquaError::Serialization(_)));
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        assert!(Dataset::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = temp_dataset(r#"[{"Group_4_pumps_to_Scale_Pit_Consumption": 12.5}]"#);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let dataset = Dataset::load_or_empty(Path::new("/does/not/exist/water_data.json"));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_load_or_empty_malformed_file() {
        let file = temp_dataset("[{\"a\": 1},");
        let dataset = Dataset::load_or_empty(file.path());
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new()
            .with("a", 10.0)
            .with_value("b", json!("n/a"));
        assert_eq!(record.get("a").and_then(Value::as_f64), Some(10.0));
        assert_eq!(record.get("b"), Some(&json!("n/a")));
    }

    #[test]
    fn test_record_builder_non_finite_becomes_absent() {
        let record = Record::new().with("a", f64::NAN);
        assert!(!record.contains("a"));
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let dataset =
            Dataset::from_json_str(include_str!("../../../documents/water_data.json")).unwrap();
        assert_eq!(dataset.len(), 24);
        let with_scale_pit = dataset
            .records()
            .iter()
            .filter(|r| r.contains("Group_4_pumps_to_Scale_Pit_Consumption"))
            .count();
        assert_eq!(with_scale_pit, 24);
    }
}
