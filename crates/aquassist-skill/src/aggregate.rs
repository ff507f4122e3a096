//! Average and total of one metric across the dataset.

use std::sync::Arc;

use aquassist_core::Dataset;
use serde_json::Value;

use crate::error::AggregateError;

/// Sum and number of contributing records for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub sum: f64,
    pub count: usize,
}

/// Read-only aggregation over the shared dataset.
#[derive(Debug, Clone)]
pub struct Aggregator {
    dataset: Arc<Dataset>,
}

impl Aggregator {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Single pass over all records. A record contributes iff it holds a
    /// non-null value for `key`; a present zero contributes.
    pub fn scan(&self, key: &str) -> Result<Aggregate, AggregateError> {
        let mut sum = 0.0;
        let mut count = 0;
        for (index, record) in self.dataset.records().iter().enumerate() {
            let Some(value) = record.get(key) else {
                continue;
            };
            let number = match value {
                Value::Number(n) => n.as_f64(),
                _ => None,
            }
            .ok_or_else(|| AggregateError::NonNumeric {
                key: key.to_string(),
                index,
            })?;
            sum += number;
            count += 1;
        }
        if !sum.is_finite() {
            return Err(AggregateError::NonFinite {
                key: key.to_string(),
            });
        }
        Ok(Aggregate { sum, count })
    }

    /// Mean value and sample count, or `None` when no record has the metric.
    pub fn average(&self, key: &str) -> Result<Option<(f64, usize)>, AggregateError> {
        let Aggregate { sum, count } = self.scan(key)?;
        if count == 0 {
            return Ok(None);
        }
        Ok(Some((sum / count as f64, count)))
    }

    /// Total value, or `None` when no record has the metric.
    ///
    /// A genuine zero total is reported as `Some(0.0)`.
    pub fn total(&self, key: &str) -> Result<Option<f64>, AggregateError> {
        let Aggregate { sum, count } = self.scan(key)?;
        Ok((count > 0).then_some(sum))
    }
}
