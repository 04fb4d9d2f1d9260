use super::value_objects::Timestamp;
use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Domain entity - one sampled counter value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: Timestamp,
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp: Timestamp, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(i64, f64)> for DataPoint {
    fn from((timestamp, value): (i64, f64)) -> Self {
        Self::new(Timestamp::from(timestamp), value)
    }
}

/// Domain entity - immutable, time-ordered series.
///
/// Timestamps are non-decreasing; equal timestamps are kept as-is. Cloning
/// shares the underlying buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Arc<[DataPoint]>,
}

impl Series {
    /// Build a series from points that are already in time order.
    pub fn new(points: Vec<DataPoint>) -> Result<Self, ValidationError> {
        validate_values(&points)?;
        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(ValidationError::UnorderedTimestamps {
                index: index + 1,
                previous: points[index].timestamp.value(),
                actual: points[index + 1].timestamp.value(),
            });
        }
        Ok(Self { points: points.into() })
    }

    /// Build a series from points in any order. The sort is stable, so equal
    /// timestamps keep their arrival order.
    pub fn from_unsorted(mut points: Vec<DataPoint>) -> Result<Self, ValidationError> {
        validate_values(&points)?;
        points.sort_by_key(|p| p.timestamp);
        Ok(Self { points: points.into() })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&DataPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    /// First and last timestamps.
    pub fn extent(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.first()?.timestamp, self.last()?.timestamp))
    }

    /// Points with `start <= timestamp <= end`, in series order.
    pub fn range_slice(&self, start: Timestamp, end: Timestamp) -> &[DataPoint] {
        if start > end {
            return &[];
        }
        let lo = self.points.partition_point(|p| p.timestamp < start);
        let hi = self.points.partition_point(|p| p.timestamp <= end);
        &self.points[lo..hi]
    }

    /// The first `count` points, or the whole series if it is shorter.
    pub fn head(&self, count: usize) -> &[DataPoint] {
        &self.points[..count.min(self.points.len())]
    }
}

fn validate_values(points: &[DataPoint]) -> Result<(), ValidationError> {
    for (index, point) in points.iter().enumerate() {
        if !point.value.is_finite() {
            return Err(ValidationError::NonFiniteValue { index });
        }
        if point.value < 0.0 {
            return Err(ValidationError::NegativeValue { index, value: point.value });
        }
    }
    Ok(())
}
