//! Sensor reading types and the in-memory reading log
//!
//! One reading type per sensor channel (pH, temperature, moisture, color),
//! each timestamped at creation. `ReadingLog` keeps a bounded history per
//! channel; the station has no persistence layer, so memory is the only store.

use crate::telemetry::Sample;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Soil pH measurement (0.0 - 14.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhReading {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Soil temperature measurement in whole degrees Celsius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub value: i32,
    pub timestamp: DateTime<Utc>,
}

/// Soil moisture measurement as a percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureReading {
    pub value: i32,
    pub timestamp: DateTime<Utc>,
}

/// Soil color sample from the RGB sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReading {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub timestamp: DateTime<Utc>,
}

impl PhReading {
    pub fn new(value: f64) -> Self {
        Self::at(value, Utc::now())
    }

    pub fn at(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }
}

impl TemperatureReading {
    pub fn new(value: i32) -> Self {
        Self::at(value, Utc::now())
    }

    pub fn at(value: i32, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }
}

impl MoistureReading {
    pub fn new(value: i32) -> Self {
        Self::at(value, Utc::now())
    }

    pub fn at(value: i32, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }
}

impl ColorReading {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::at(red, green, blue, Utc::now())
    }

    pub fn at(red: u8, green: u8, blue: u8, timestamp: DateTime<Utc>) -> Self {
        Self {
            red,
            green,
            blue,
            timestamp,
        }
    }
}

/// Bounded in-memory history of readings, one queue per sensor channel.
///
/// Oldest readings are evicted once a channel reaches capacity.
#[derive(Debug, Clone)]
pub struct ReadingLog {
    capacity: usize,
    ph: VecDeque<PhReading>,
    temperature: VecDeque<TemperatureReading>,
    moisture: VecDeque<MoistureReading>,
    color: VecDeque<ColorReading>,
}

impl ReadingLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            ph: VecDeque::with_capacity(capacity),
            temperature: VecDeque::with_capacity(capacity),
            moisture: VecDeque::with_capacity(capacity),
            color: VecDeque::with_capacity(capacity),
        }
    }

    /// Record all four channels of one telemetry sample.
    pub fn record(&mut self, sample: &Sample) {
        self.record_ph(PhReading::new(sample.ph));
        self.record_temperature(TemperatureReading::new(sample.temperature));
        self.record_moisture(MoistureReading::new(sample.moisture));
        self.record_color(ColorReading::new(sample.red, sample.green, sample.blue));
    }

    pub fn record_ph(&mut self, reading: PhReading) {
        push_bounded(&mut self.ph, reading, self.capacity);
    }

    pub fn record_temperature(&mut self, reading: TemperatureReading) {
        push_bounded(&mut self.temperature, reading, self.capacity);
    }

    pub fn record_moisture(&mut self, reading: MoistureReading) {
        push_bounded(&mut self.moisture, reading, self.capacity);
    }

    pub fn record_color(&mut self, reading: ColorReading) {
        push_bounded(&mut self.color, reading, self.capacity);
    }

    pub fn latest_ph(&self) -> Option<&PhReading> {
        self.ph.back()
    }

    pub fn latest_temperature(&self) -> Option<&TemperatureReading> {
        self.temperature.back()
    }

    pub fn latest_moisture(&self) -> Option<&MoistureReading> {
        self.moisture.back()
    }

    pub fn latest_color(&self) -> Option<&ColorReading> {
        self.color.back()
    }

    /// Up to `n` most recent pH readings in chronological order.
    pub fn recent_ph(&self, n: usize) -> impl Iterator<Item = &PhReading> {
        self.ph.iter().skip(self.ph.len().saturating_sub(n))
    }

    /// Up to `n` most recent temperature readings in chronological order.
    pub fn recent_temperature(&self, n: usize) -> impl Iterator<Item = &TemperatureReading> {
        self.temperature
            .iter()
            .skip(self.temperature.len().saturating_sub(n))
    }

    /// Up to `n` most recent moisture readings in chronological order.
    pub fn recent_moisture(&self, n: usize) -> impl Iterator<Item = &MoistureReading> {
        self.moisture
            .iter()
            .skip(self.moisture.len().saturating_sub(n))
    }

    /// Up to `n` most recent color readings in chronological order.
    pub fn recent_color(&self, n: usize) -> impl Iterator<Item = &ColorReading> {
        self.color.iter().skip(self.color.len().saturating_sub(n))
    }

    /// Discard all recorded readings.
    pub fn clear(&mut self) {
        self.ph.clear();
        self.temperature.clear();
        self.moisture.clear();
        self.color.clear();
    }

    /// Number of samples currently held (channels advance together).
    pub fn len(&self) -> usize {
        self.ph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ph.is_empty()
    }
}

fn push_bounded<T>(queue: &mut VecDeque<T>, item: T, capacity: usize) {
    if queue.len() == capacity {
        queue.pop_front();
    }
    queue.push_back(item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::SyntheticStation;

    #[test]
    fn test_record_and_latest() {
        let mut log = ReadingLog::with_capacity(8);
        assert!(log.is_empty());
        assert!(log.latest_ph().is_none());

        let sample = SyntheticStation::sample_at(0.0);
        log.record(&sample);

        assert_eq!(log.len(), 1);
        assert_eq!(log.latest_ph().unwrap().value, sample.ph);
        assert_eq!(log.latest_temperature().unwrap().value, sample.temperature);
        assert_eq!(log.latest_moisture().unwrap().value, sample.moisture);
        assert_eq!(log.latest_color().unwrap().red, sample.red);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = ReadingLog::with_capacity(3);
        for i in 0..5 {
            log.record_ph(PhReading::new(f64::from(i)));
        }

        assert_eq!(log.len(), 3);
        let values: Vec<f64> = log.recent_ph(10).map(|r| r.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_recent_is_chronological_and_capped() {
        let mut log = ReadingLog::with_capacity(10);
        for i in 0..6 {
            log.record_temperature(TemperatureReading::new(i));
        }

        let values: Vec<i32> = log.recent_temperature(3).map(|r| r.value).collect();
        assert_eq!(values, vec![3, 4, 5]);
    }

    #[test]
    fn test_clear() {
        let mut log = ReadingLog::with_capacity(4);
        log.record(&SyntheticStation::sample_at(1.0));
        log.record(&SyntheticStation::sample_at(2.0));
        assert_eq!(log.len(), 2);

        log.clear();
        assert!(log.is_empty());
        assert!(log.latest_moisture().is_none());
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut log = ReadingLog::with_capacity(0);
        log.record_moisture(MoistureReading::new(55));
        assert_eq!(log.latest_moisture().unwrap().value, 55);
    }
}
