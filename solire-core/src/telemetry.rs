//! Synthetic telemetry source
//!
//! Stands in for the station's sensor hardware: deterministic waveforms over
//! elapsed time, so the dashboard has live-looking data without any backend.
//! `sample_at` is pure; `SyntheticStation` just tracks its own epoch.

use std::time::Instant;

/// One reading of all four sensor channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub ph: f64,
    pub temperature: i32,
    pub moisture: i32,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Waveform-based sample generator.
#[derive(Debug, Clone)]
pub struct SyntheticStation {
    started: Instant,
}

impl SyntheticStation {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Sample the station at the current wall-clock offset.
    pub fn sample(&self) -> Sample {
        Self::sample_at(self.started.elapsed().as_secs_f64())
    }

    /// Deterministic sample for an elapsed time in seconds.
    ///
    /// Slow primary waves with a faster ripple on top; all channels are
    /// clamped to their sensor ranges.
    pub fn sample_at(t: f64) -> Sample {
        let ph = (6.4 + 0.9 * (t / 47.0).sin() + 0.15 * (t / 7.3).sin()).clamp(0.0, 14.0);

        let temperature = (26.0 + 4.5 * (t / 131.0).sin() + 0.8 * (t / 11.0).cos())
            .round()
            .clamp(0.0, 50.0) as i32;

        let moisture = (68.0 + 14.0 * (t / 89.0).sin() + 2.0 * (t / 13.0).sin())
            .round()
            .clamp(0.0, 100.0) as i32;

        // Soil darkens as it wets: scale a loam base color by moisture.
        let wetness = f64::from(moisture) / 100.0;
        let red = scale_channel(139, wetness);
        let green = scale_channel(101, wetness);
        let blue = scale_channel(61, wetness);

        Sample {
            ph,
            temperature,
            moisture,
            red,
            green,
            blue,
        }
    }
}

impl Default for SyntheticStation {
    fn default() -> Self {
        Self::new()
    }
}

fn scale_channel(base: u8, wetness: f64) -> u8 {
    // 60% brightness when saturated, full when bone dry.
    let factor = 1.0 - 0.4 * wetness;
    (f64::from(base) * factor).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_sensor_ranges() {
        let mut t = 0.0;
        while t < 600.0 {
            let s = SyntheticStation::sample_at(t);
            assert!((0.0..=14.0).contains(&s.ph), "ph out of range at t={}", t);
            assert!(
                (0..=50).contains(&s.temperature),
                "temperature out of range at t={}",
                t
            );
            assert!(
                (0..=100).contains(&s.moisture),
                "moisture out of range at t={}",
                t
            );
            t += 0.5;
        }
    }

    #[test]
    fn test_sample_at_is_deterministic() {
        assert_eq!(
            SyntheticStation::sample_at(123.4),
            SyntheticStation::sample_at(123.4)
        );
    }

    #[test]
    fn test_color_darkens_when_wetter() {
        // Compare the dry extreme against the wet extreme of the base color.
        let dry = scale_channel(139, 0.0);
        let wet = scale_channel(139, 1.0);
        assert!(wet < dry);
    }
}
