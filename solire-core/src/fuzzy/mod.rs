//! Mamdani fuzzy inference for crop recommendation
//!
//! Grades soil suitability for each crop in the database from three inputs
//! (pH, temperature, humidity): rule activations clip the output membership
//! functions (min implication), the clipped sets aggregate by max, and the
//! centroid of the aggregate is the crop's suitability score. A crop whose
//! rules all fire at zero scores 0.0.

pub mod membership;
pub mod rules;

use rules::{Crop, CROPS};
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;

/// Sampling step over the suitability universe [0, 1] during defuzzification.
const UNIVERSE_STEP: f64 = 0.01;

/// Validated sensor inputs to the inference system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilInput {
    /// Soil pH, 0 - 14.
    pub ph: f64,
    /// Temperature in °C, 0 - 50.
    pub temperature: f64,
    /// Relative humidity in percent, 0 - 100.
    pub humidity: f64,
}

impl SoilInput {
    pub fn validate(&self) -> Result<(), FuzzyError> {
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(FuzzyError::PhOutOfRange(self.ph));
        }
        if !(0.0..=50.0).contains(&self.temperature) {
            return Err(FuzzyError::TemperatureOutOfRange(self.temperature));
        }
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(FuzzyError::HumidityOutOfRange(self.humidity));
        }
        Ok(())
    }
}

/// Input validation failures.
#[derive(Debug, Error, PartialEq)]
pub enum FuzzyError {
    #[error("pH value must be between 0 and 14 (got {0})")]
    PhOutOfRange(f64),

    #[error("temperature must be between 0 and 50 °C (got {0})")]
    TemperatureOutOfRange(f64),

    #[error("humidity must be between 0 and 100 % (got {0})")]
    HumidityOutOfRange(f64),
}

/// Confidence tier derived from a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
    VeryLow,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else if score >= 0.2 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::High => "Highly Suitable",
            Self::Medium => "Moderately Suitable",
            Self::Low => "Possibly Suitable",
            Self::VeryLow => "Not Suitable",
        }
    }
}

/// One crop's graded suitability.
#[derive(Debug, Clone, Serialize)]
pub struct CropScore {
    pub crop: &'static str,
    /// Defuzzified suitability, rounded to three decimals.
    pub score: f64,
    pub confidence: Confidence,
}

/// Ranked recommendation for a set of soil conditions.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub input: SoilInput,
    /// All crops, best first.
    pub ranked: Vec<CropScore>,
    pub summary: String,
}

impl Recommendation {
    pub fn top(&self) -> Option<&CropScore> {
        self.ranked.first()
    }
}

/// Grade all crops for the given soil conditions.
pub fn recommend(input: SoilInput) -> Result<Recommendation, FuzzyError> {
    input.validate()?;

    let mut ranked: Vec<CropScore> = CROPS
        .iter()
        .map(|crop| {
            let score = round3(suitability(crop, &input));
            CropScore {
                crop: crop.name,
                score,
                confidence: Confidence::from_score(score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let summary = summarize(&ranked);
    Ok(Recommendation {
        input,
        ranked,
        summary,
    })
}

/// Mamdani inference for one crop: clip, aggregate, centroid.
fn suitability(crop: &Crop, input: &SoilInput) -> f64 {
    let activations: Vec<(f64, rules::Suitability)> = crop
        .rules
        .iter()
        .map(|rule| (rule.when.degree(input), rule.then))
        .filter(|(w, _)| *w > 0.0)
        .collect();

    if activations.is_empty() {
        return 0.0;
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    let steps = (1.0 / UNIVERSE_STEP).round() as usize;
    for i in 0..=steps {
        let z = i as f64 * UNIVERSE_STEP;
        let mut mu: f64 = 0.0;
        for (weight, grade) in &activations {
            mu = mu.max(grade.membership().degree(z).min(*weight));
        }
        numerator += z * mu;
        denominator += mu;
    }

    if denominator <= f64::EPSILON {
        0.0
    } else {
        numerator / denominator
    }
}

fn summarize(ranked: &[CropScore]) -> String {
    let top = match ranked.first() {
        Some(top) if top.score >= 0.2 => top,
        _ => {
            return "Current soil conditions are not optimal for any of the analyzed crops. \
                    Consider soil amendment or different crop selection."
                .to_string()
        }
    };

    let suitable: Vec<&CropScore> = ranked.iter().filter(|c| c.score >= 0.4).collect();
    match suitable.len() {
        0 => format!(
            "{} is the best option available, though conditions are not optimal.",
            top.crop
        ),
        1 => format!(
            "{} is recommended with {} confidence (score: {}).",
            top.crop,
            top.confidence.label().to_lowercase(),
            top.score
        ),
        _ => {
            let names: Vec<&str> = suitable.iter().take(3).map(|c| c.crop).collect();
            format!(
                "Multiple suitable options: {}. {} has the highest suitability.",
                names.join(", "),
                top.crop
            )
        }
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
