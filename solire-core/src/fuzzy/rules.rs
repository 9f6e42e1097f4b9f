//! Crop database and per-crop fuzzy rule sets
//!
//! Seven staple food crops with their agronomic ranges and the Mamdani rules
//! that grade soil suitability for each. AND antecedents combine by min, OR
//! antecedents by max.

use super::membership::{HumidityLevel, MembershipFn, PhLevel, TempLevel};
use super::SoilInput;

/// One fuzzy proposition over a single input variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Ph(PhLevel),
    Temp(TempLevel),
    Humidity(HumidityLevel),
}

impl Term {
    pub fn degree(&self, input: &SoilInput) -> f64 {
        match self {
            Self::Ph(level) => level.membership().degree(input.ph),
            Self::Temp(level) => level.membership().degree(input.temperature),
            Self::Humidity(level) => level.membership().degree(input.humidity),
        }
    }
}

/// Rule antecedent: conjunction (min) or disjunction (max) of terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Antecedent {
    AllOf(&'static [Term]),
    AnyOf(&'static [Term]),
}

impl Antecedent {
    pub fn degree(&self, input: &SoilInput) -> f64 {
        match self {
            Self::AllOf(terms) => terms
                .iter()
                .map(|t| t.degree(input))
                .fold(1.0, f64::min),
            Self::AnyOf(terms) => terms
                .iter()
                .map(|t| t.degree(input))
                .fold(0.0, f64::max),
        }
    }
}

/// Suitability grade a rule concludes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitability {
    Unsuitable,
    Moderate,
    Suitable,
}

impl Suitability {
    /// Output membership function over the suitability universe [0, 1].
    pub fn membership(&self) -> MembershipFn {
        match self {
            Self::Unsuitable => MembershipFn::Triangle {
                a: 0.0,
                b: 0.0,
                c: 0.3,
            },
            Self::Moderate => MembershipFn::Triangle {
                a: 0.2,
                b: 0.5,
                c: 0.8,
            },
            Self::Suitable => MembershipFn::Triangle {
                a: 0.7,
                b: 1.0,
                c: 1.0,
            },
        }
    }
}

/// IF antecedent THEN suitability grade.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub when: Antecedent,
    pub then: Suitability,
}

/// A crop with its preferred ranges and rule set.
#[derive(Debug, Clone, Copy)]
pub struct Crop {
    pub name: &'static str,
    pub ph_range: (f64, f64),
    pub temp_range: (f64, f64),
    pub humidity_range: (f64, f64),
    pub rules: &'static [Rule],
}

use HumidityLevel::{High, Low, Medium};
use PhLevel::{Acidic, Alkaline, Neutral};
use TempLevel::{Cold, Hot, Normal};

/// Staple food crop database.
pub const CROPS: &[Crop] = &[
    Crop {
        name: "Rice",
        ph_range: (6.0, 7.0),
        temp_range: (24.0, 29.0),
        humidity_range: (60.0, 90.0),
        rules: &[
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(High),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Acidic),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Moderate,
            },
            Rule {
                when: Antecedent::AnyOf(&[
                    Term::Ph(Alkaline),
                    Term::Temp(Cold),
                    Term::Humidity(Low),
                ]),
                then: Suitability::Unsuitable,
            },
        ],
    },
    Crop {
        name: "Maize",
        ph_range: (5.8, 8.0),
        temp_range: (21.0, 34.0),
        humidity_range: (50.0, 80.0),
        rules: &[
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Hot),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Alkaline),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Moderate,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Acidic),
                    Term::Temp(Cold),
                    Term::Humidity(Low),
                ]),
                then: Suitability::Unsuitable,
            },
        ],
    },
    Crop {
        name: "Soybean",
        ph_range: (6.0, 7.0),
        temp_range: (20.0, 25.0),
        humidity_range: (60.0, 80.0),
        rules: &[
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Cold),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Moderate,
            },
            Rule {
                when: Antecedent::AnyOf(&[
                    Term::Ph(Acidic),
                    Term::Temp(Hot),
                    Term::Humidity(Low),
                ]),
                then: Suitability::Unsuitable,
            },
        ],
    },
    Crop {
        name: "Peanut",
        ph_range: (5.8, 7.0),
        temp_range: (23.0, 33.0),
        humidity_range: (65.0, 75.0),
        rules: &[
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Hot),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Acidic),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Moderate,
            },
            Rule {
                when: Antecedent::AnyOf(&[
                    Term::Ph(Alkaline),
                    Term::Temp(Cold),
                    Term::Humidity(High),
                ]),
                then: Suitability::Unsuitable,
            },
        ],
    },
    Crop {
        name: "Mung bean",
        ph_range: (6.0, 7.0),
        temp_range: (25.0, 35.0),
        humidity_range: (50.0, 80.0),
        rules: &[
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Hot),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(Low),
                ]),
                then: Suitability::Moderate,
            },
            Rule {
                when: Antecedent::AnyOf(&[
                    Term::Ph(Acidic),
                    Term::Temp(Cold),
                    Term::Humidity(High),
                ]),
                then: Suitability::Unsuitable,
            },
        ],
    },
    Crop {
        name: "Cassava",
        ph_range: (4.5, 8.0),
        temp_range: (24.0, 30.0),
        humidity_range: (70.0, 85.0),
        rules: &[
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Acidic),
                    Term::Temp(Normal),
                    Term::Humidity(High),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Alkaline),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Moderate,
            },
            Rule {
                when: Antecedent::AnyOf(&[Term::Temp(Cold), Term::Humidity(Low)]),
                then: Suitability::Unsuitable,
            },
        ],
    },
    Crop {
        name: "Sweet potato",
        ph_range: (5.5, 8.0),
        temp_range: (21.0, 27.0),
        humidity_range: (65.0, 80.0),
        rules: &[
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Neutral),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Suitable,
            },
            Rule {
                when: Antecedent::AllOf(&[
                    Term::Ph(Alkaline),
                    Term::Temp(Normal),
                    Term::Humidity(Medium),
                ]),
                then: Suitability::Moderate,
            },
            Rule {
                when: Antecedent::AnyOf(&[
                    Term::Ph(Acidic),
                    Term::Temp(Hot),
                    Term::Humidity(Low),
                ]),
                then: Suitability::Unsuitable,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_crop_covers_both_extremes() {
        for crop in CROPS {
            assert!(
                crop.rules.iter().any(|r| r.then == Suitability::Suitable),
                "{} has no suitable rule",
                crop.name
            );
            assert!(
                crop.rules.iter().any(|r| r.then == Suitability::Unsuitable),
                "{} has no unsuitable rule",
                crop.name
            );
        }
    }

    #[test]
    fn test_antecedent_min_max_semantics() {
        let input = SoilInput {
            ph: 6.5,         // neutral = 1.0, acidic = 0.0
            temperature: 21.5, // cold ~ 0.3, normal ~ 0.214
            humidity: 70.0,  // medium = 1.0, low = 0.0
        };

        let all = Antecedent::AllOf(&[
            Term::Ph(PhLevel::Neutral),
            Term::Temp(TempLevel::Normal),
            Term::Humidity(HumidityLevel::Medium),
        ]);
        let normal_at = TempLevel::Normal.membership().degree(21.5);
        assert!((all.degree(&input) - normal_at).abs() < 1e-9);

        let any = Antecedent::AnyOf(&[
            Term::Ph(PhLevel::Acidic),
            Term::Temp(TempLevel::Cold),
            Term::Humidity(HumidityLevel::Low),
        ]);
        let cold_at = TempLevel::Cold.membership().degree(21.5);
        assert!((any.degree(&input) - cold_at).abs() < 1e-9);
    }

    #[test]
    fn test_ranges_are_ordered() {
        for crop in CROPS {
            assert!(crop.ph_range.0 < crop.ph_range.1, "{}", crop.name);
            assert!(crop.temp_range.0 < crop.temp_range.1, "{}", crop.name);
            assert!(
                crop.humidity_range.0 < crop.humidity_range.1,
                "{}",
                crop.name
            );
        }
    }
}
