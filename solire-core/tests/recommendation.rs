//! End-to-end tests: telemetry samples through the log into the recommender

use solire_core::{recommend, ReadingLog, SoilInput, SyntheticStation};

/// Build a recommendation from the latest logged readings, the way the
/// dashboard does.
fn recommend_from_log(log: &ReadingLog) -> solire_core::Recommendation {
    let input = SoilInput {
        ph: log.latest_ph().unwrap().value,
        temperature: f64::from(log.latest_temperature().unwrap().value),
        humidity: f64::from(log.latest_moisture().unwrap().value),
    };
    recommend(input).unwrap()
}

#[test]
fn synthetic_samples_always_produce_a_recommendation() {
    let mut log = ReadingLog::with_capacity(16);

    // The station's waveforms stay within sensor ranges, so validation must
    // never reject a logged sample.
    let mut t = 0.0;
    while t < 400.0 {
        log.record(&SyntheticStation::sample_at(t));
        let rec = recommend_from_log(&log);
        assert_eq!(rec.ranked.len(), 7);
        assert!(!rec.summary.is_empty());
        t += 25.0;
    }
}

#[test]
fn paddy_conditions_favor_rice() {
    let rec = recommend(SoilInput {
        ph: 6.5,
        temperature: 26.0,
        humidity: 75.0,
    })
    .unwrap();

    let rice_rank = rec
        .ranked
        .iter()
        .position(|c| c.crop == "Rice")
        .expect("rice graded");
    assert!(rice_rank < 3, "rice ranked {}", rice_rank + 1);
    assert!(rec.ranked[rice_rank].score >= 0.4);
}

#[test]
fn acidic_wet_soil_favors_cassava_over_soybean() {
    // Cassava tolerates acid soil and high humidity; soybean's unsuitable
    // rule fires on acidity.
    let rec = recommend(SoilInput {
        ph: 4.8,
        temperature: 27.0,
        humidity: 88.0,
    })
    .unwrap();

    let score = |name: &str| {
        rec.ranked
            .iter()
            .find(|c| c.crop == name)
            .map(|c| c.score)
            .unwrap()
    };
    assert!(score("Cassava") > score("Soybean"));
}

#[test]
fn log_capacity_bounds_memory_under_continuous_sampling() {
    let mut log = ReadingLog::with_capacity(32);
    let mut t = 0.0;
    while t < 1000.0 {
        log.record(&SyntheticStation::sample_at(t));
        t += 1.0;
    }
    assert_eq!(log.len(), 32);
}
