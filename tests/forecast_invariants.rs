use std::collections::BTreeSet;

use rotation_forecast::forecast::{ForecastConfig, RotationForecaster};
use rotation_forecast::rotation::{ChampionId, Rotation, RotationHistory};
use rotation_forecast::types::{ConfigError, PredictionError, SamplingError};

fn pool(n: usize) -> BTreeSet<ChampionId> {
    (0..n).map(|i| ChampionId::new(format!("c{i:03}"))).collect()
}

fn history(pool_size: usize, rotations: usize) -> RotationHistory {
    (0..rotations)
        .map(|r| {
            let width = 8 + r % 4;
            Rotation::new((0..width).map(|k| format!("c{:03}", (r * 5 + k * 3) % pool_size)))
        })
        .collect()
}

#[test]
fn invariant_forecast_exact_unique_sorted_subset() {
    let forecaster = RotationForecaster::default();
    let pool = pool(45);
    let history = history(45, 15);

    for i in 0..100 {
        let key = format!("rotation-{i}");
        let report = forecaster.forecast(&pool, &history, &key).unwrap();

        assert_eq!(report.allocation.total(), report.predicted_size, "{key}");
        assert_eq!(report.passes.len(), report.predicted_size, "{key}");
        assert_eq!(report.champions.len(), report.predicted_size, "{key}");

        assert!(report.champions.windows(2).all(|w| w[0] < w[1]), "{key} not sorted/unique");
        assert!(report.champions.iter().all(|id| pool.contains(id)), "{key} outside pool");

        assert_eq!(report.passes.interval.len(), report.allocation.interval);
        assert_eq!(report.passes.frequency.len(), report.allocation.frequency);
        assert_eq!(report.passes.random.len(), report.allocation.random);
    }
}

#[test]
fn pool_champions_never_seen_may_still_be_predicted() {
    let forecaster = RotationForecaster::default();
    // Only c000..c009 ever appear; the pool holds 12 unseen champions.
    let history = RotationHistory::newest_first(vec![
        Rotation::new((0..10).map(|i| format!("c{i:03}"))),
    ]);
    let pool = pool(22);

    let report = forecaster.forecast(&pool, &history, "fresh").unwrap();
    assert_eq!(report.predicted_size, 10);
    assert_eq!(report.champions.len(), 10);
}

#[test]
fn pool_smaller_than_predicted_size_fails() {
    let forecaster = RotationForecaster::default();
    let history = RotationHistory::newest_first(vec![Rotation::new(["a", "b", "c", "d", "e"])]);
    let pool: BTreeSet<ChampionId> = ["a", "b"].into_iter().map(ChampionId::from).collect();

    let err = forecaster.predict(&pool, &history, "k").unwrap_err();
    assert_eq!(
        err,
        PredictionError::InsufficientCandidates { predicted: 5, available: 2 }
    );
}

#[test]
fn empty_pool_fails_when_history_predicts_champions() {
    let forecaster = RotationForecaster::default();
    let err = forecaster
        .forecast(&BTreeSet::new(), &history(45, 6), "nothing")
        .unwrap_err();
    assert!(matches!(
        err,
        PredictionError::InsufficientCandidates { available: 0, .. }
    ));
}

#[test]
fn pool_exactly_the_predicted_size_is_fully_used() {
    let forecaster = RotationForecaster::default();
    let history = RotationHistory::newest_first(vec![Rotation::new(["a", "b", "c", "d", "e"])]);
    let pool: BTreeSet<ChampionId> = ["a", "b", "c", "d", "z"].into_iter().map(ChampionId::from).collect();

    let predicted = forecaster.predict(&pool, &history, "k").unwrap();
    assert_eq!(predicted, pool.into_iter().collect::<Vec<_>>());
}

#[test]
fn empty_history_fails_without_partial_result() {
    let forecaster = RotationForecaster::default();
    let err = forecaster
        .predict(&pool(10), &RotationHistory::default(), "key")
        .unwrap_err();
    assert_eq!(err, PredictionError::Sampling(SamplingError::NoSizeCandidate));
}

#[test]
fn history_feeds_weights_not_seed() {
    let forecaster = RotationForecaster::default();
    let pool = pool(45);

    let a = forecaster.forecast(&pool, &history(45, 10), "same-key").unwrap();
    let b = forecaster.forecast(&pool, &history(45, 14), "same-key").unwrap();
    assert_eq!(a.seed, b.seed);
    assert_eq!(a.seed_digest, b.seed_digest);
}

#[test]
fn custom_shares_shift_the_allocation() {
    let forecaster = RotationForecaster::new(ForecastConfig {
        interval_share: 0.0,
        frequency_share: 1.0,
        ..ForecastConfig::v0()
    })
    .unwrap();

    let report = forecaster.forecast(&pool(45), &history(45, 8), "freq-only").unwrap();
    assert_eq!(report.allocation.interval, 0);
    assert_eq!(report.allocation.random, 0);
    assert_eq!(report.allocation.frequency, report.predicted_size);
}

#[test]
fn invalid_shares_are_rejected() {
    let err = RotationForecaster::new(ForecastConfig {
        interval_share: 0.8,
        frequency_share: 0.4,
        ..ForecastConfig::v0()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidShares { .. }));

    assert!(ForecastConfig { interval_share: -0.1, ..ForecastConfig::v0() }.validate().is_err());
    assert!(ForecastConfig { frequency_share: f64::NAN, ..ForecastConfig::v0() }.validate().is_err());
    assert!(ForecastConfig::v0().validate().is_ok());
}

#[test]
fn config_round_trips_through_json() {
    let config = ForecastConfig::v0();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(
        json,
        r#"{"version":"1","hash_algorithm":"sha256","interval_share":0.6,"frequency_share":0.3}"#
    );
    let back: ForecastConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
