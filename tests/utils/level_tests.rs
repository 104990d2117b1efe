use super::check_column;
use std::collections::HashMap;

use metfor::Quantity;
use sounding_decode::{DecodedLevel, DecodedSounding};

fn expected_column<'a>(
    fvals: &'a HashMap<String, Vec<f64>>,
    prefix: &str,
    name: &str,
) -> (String, &'a [f64]) {
    let key = format!("{} {}", prefix, name);
    let expected = fvals
        .get(&key)
        .map(|vals| vals.as_slice())
        .expect(&format!("Missing expected values: {}", key));

    (key, expected)
}

fn check_levels(
    prefix: &str,
    levels: &[DecodedLevel],
    fvals: &HashMap<String, Vec<f64>>,
    with_heights: bool,
) {
    let column = |name: &str| expected_column(fvals, prefix, name);

    let (key, expected) = column("pressures");
    let decoded: Vec<Option<f64>> = levels.iter().map(|l| Some(f64::from(l.pressure))).collect();
    check_column(&key, expected, &decoded);

    if with_heights {
        let (key, expected) = column("heights");
        let decoded: Vec<Option<f64>> = levels.iter().map(|l| l.height.map(f64::from)).collect();
        check_column(&key, expected, &decoded);
    }

    let (key, expected) = column("temperatures");
    let decoded: Vec<Option<f64>> = levels.iter().map(|l| l.temperature).collect();
    check_column(&key, expected, &decoded);

    let (key, expected) = column("dewpoints");
    let decoded: Vec<Option<f64>> = levels.iter().map(|l| l.dewpoint()).collect();
    check_column(&key, expected, &decoded);

    let (key, expected) = column("wind directions");
    let decoded: Vec<Option<f64>> = levels
        .iter()
        .map(|l| l.wind_direction.map(f64::from))
        .collect();
    check_column(&key, expected, &decoded);

    let (key, expected) = column("wind speeds");
    let decoded: Vec<Option<f64>> = levels.iter().map(|l| l.wind_speed.map(f64::from)).collect();
    check_column(&key, expected, &decoded);
}

pub fn test_mandatory_levels(
    snd: &DecodedSounding,
    ivals: &HashMap<String, i64>,
    fvals: &HashMap<String, Vec<f64>>,
) {
    assert_eq!(
        snd.mandatory_levels().len() as i64,
        ivals["num mandatory levels"]
    );
    check_levels("mandatory", snd.mandatory_levels(), fvals, true);
}

pub fn test_significant_levels(
    snd: &DecodedSounding,
    ivals: &HashMap<String, i64>,
    fvals: &HashMap<String, Vec<f64>>,
) {
    assert_eq!(
        snd.significant_levels().len() as i64,
        ivals["num significant levels"]
    );
    check_levels("significant", snd.significant_levels(), fvals, false);

    assert!(snd.significant_levels().iter().all(|l| l.height.is_none()));
}

pub fn test_significant_levels_sorted(snd: &DecodedSounding) {
    let levels = snd.significant_levels();

    assert!(levels.windows(2).all(|w| w[0].pressure > w[1].pressure));
}

pub fn test_profile(snd: &DecodedSounding) {
    let profile = snd.profile();

    let pressures: Vec<f64> = profile
        .iter()
        .map(|row| row.pressure.unwrap().unpack())
        .collect();
    assert!(pressures.windows(2).all(|w| w[0] > w[1]));

    // every pressure in either part shows up exactly once
    let mut all: Vec<i32> = snd
        .mandatory_levels()
        .iter()
        .chain(snd.significant_levels())
        .map(|l| l.pressure)
        .collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), profile.len());
}
