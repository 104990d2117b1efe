use super::approx_equal;
use std::collections::HashMap;

use sounding_decode::DecodedSounding;

pub fn test_station_and_time(snd: &DecodedSounding, ivals: &HashMap<String, i64>) {
    let station_num = ivals["station num"];
    assert_eq!(i64::from(snd.station_num().unwrap()), station_num);
    assert_eq!(snd.station(), station_num.to_string());

    assert_eq!(i64::from(snd.date()), ivals["date"]);
    assert_eq!(i64::from(snd.time()), ivals["time"]);
}

pub fn test_surface(
    snd: &DecodedSounding,
    ivals: &HashMap<String, i64>,
    fvals: &HashMap<String, Vec<f64>>,
) {
    assert_eq!(i64::from(snd.surface_pressure()), ivals["surface pressure"]);
    assert_eq!(
        i64::from(snd.surface_wind_direction()),
        ivals["surface wind direction"]
    );
    assert_eq!(i64::from(snd.surface_wind_speed()), ivals["surface wind speed"]);

    assert!(approx_equal(
        fvals["surface temperature"][0],
        Some(snd.surface_temperature())
    ));
    assert!(approx_equal(
        fvals["surface dewpoint depression"][0],
        Some(snd.surface_dewpoint_depression())
    ));
}

pub fn test_tropopause(snd: &DecodedSounding, fvals: &HashMap<String, Vec<f64>>) {
    let expected = &fvals["tropopause"];

    match snd.tropopause() {
        None => assert!(expected.is_empty(), "tropopause not decoded"),
        Some(trop) => {
            assert_eq!(expected.len(), 5);
            assert!(approx_equal(expected[0], Some(f64::from(trop.pressure))));
            assert!(approx_equal(expected[1], Some(trop.temperature)));
            assert!(approx_equal(expected[2], Some(trop.dewpoint)));
            assert!(approx_equal(expected[3], Some(f64::from(trop.wind_direction))));
            assert!(approx_equal(expected[4], Some(f64::from(trop.wind_speed))));
        }
    }
}

pub fn test_max_wind(snd: &DecodedSounding, fvals: &HashMap<String, Vec<f64>>) {
    let expected = &fvals["max wind"];

    match snd.max_wind() {
        None => assert!(expected.is_empty(), "max wind not decoded"),
        Some(max_wind) => {
            assert_eq!(expected.len(), 3);
            assert!(approx_equal(expected[0], Some(f64::from(max_wind.pressure))));
            assert!(approx_equal(
                expected[1],
                max_wind.wind_direction.map(f64::from)
            ));
            assert!(approx_equal(expected[2], max_wind.wind_speed.map(f64::from)));
        }
    }
}
