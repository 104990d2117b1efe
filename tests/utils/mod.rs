#![allow(dead_code)]
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use sounding_decode::{analyze, DecodedSounding};

pub mod header_tests;
pub mod level_tests;

#[allow(unused_macros)] // False alarm
macro_rules! check_file_complete {
    ($test_name:ident, $fname:expr) => {
        #[test]
        fn $test_name() {
            let (ttaa, ttbb, ivals, fvals) = utils::load_test_file($fname);

            assert!(!ttaa.trim().is_empty(), "Missing TTAA section.");
            assert!(!ttbb.trim().is_empty(), "Missing TTBB section.");

            let ival_keys = [
                "station num",
                "date",
                "time",
                "surface pressure",
                "surface wind direction",
                "surface wind speed",
                "num mandatory levels",
                "num significant levels",
            ];

            let fval_keys = [
                "surface temperature",
                "surface dewpoint depression",
                "mandatory pressures",
                "mandatory heights",
                "mandatory temperatures",
                "mandatory dewpoints",
                "mandatory wind directions",
                "mandatory wind speeds",
                "tropopause",
                "max wind",
                "significant pressures",
                "significant temperatures",
                "significant dewpoints",
                "significant wind directions",
                "significant wind speeds",
            ];

            // Make sure all of these keys are in the hashmaps
            for key in ival_keys.iter() {
                assert!(ivals.contains_key(*key), "{}", key);
            }

            for key in fval_keys.iter() {
                assert!(fvals.contains_key(*key), "{}", key);
            }

            // Make sure there are no extra keys in there being ignored.
            for key in ivals.keys() {
                assert!(ival_keys.contains(&key.as_str()), "extra ival key found");
            }

            for key in fvals.keys() {
                assert!(fval_keys.contains(&key.as_str()), "extra fval key found");
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {

            use std::collections::HashMap;

            use crate::utils;
            use sounding_decode::DecodedSounding;

            fn load_data() -> (DecodedSounding, HashMap<String, i64>, HashMap<String, Vec<f64>>) {
                utils::decode_test_file($fname)
            }

            mod header {
                use super::load_data;
                use crate::utils::header_tests;

                #[test]
                fn station_and_time() {
                    let (snd, ivals, _) = load_data();
                    header_tests::test_station_and_time(&snd, &ivals);
                }

                #[test]
                fn surface() {
                    let (snd, ivals, fvals) = load_data();
                    header_tests::test_surface(&snd, &ivals, &fvals);
                }

                #[test]
                fn tropopause() {
                    let (snd, _, fvals) = load_data();
                    header_tests::test_tropopause(&snd, &fvals);
                }

                #[test]
                fn max_wind() {
                    let (snd, _, fvals) = load_data();
                    header_tests::test_max_wind(&snd, &fvals);
                }
            }

            mod levels {
                use super::load_data;
                use crate::utils::level_tests;

                #[test]
                fn mandatory_levels() {
                    let (snd, ivals, fvals) = load_data();
                    level_tests::test_mandatory_levels(&snd, &ivals, &fvals);
                }

                #[test]
                fn significant_levels() {
                    let (snd, ivals, fvals) = load_data();
                    level_tests::test_significant_levels(&snd, &ivals, &fvals);
                }

                #[test]
                fn significant_levels_sorted() {
                    let (snd, _, _) = load_data();
                    level_tests::test_significant_levels_sorted(&snd);
                }

                #[test]
                fn profile() {
                    let (snd, _, _) = load_data();
                    level_tests::test_profile(&snd);
                }
            }
        }
    };
}

/// Load the TTAA and TTBB text and the expected values from a test file.
pub fn load_test_file(
    fname: &str,
) -> (String, String, HashMap<String, i64>, HashMap<String, Vec<f64>>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_report(&test_path)
}

/// Load a test file and decode it.
pub fn decode_test_file(
    fname: &str,
) -> (DecodedSounding, HashMap<String, i64>, HashMap<String, Vec<f64>>) {
    let (ttaa, ttbb, ivals, fvals) = load_test_file(fname);
    let snd = analyze(&ttaa, &ttbb).expect(&format!("Error decoding file: {}", fname));

    (snd, ivals, fvals)
}

fn load_test_report(
    location: &PathBuf,
) -> (String, String, HashMap<String, i64>, HashMap<String, Vec<f64>>) {
    let mut f = File::open(location).expect(&format!("Error opening file: {:?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:?}", location));

    let mut ttaa = String::new();
    let mut ttbb = String::new();
    let mut ivals: HashMap<String, i64> = HashMap::new();
    let mut fvals: HashMap<String, Vec<f64>> = HashMap::new();

    let mut section = "";
    for line in contents.lines() {
        if line.starts_with("###") {
            section = line.trim_matches(|c: char| c == '#' || c.is_whitespace());
            continue;
        }

        match section {
            "TTAA" => {
                ttaa.push_str(line);
                ttaa.push('\n');
            }
            "TTBB" => {
                ttbb.push_str(line);
                ttbb.push('\n');
            }
            "Expected Int Values" => {
                let tokens: Vec<&str> = line.split(',').collect();
                if tokens.len() != 2 {
                    continue;
                }
                let val = i64::from_str(tokens[1].trim())
                    .expect(&format!("Bad int value: {}", line));
                ivals.insert(tokens[0].to_owned(), val);
            }
            "Expected Float Values" => {
                let mut tokens = line.split(',');
                let key = match tokens.next() {
                    Some(key) if !key.is_empty() => key.to_owned(),
                    _ => continue,
                };
                let vals: Vec<f64> = tokens
                    .map(str::trim)
                    .filter(|tok| !tok.is_empty())
                    .map(|tok| f64::from_str(tok).expect(&format!("Bad float value: {}", line)))
                    .collect();
                fvals.insert(key, vals);
            }
            _ => {}
        }
    }

    (ttaa, ttbb, ivals, fvals)
}

/// Compare an expected value with a decoded one, NaN in the file means missing.
pub fn approx_equal(expected: f64, decoded: Option<f64>) -> bool {
    match decoded {
        Some(val) => !expected.is_nan() && (expected - val).abs() < 1.0e-6,
        None => expected.is_nan(),
    }
}

/// Check a whole column of values.
pub fn check_column(key: &str, expected: &[f64], decoded: &[Option<f64>]) {
    assert_eq!(expected.len(), decoded.len(), "{}: length", key);

    for (i, (&exp, &val)) in expected.iter().zip(decoded).enumerate() {
        assert!(
            approx_equal(exp, val),
            "{} at index {}: expected {} decoded {:?}",
            key,
            i,
            exp,
            val
        );
    }
}
