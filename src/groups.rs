//! Decoders for the fields inside the five character groups of a TEMP report.
//!
//! These never fail. A placeholder or unreadable field decodes to `None` and the caller decides
//! what a missing value means at that spot in the report. The `literal_wind` and
//! `required_digits` helpers are the exception, they back fields the report decoders cannot do
//! without and report a `GroupError` instead.
//!
//! A wind group that is a placeholder or not five characters long counts as missing, like any
//! other field. Only a five character wind with a non-digit in it is a `GroupError`.
use crate::{
    error::GroupError,
    utility::{is_placeholder, parse_digits},
};
use serde::Serialize;
use std::ops::Range;

/// A wind read from a `dddff` group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Wind {
    /// Direction in degrees, as coded. See `decode_wind` for values above 360.
    pub direction: i32,
    /// Speed in knots.
    pub speed: i32,
}

/// Decode the `TTT` part of a temperature group.
///
/// The parity of the last digit carries the sign, even is positive and odd is negative. The
/// magnitude is the code with the last digit dropped, in tenths of a degree, so `013` decodes
/// to -0.1 C and `236` to 2.3 C.
///
/// # Examples
///
/// ```rust
/// use sounding_decode::groups::decode_temperature;
///
/// assert_eq!(decode_temperature("236"), Some(2.3));
/// assert_eq!(decode_temperature("013"), Some(-0.1));
/// assert_eq!(decode_temperature("///"), None);
/// assert_eq!(decode_temperature("23"), None);
/// ```
pub fn decode_temperature(ttt: &str) -> Option<f64> {
    if ttt.len() != 3 || is_placeholder(ttt) {
        return None;
    }

    let value = parse_digits(ttt)?;
    let magnitude = f64::from(value / 10) / 10.0;

    Some(apply_sign(value, magnitude))
}

/// Decode the `TTT` part of a temperature group inside a TTAA level cluster.
///
/// Same sign rule as `decode_temperature`, but the whole code is the magnitude in tenths, so
/// `236` decodes to 23.6 C.
pub fn decode_cluster_temperature(ttt: &str) -> Option<f64> {
    if ttt.len() != 3 || is_placeholder(ttt) {
        return None;
    }

    let value = parse_digits(ttt)?;
    let magnitude = f64::from(value) / 10.0;

    Some(apply_sign(value, magnitude))
}

fn apply_sign(code: i32, magnitude: f64) -> f64 {
    if code % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Decode a two digit dewpoint depression code.
///
/// Codes up to 50 are tenths of a degree, codes above 50 are whole degrees offset by 50.
///
/// # Examples
///
/// ```rust
/// use sounding_decode::groups::decode_dewpoint_depression;
///
/// assert_eq!(decode_dewpoint_depression("04"), Some(0.4));
/// assert_eq!(decode_dewpoint_depression("50"), Some(5.0));
/// assert_eq!(decode_dewpoint_depression("56"), Some(6.0));
/// assert_eq!(decode_dewpoint_depression("//"), None);
/// ```
pub fn decode_dewpoint_depression(dd: &str) -> Option<f64> {
    if dd.len() != 2 {
        return None;
    }

    let value = parse_digits(dd)?;
    if value <= 50 {
        Some(f64::from(value) / 10.0)
    } else {
        Some(f64::from(value - 50))
    }
}

/// Decode a two digit dewpoint depression code as plain tenths of a degree. Used for the TTAA
/// surface group and the TTBB temperature groups.
pub fn decode_depression_tenths(dd: &str) -> Option<f64> {
    if dd.len() != 2 {
        return None;
    }

    parse_digits(dd).map(|value| f64::from(value) / 10.0)
}

/// Decode a `TTTDD` group with `decode_temperature` and `decode_depression_tenths`.
pub(crate) fn decode_temperature_group(group: &str) -> (Option<f64>, Option<f64>) {
    if group.len() != 5 || is_placeholder(group) {
        return (None, None);
    }

    (
        group.get(0..3).and_then(decode_temperature),
        group.get(3..5).and_then(decode_depression_tenths),
    )
}

/// Decode a `dddff` wind group, correcting for the high speed encoding.
///
/// A direction ending in 1 or 6 means 100 knots were added to the speed. The marker digit is
/// removed from the direction and the result is multiplied by ten, so `21198` decodes to a
/// direction of 2100 and a speed of 198 knots. Other directions are returned as coded.
///
/// # Examples
///
/// ```rust
/// use sounding_decode::groups::{decode_wind, Wind};
///
/// assert_eq!(decode_wind("27015"), Some(Wind { direction: 270, speed: 15 }));
/// assert_eq!(decode_wind("21198"), Some(Wind { direction: 2100, speed: 198 }));
/// assert_eq!(decode_wind("/////"), None);
/// ```
pub fn decode_wind(group: &str) -> Option<Wind> {
    if group.len() != 5 || is_placeholder(group) {
        return None;
    }

    let direction = group.get(0..3).and_then(parse_digits)?;
    let speed = group.get(3..5).and_then(parse_digits)?;

    let wind = match direction % 10 {
        1 => Wind {
            direction: (direction - 1) * 10,
            speed: speed + 100,
        },
        6 => Wind {
            direction: (direction - 6) * 10,
            speed: speed + 100,
        },
        _ => Wind { direction, speed },
    };

    Some(wind)
}

/// Read a `dddff` wind group as coded, no high speed correction.
///
/// A placeholder or a group that isn't five characters long is `Ok(None)`. A five character
/// group that isn't all digits is an error.
pub(crate) fn literal_wind(group: &str) -> Result<Option<Wind>, GroupError> {
    if group.len() != 5 || is_placeholder(group) {
        return Ok(None);
    }

    let direction = required_digits(group, 0..3, "wind direction")?;
    let speed = required_digits(group, 3..5, "wind speed")?;

    Ok(Some(Wind { direction, speed }))
}

/// Decode a three digit height code for a standard pressure surface into meters.
///
/// The code drops leading digits, which ones depends on the pressure level.
///
/// | Pressure (hPa) | Height (m) |
/// |---|---|
/// | above 850 | code |
/// | 850 | 1000 + code |
/// | 700 | 2000 + code |
/// | 300 to 500 | code x 10 |
/// | 100 to 250 | 10000 + code x 10 |
/// | anything else | code |
///
/// # Examples
///
/// ```rust
/// use sounding_decode::groups::decode_height;
///
/// assert_eq!(decode_height("137", 850), Some(1137));
/// assert_eq!(decode_height("137", 300), Some(1370));
/// assert_eq!(decode_height("///", 500), None);
/// ```
pub fn decode_height(hhh: &str, pressure: i32) -> Option<i32> {
    if hhh.len() != 3 || is_placeholder(hhh) {
        return None;
    }

    let code = parse_digits(hhh)?;

    let height = if pressure > 850 {
        code
    } else if pressure == 850 {
        1000 + code
    } else if pressure == 700 {
        2000 + code
    } else if (300..=500).contains(&pressure) {
        code * 10
    } else if (100..=250).contains(&pressure) {
        10000 + code * 10
    } else {
        code
    };

    Some(height)
}

/// Read a slice of a group as digits, or fail naming the field.
pub(crate) fn required_digits(
    group: &str,
    range: Range<usize>,
    field: &'static str,
) -> Result<i32, GroupError> {
    group
        .get(range)
        .and_then(parse_digits)
        .ok_or_else(|| GroupError::new(field, group))
}
