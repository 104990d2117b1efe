//! Decoder for Part A (TTAA) of a TEMP message, the mandatory levels.
//!
//! A report looks like
//!
//! ```text
//! TTAA YYGGI IIiii 99PPP TTTDD dddff PPhhh TTTDD dddff ... 88PPP TTTDD dddff 77PPP dddff 31313
//! ```
//!
//! The three groups after the station give the surface, then levels follow as clusters of a
//! pressure/height group, a temperature group and a wind group until a `31` group.
use crate::{
    error::{FormatError, GroupError},
    groups::{
        decode_cluster_temperature, decode_dewpoint_depression, decode_depression_tenths,
        decode_height, decode_temperature, literal_wind, required_digits,
    },
    keys::{MandatoryLevel, Section},
    sounding::{DecodedLevel, DecodedSounding, MaxWind, Tropopause},
    utility::{is_placeholder, parse_digits, tokenize, PLACEHOLDER},
};
use tracing::{debug, trace};

/// Fewest groups a report needs before anything is decoded.
pub(crate) const MIN_GROUPS: usize = 4;
/// Index of the first group after the surface groups.
const LEVEL_STREAM_START: usize = 6;
/// Offset added to the day to flag that surface wind is included.
pub(crate) const DAY_OFFSET: i32 = 50;

/// Decode a TTAA report.
///
/// Structural problems, like too few groups, never fail. The sounding comes back with whatever
/// could be read and the problem listed in `format_errors`. A trailing level cluster cut short
/// by the end of the report is dropped.
///
/// Fails only if a field the report can't do without is unreadable, e.g. the day in the header
/// or the pressure of a level.
///
/// # Examples
///
/// ```rust
/// use sounding_decode::decode_ttaa;
///
/// let snd = decode_ttaa("TTAA 51004 41953 99996 23504 10203 85537 17858 24015 31313").unwrap();
///
/// assert_eq!(snd.station(), "41953");
/// assert_eq!(snd.date(), 1);
/// assert_eq!(snd.surface_pressure(), 996);
///
/// let lvl = snd.mandatory_levels()[0];
/// assert_eq!(lvl.pressure, 850);
/// assert_eq!(lvl.height, Some(1537));
/// assert_eq!(lvl.wind_direction, Some(240));
/// ```
pub fn decode_ttaa(text: &str) -> Result<DecodedSounding, GroupError> {
    let tokens = tokenize(text);
    let mut snd = DecodedSounding::default();

    if tokens.len() < MIN_GROUPS {
        debug!(found = tokens.len(), "insufficient data in TTAA report");
        snd.format_errors.push(FormatError::InsufficientData {
            section: Section::Ttaa,
            found: tokens.len(),
        });
        return Ok(snd);
    }

    let header = tokens[1];
    snd.date = required_digits(header, 0..2, "day")? - DAY_OFFSET;
    snd.time = required_digits(header, 2..4, "hour")?;
    snd.station = tokens[2].to_owned();

    if tokens.len() >= LEVEL_STREAM_START {
        decode_surface(&mut snd, tokens[3], tokens[4], tokens[5])?;
    }

    scan_levels(&mut snd, &tokens)?;

    Ok(snd)
}

fn decode_surface(
    snd: &mut DecodedSounding,
    pressure: &str,
    temperature: &str,
    wind: &str,
) -> Result<(), GroupError> {
    let ppp = pressure
        .get(2..)
        .ok_or_else(|| GroupError::new("surface pressure", pressure))?;
    if !is_placeholder(ppp) {
        snd.surface_pressure =
            parse_digits(ppp).ok_or_else(|| GroupError::new("surface pressure", pressure))?;
    }

    if temperature.len() == 5 {
        if let Some(t) = temperature.get(0..3).and_then(decode_temperature) {
            snd.surface_temperature = t;
        }
        if let Some(dd) = temperature.get(3..5).and_then(decode_depression_tenths) {
            snd.surface_dewpoint_depression = dd;
        }
    }

    if let Some(w) = literal_wind(wind)? {
        snd.surface_wind_direction = w.direction;
        snd.surface_wind_speed = w.speed;
    }

    Ok(())
}

/// Walk the groups after the surface, one cluster at a time.
fn scan_levels(snd: &mut DecodedSounding, tokens: &[&str]) -> Result<(), GroupError> {
    let mut idx = LEVEL_STREAM_START;

    while let Some(&group) = tokens.get(idx) {
        let remaining = tokens.len() - idx;

        match group.get(..2).unwrap_or(group) {
            "88" => {
                if remaining < 3 {
                    debug!(group, "dropping truncated tropopause cluster");
                    break;
                }
                let lvl = decode_cluster(tokens[idx], tokens[idx + 1], tokens[idx + 2])?;
                trace!(?lvl, "tropopause");
                snd.tropopause = Some(Tropopause::from(lvl));
                idx += 3;
            }
            "77" => {
                if remaining < 2 {
                    debug!(group, "dropping truncated max wind cluster");
                    break;
                }
                let max_wind = decode_max_wind(tokens[idx], tokens[idx + 1])?;
                trace!(?max_wind, "max wind");
                snd.max_wind = Some(max_wind);
                idx += 2;
            }
            "31" => break,
            _ => {
                if remaining < 3 {
                    debug!(group, "dropping truncated level cluster");
                    break;
                }
                let lvl = decode_cluster(tokens[idx], tokens[idx + 1], tokens[idx + 2])?;
                trace!(?lvl, "mandatory level");
                snd.mandatory_levels.push(lvl);
                idx += 3;
            }
        }
    }

    Ok(())
}

/// Decode a `PPhhh TTTDD dddff` cluster.
///
/// Every field except the pressure may come back missing, the caller decides how to fill them.
pub(crate) fn decode_cluster(
    pressure_group: &str,
    temperature_group: &str,
    wind_group: &str,
) -> Result<DecodedLevel, GroupError> {
    let pressure = cluster_pressure(pressure_group)?;
    let height = pressure_group
        .get(2..5)
        .and_then(|hhh| decode_height(hhh, pressure));

    let mut lvl = DecodedLevel::new(pressure).with_height(height);

    if temperature_group != PLACEHOLDER {
        lvl = lvl
            .with_temperature(
                temperature_group
                    .get(0..3)
                    .and_then(decode_cluster_temperature),
            )
            .with_dewpoint_depression(
                temperature_group
                    .get(3..5)
                    .and_then(decode_dewpoint_depression),
            );
    }

    Ok(lvl.with_wind(literal_wind(wind_group)?))
}

/// Pressure for the indicator that starts a cluster.
///
/// Tropopause (`88`) and max wind (`77`) groups carry the pressure in the last three digits,
/// standard levels are looked up, and anything else is the indicator in tens of hPa.
fn cluster_pressure(group: &str) -> Result<i32, GroupError> {
    let indicator = group
        .get(..2)
        .ok_or_else(|| GroupError::new("pressure", group))?;

    match indicator {
        "88" | "77" => required_digits(group, 2..5, "pressure"),
        _ => match MandatoryLevel::from_indicator(indicator) {
            Some(level) => Ok(level.pressure()),
            None => required_digits(group, 0..2, "pressure").map(|p| p * 10),
        },
    }
}

fn decode_max_wind(pressure_group: &str, wind_group: &str) -> Result<MaxWind, GroupError> {
    let pressure = required_digits(pressure_group, 2..5, "pressure")?;
    let wind = literal_wind(wind_group)?;

    Ok(MaxWind {
        pressure,
        wind_direction: wind.map(|w| w.direction),
        wind_speed: wind.map(|w| w.speed),
    })
}
