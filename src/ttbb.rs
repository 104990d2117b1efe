//! Decoder for Part B (TTBB) of a TEMP message, the significant levels.
//!
//! ```text
//! TTBB YYGGa IIiii 00PPP TTTDD nnPPP TTTDD ... 21212 00PPP dddff nnPPP dddff ... 31313
//! ```
//!
//! Temperature and humidity levels come first, then after `21212` the wind levels. The two
//! lists are merged by pressure.
use crate::{
    error::{FormatError, GroupError},
    groups::{decode_temperature_group, literal_wind, required_digits, Wind},
    keys::Section,
    sounding::DecodedLevel,
    ttaa::{DAY_OFFSET, MIN_GROUPS},
    utility::{parse_digits, tokenize},
};
use serde::Serialize;
use tracing::{debug, trace};

/// Starts the wind section.
const WIND_MARKER: &str = "21212";
/// Ends the wind section.
const END_MARKER: &str = "31313";
/// Index of the first group after the header and station.
const DATA_START: usize = 3;

/// The decoded contents of a TTBB report.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TtbbReport {
    /// Station identifier.
    pub station: String,
    /// Day of month from the header, less 50.
    pub date: Option<i32>,
    /// Synoptic hour from the header.
    pub time: Option<i32>,
    /// Significant levels sorted by descending pressure.
    pub significant_levels: Vec<DecodedLevel>,
    /// Structural problems with the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub format_errors: Vec<FormatError>,
}

/// Decode a TTBB report.
///
/// As with `decode_ttaa`, missing structure only leaves the result empty. A report without an
/// `00PPP` surface group has no significant levels.
///
/// # Examples
///
/// ```rust
/// use sounding_decode::decode_ttbb;
///
/// let report = decode_ttbb(
///     "TTBB 5100/ 41953 00996 23504 11975 21856 21212 00996 10203 11970 18012 31313",
/// )
/// .unwrap();
///
/// let pressures: Vec<i32> = report.significant_levels.iter().map(|l| l.pressure).collect();
/// assert_eq!(pressures, vec![996, 975, 970]);
/// assert_eq!(report.significant_levels[0].wind_direction, Some(102));
/// ```
pub fn decode_ttbb(text: &str) -> Result<TtbbReport, GroupError> {
    let tokens = tokenize(text);
    let mut report = TtbbReport::default();

    if tokens.len() < MIN_GROUPS {
        debug!(found = tokens.len(), "insufficient data in TTBB report");
        report.format_errors.push(FormatError::InsufficientData {
            section: Section::Ttbb,
            found: tokens.len(),
        });
        return Ok(report);
    }

    report.date = tokens[1].get(0..2).and_then(parse_digits).map(|d| d - DAY_OFFSET);
    report.time = tokens[1].get(2..4).and_then(parse_digits);
    report.station = tokens[2].to_owned();

    let surface_idx = match tokens[DATA_START..]
        .iter()
        .position(|t| is_surface_group(t))
    {
        Some(i) => i + DATA_START,
        None => {
            debug!("no surface pressure group in TTBB report");
            report.format_errors.push(FormatError::MissingSurfaceGroup);
            return Ok(report);
        }
    };

    let mut levels: Vec<DecodedLevel> = vec![];

    let surface_pressure = required_digits(tokens[surface_idx], 2..5, "pressure")?;
    let (t, dd) = tokens
        .get(surface_idx + 1)
        .map(|group| decode_temperature_group(group))
        .unwrap_or((None, None));
    levels.push(
        DecodedLevel::new(surface_pressure)
            .with_temperature(t)
            .with_dewpoint_depression(dd),
    );

    // Pairs step from the surface group, only a pair start can be the wind marker.
    let mut idx = surface_idx + 2;
    while let Some(&pressure_group) = tokens.get(idx) {
        if pressure_group == WIND_MARKER {
            break;
        }
        let temperature_group = match tokens.get(idx + 1) {
            Some(&group) => group,
            None => break,
        };
        idx += 2;

        if !is_significant_group(pressure_group) {
            continue;
        }

        let pressure = required_digits(pressure_group, 2..5, "pressure")?;
        let (t, dd) = decode_temperature_group(temperature_group);
        let lvl = DecodedLevel::new(pressure)
            .with_temperature(t)
            .with_dewpoint_depression(dd);
        trace!(?lvl, "significant temperature level");
        levels.push(lvl);
    }

    let wind_marker = match tokens.get(idx) {
        Some(&group) if group == WIND_MARKER => Some(idx),
        _ => None,
    };

    if let Some(marker) = wind_marker {
        for pair in tokens[marker + 1..].chunks_exact(2) {
            let (pressure_group, wind_group) = (pair[0], pair[1]);
            if pressure_group == END_MARKER {
                break;
            }
            if !(is_surface_group(pressure_group) || is_significant_group(pressure_group)) {
                continue;
            }

            let pressure = required_digits(pressure_group, 2..5, "pressure")?;
            let wind = literal_wind(wind_group)?;
            trace!(pressure, ?wind, "significant wind level");
            merge_wind(&mut levels, pressure, wind);
        }
    }

    levels.sort_by(|a, b| b.pressure.cmp(&a.pressure));
    report.significant_levels = levels;

    Ok(report)
}

/// Put a wind on the level with the same pressure, or add a new level for it.
fn merge_wind(levels: &mut Vec<DecodedLevel>, pressure: i32, wind: Option<Wind>) {
    match levels.iter_mut().find(|lvl| lvl.pressure == pressure) {
        Some(lvl) => lvl.set_wind(wind),
        None => levels.push(DecodedLevel::new(pressure).with_wind(wind)),
    }
}

/// `00PPP`
fn is_surface_group(group: &str) -> bool {
    let bytes = group.as_bytes();
    bytes.len() == 5 && bytes[0] == b'0' && bytes[1] == b'0' && all_digits(&bytes[2..])
}

/// `nnPPP` where both `n` are 1 through 9.
fn is_significant_group(group: &str) -> bool {
    let bytes = group.as_bytes();
    bytes.len() == 5
        && (b'1'..=b'9').contains(&bytes[0])
        && (b'1'..=b'9').contains(&bytes[1])
        && all_digits(&bytes[2..])
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}
