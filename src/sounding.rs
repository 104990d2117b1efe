//! Data types produced by decoding a TEMP message.

use crate::{
    error::FormatError,
    utility::{parse_digits, to_optioned},
};
use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use optional::Optioned;
use serde::Serialize;
use std::convert::TryFrom;

pub use self::{data_row::DataRow, level::DecodedLevel};

/// Surface pressure used when a TTAA report is too short to carry a surface group.
pub(crate) const DEFAULT_SURFACE_PRESSURE: i32 = 996;

/// The decoded contents of a TTAA report, optionally merged with its TTBB report.
///
/// Values are only set while decoding, the public API is read only.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedSounding {
    pub(crate) station: String,
    // Day of month, the coded YY less 50
    pub(crate) date: i32,
    pub(crate) time: i32,

    // Surface variables
    pub(crate) surface_pressure: i32,
    pub(crate) surface_temperature: f64,
    pub(crate) surface_dewpoint_depression: f64,
    pub(crate) surface_wind_direction: i32,
    pub(crate) surface_wind_speed: i32,

    // Profiles
    pub(crate) mandatory_levels: Vec<DecodedLevel>,
    pub(crate) significant_levels: Vec<DecodedLevel>,

    // Special levels
    pub(crate) tropopause: Option<Tropopause>,
    pub(crate) max_wind: Option<MaxWind>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) format_errors: Vec<FormatError>,
}

impl Default for DecodedSounding {
    fn default() -> Self {
        DecodedSounding {
            station: String::new(),
            date: 0,
            time: 0,
            surface_pressure: DEFAULT_SURFACE_PRESSURE,
            surface_temperature: 0.0,
            surface_dewpoint_depression: 0.0,
            surface_wind_direction: 0,
            surface_wind_speed: 0,
            mandatory_levels: vec![],
            significant_levels: vec![],
            tropopause: None,
            max_wind: None,
            format_errors: vec![],
        }
    }
}

impl DecodedSounding {
    /// Builder method used to attach the significant levels from a TTBB report.
    pub(crate) fn with_significant_levels(mut self, levels: Vec<DecodedLevel>) -> Self {
        self.significant_levels = levels;
        self
    }

    /// Builder method used to carry along problems found in a TTBB report.
    pub(crate) fn with_format_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = FormatError>,
    {
        self.format_errors.extend(errors);
        self
    }

    /// Station identifier, the `IIiii` group.
    #[inline]
    pub fn station(&self) -> &str {
        &self.station
    }

    /// The WMO block number, the `II` part of the station identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_decode::analyze;
    ///
    /// let snd = analyze("TTAA 51004 41953 99996 23504 10203", "").unwrap();
    /// assert_eq!(snd.wmo_block().unwrap(), 41);
    /// assert_eq!(snd.station_num().unwrap(), 41953);
    /// ```
    #[inline]
    pub fn wmo_block(&self) -> Optioned<i32> {
        to_optioned(self.station.get(0..2).and_then(parse_digits))
    }

    /// The station identifier as a number.
    #[inline]
    pub fn station_num(&self) -> Optioned<i32> {
        to_optioned(parse_digits(&self.station))
    }

    /// Day of the month.
    ///
    /// This is always the coded day less 50, whether or not the report used the offset.
    #[inline]
    pub fn date(&self) -> i32 {
        self.date
    }

    /// Synoptic hour, UTC.
    #[inline]
    pub fn time(&self) -> i32 {
        self.time
    }

    /// Combine the day and hour of the report with a year and month.
    ///
    /// Returns `None` if that isn't a valid time, for instance when the coded day was below 50.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use sounding_decode::analyze;
    ///
    /// let snd = analyze("TTAA 65124 72786 99921 10958 27012", "").unwrap();
    /// let expected = NaiveDate::from_ymd_opt(2024, 3, 15).and_then(|d| d.and_hms_opt(12, 0, 0));
    /// assert_eq!(snd.valid_time(2024, 3), expected);
    /// assert_eq!(snd.valid_time(2024, 13), None);
    /// ```
    pub fn valid_time(&self, year: i32, month: u32) -> Option<NaiveDateTime> {
        let day = u32::try_from(self.date).ok()?;
        let hour = u32::try_from(self.time).ok()?;

        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, 0, 0)
    }

    /// Surface pressure in hPa.
    #[inline]
    pub fn surface_pressure(&self) -> i32 {
        self.surface_pressure
    }

    /// Surface temperature in C.
    #[inline]
    pub fn surface_temperature(&self) -> f64 {
        self.surface_temperature
    }

    /// Surface dewpoint depression in C.
    #[inline]
    pub fn surface_dewpoint_depression(&self) -> f64 {
        self.surface_dewpoint_depression
    }

    /// Surface dew point in C.
    #[inline]
    pub fn surface_dewpoint(&self) -> f64 {
        self.surface_temperature - self.surface_dewpoint_depression
    }

    /// Surface wind direction in degrees.
    #[inline]
    pub fn surface_wind_direction(&self) -> i32 {
        self.surface_wind_direction
    }

    /// Surface wind speed in knots.
    #[inline]
    pub fn surface_wind_speed(&self) -> i32 {
        self.surface_wind_speed
    }

    /// Levels from the TTAA report in the order they were reported.
    #[inline]
    pub fn mandatory_levels(&self) -> &[DecodedLevel] {
        &self.mandatory_levels
    }

    /// Levels from the TTBB report, sorted by descending pressure.
    #[inline]
    pub fn significant_levels(&self) -> &[DecodedLevel] {
        &self.significant_levels
    }

    /// The tropopause, if the report had an `88` group.
    #[inline]
    pub fn tropopause(&self) -> Option<Tropopause> {
        self.tropopause
    }

    /// The level of maximum wind, if the report had a `77` group.
    #[inline]
    pub fn max_wind(&self) -> Option<MaxWind> {
        self.max_wind
    }

    /// Structural problems found while decoding. Parts of the sounding they affect are empty.
    #[inline]
    pub fn format_errors(&self) -> &[FormatError] {
        &self.format_errors
    }

    /// Mandatory and significant levels together, sorted by descending pressure.
    ///
    /// Where both have a level at the same pressure the mandatory level comes first.
    pub fn levels(&self) -> Vec<DecodedLevel> {
        self.mandatory_levels
            .iter()
            .chain(self.significant_levels.iter())
            .copied()
            .sorted_by(|a, b| b.pressure.cmp(&a.pressure))
            .collect()
    }

    /// All levels in physical units, ordered from the bottom up.
    ///
    /// Levels reported at the same pressure in both parts are merged into one row, mandatory
    /// values are kept and anything they lack is taken from the significant level.
    pub fn profile(&self) -> Vec<DataRow> {
        self.levels()
            .into_iter()
            .coalesce(|a, b| {
                if a.pressure == b.pressure {
                    Ok(a.fill_from(&b))
                } else {
                    Err((a, b))
                }
            })
            .map(|lvl| lvl.data_row())
            .collect()
    }
}

/// The tropopause level from an `88` group. Missing values are reported as zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tropopause {
    /// Pressure in hPa
    pub pressure: i32,
    /// Temperature in C
    pub temperature: f64,
    /// Dew point in C
    pub dewpoint: f64,
    /// Wind direction in degrees
    pub wind_direction: i32,
    /// Wind speed in knots
    pub wind_speed: i32,
}

impl From<DecodedLevel> for Tropopause {
    fn from(lvl: DecodedLevel) -> Self {
        Tropopause {
            pressure: lvl.pressure,
            temperature: lvl.temperature.unwrap_or(0.0),
            dewpoint: lvl.dewpoint().unwrap_or(0.0),
            wind_direction: lvl.wind_direction.unwrap_or(0),
            wind_speed: lvl.wind_speed.unwrap_or(0),
        }
    }
}

/// The level of maximum wind from a `77` group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxWind {
    /// Pressure in hPa
    pub pressure: i32,
    /// Wind direction in degrees
    pub wind_direction: Option<i32>,
    /// Wind speed in knots
    pub wind_speed: Option<i32>,
}

mod data_row;
mod level;
