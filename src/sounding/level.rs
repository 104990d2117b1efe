use crate::{groups::Wind, sounding::DataRow, utility::to_optioned};
use metfor::{Celsius, HectoPascal, Knots, Meters, WindSpdDir};
use optional::some;
use serde::Serialize;

/// One level of a decoded sounding.
///
/// The dew point is not stored, it is always calculated from the temperature and dewpoint
/// depression.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "LevelRecord")]
pub struct DecodedLevel {
    /// Pressure in hPa
    pub pressure: i32,
    /// Geopotential height in meters
    pub height: Option<i32>,
    /// Temperature in C
    pub temperature: Option<f64>,
    /// Dewpoint depression in C
    pub dewpoint_depression: Option<f64>,
    /// Wind direction in degrees, as coded
    pub wind_direction: Option<i32>,
    /// Wind speed in knots
    pub wind_speed: Option<i32>,
}

impl DecodedLevel {
    /// Create a level with only the pressure known.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sounding_decode::DecodedLevel;
    ///
    /// let lvl = DecodedLevel::new(500).with_temperature(-11.9).with_dewpoint_depression(7.0);
    /// assert_eq!(lvl.pressure, 500);
    /// assert!(lvl.height.is_none());
    /// assert!((lvl.dewpoint().unwrap() - -18.9).abs() < 1.0e-9);
    /// ```
    #[inline]
    pub fn new(pressure: i32) -> Self {
        DecodedLevel {
            pressure,
            height: None,
            temperature: None,
            dewpoint_depression: None,
            wind_direction: None,
            wind_speed: None,
        }
    }

    /// Builder method for the height.
    #[inline]
    pub fn with_height<T>(mut self, height: T) -> Self
    where
        Option<i32>: From<T>,
    {
        self.height = Option::from(height);
        self
    }

    /// Builder method for the temperature.
    #[inline]
    pub fn with_temperature<T>(mut self, temperature: T) -> Self
    where
        Option<f64>: From<T>,
    {
        self.temperature = Option::from(temperature);
        self
    }

    /// Builder method for the dewpoint depression.
    #[inline]
    pub fn with_dewpoint_depression<T>(mut self, depression: T) -> Self
    where
        Option<f64>: From<T>,
    {
        self.dewpoint_depression = Option::from(depression);
        self
    }

    /// Builder method for the wind.
    #[inline]
    pub fn with_wind<T>(mut self, wind: T) -> Self
    where
        Option<Wind>: From<T>,
    {
        self.set_wind(Option::from(wind));
        self
    }

    pub(crate) fn set_wind(&mut self, wind: Option<Wind>) {
        self.wind_direction = wind.map(|w| w.direction);
        self.wind_speed = wind.map(|w| w.speed);
    }

    /// Dew point in C, the temperature less the dewpoint depression.
    #[inline]
    pub fn dewpoint(&self) -> Option<f64> {
        match (self.temperature, self.dewpoint_depression) {
            (Some(t), Some(dd)) => Some(t - dd),
            _ => None,
        }
    }

    /// The wind, if both direction and speed are known.
    #[inline]
    pub fn wind(&self) -> Option<Wind> {
        match (self.wind_direction, self.wind_speed) {
            (Some(direction), Some(speed)) => Some(Wind { direction, speed }),
            _ => None,
        }
    }

    /// Fill in anything missing from this level with values from `other`.
    ///
    /// Temperature and dewpoint depression travel together so the dew point is never built from
    /// two different levels.
    pub(crate) fn fill_from(mut self, other: &DecodedLevel) -> Self {
        self.height = self.height.or(other.height);

        if self.temperature.is_none() {
            self.temperature = other.temperature;
            self.dewpoint_depression = other.dewpoint_depression;
        }

        if self.wind().is_none() {
            self.set_wind(other.wind());
        }

        self
    }

    /// Convert to physical units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{HectoPascal, Meters};
    /// use sounding_decode::{DecodedLevel, Wind};
    ///
    /// let row = DecodedLevel::new(850)
    ///     .with_height(1537)
    ///     .with_wind(Wind { direction: 240, speed: 15 })
    ///     .data_row();
    ///
    /// assert_eq!(row.pressure.unwrap(), HectoPascal(850.0));
    /// assert_eq!(row.height.unwrap(), Meters(1537.0));
    /// assert!(row.temperature.is_none());
    /// assert!(row.wind.is_some());
    /// ```
    pub fn data_row(&self) -> DataRow {
        DataRow {
            pressure: some(HectoPascal(f64::from(self.pressure))),
            height: to_optioned(self.height.map(|h| Meters(f64::from(h)))),
            temperature: to_optioned(self.temperature.map(Celsius)),
            dew_point: to_optioned(self.dewpoint().map(Celsius)),
            wind: to_optioned(self.wind().map(|w| WindSpdDir {
                speed: Knots(f64::from(w.speed)),
                direction: f64::from(w.direction),
            })),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelRecord {
    pressure: i32,
    height: Option<i32>,
    temperature: Option<f64>,
    dewpoint: Option<f64>,
    dewpoint_depression: Option<f64>,
    wind_direction: Option<i32>,
    wind_speed: Option<i32>,
}

impl From<DecodedLevel> for LevelRecord {
    fn from(lvl: DecodedLevel) -> Self {
        LevelRecord {
            pressure: lvl.pressure,
            height: lvl.height,
            temperature: lvl.temperature,
            dewpoint: lvl.dewpoint(),
            dewpoint_depression: lvl.dewpoint_depression,
            wind_direction: lvl.wind_direction,
            wind_speed: lvl.wind_speed,
        }
    }
}
