//! Enums used to identify the parts of a coded upper air report.
use serde::Serialize;
use std::fmt;
use strum_macros::EnumIter;

/// The part of a TEMP message a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    /// Part A, mandatory levels up to 100 hPa.
    #[serde(rename = "TTAA")]
    Ttaa,
    /// Part B, significant levels up to 100 hPa.
    #[serde(rename = "TTBB")]
    Ttbb,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Ttaa => write!(f, "TTAA"),
            Section::Ttbb => write!(f, "TTBB"),
        }
    }
}

/// The standard pressure surfaces reported in Part A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum MandatoryLevel {
    Hpa1000,
    Hpa925,
    Hpa850,
    Hpa700,
    Hpa500,
    Hpa400,
    Hpa300,
    Hpa250,
    Hpa200,
    Hpa150,
    Hpa100,
}

impl MandatoryLevel {
    /// Look up the level for the two digit indicator that starts a `PPhhh` group.
    ///
    /// Both `00` and `99` map to 1000 hPa.
    pub fn from_indicator(indicator: &str) -> Option<Self> {
        use self::MandatoryLevel::*;

        match indicator {
            "99" | "00" => Some(Hpa1000),
            "92" => Some(Hpa925),
            "85" => Some(Hpa850),
            "70" => Some(Hpa700),
            "50" => Some(Hpa500),
            "40" => Some(Hpa400),
            "30" => Some(Hpa300),
            "25" => Some(Hpa250),
            "20" => Some(Hpa200),
            "15" => Some(Hpa150),
            "10" => Some(Hpa100),
            _ => None,
        }
    }

    /// The indicator used for this level in a TTAA level stream.
    pub fn indicator(self) -> &'static str {
        use self::MandatoryLevel::*;

        match self {
            Hpa1000 => "00",
            Hpa925 => "92",
            Hpa850 => "85",
            Hpa700 => "70",
            Hpa500 => "50",
            Hpa400 => "40",
            Hpa300 => "30",
            Hpa250 => "25",
            Hpa200 => "20",
            Hpa150 => "15",
            Hpa100 => "10",
        }
    }

    /// Pressure in hPa.
    pub fn pressure(self) -> i32 {
        use self::MandatoryLevel::*;

        match self {
            Hpa1000 => 1000,
            Hpa925 => 925,
            Hpa850 => 850,
            Hpa700 => 700,
            Hpa500 => 500,
            Hpa400 => 400,
            Hpa300 => 300,
            Hpa250 => 250,
            Hpa200 => 200,
            Hpa150 => 150,
            Hpa100 => 100,
        }
    }
}
