#![warn(missing_docs)]
//! Decoders for WMO TEMP upper air reports.
//!
//! A radiosonde sounding is sent as a TEMP message in parts. This crate decodes Part A (TTAA),
//! the mandatory pressure levels with the tropopause and maximum wind, and Part B (TTBB), the
//! significant temperature, humidity and wind levels, into a `DecodedSounding`.
//!
//! ```rust
//! use sounding_decode::analyze;
//!
//! let ttaa = "TTAA 51004 41953 99996 23504 10203 00120 23606 10204 92810 20456 14010 \
//!             88215 55557 29065 77220 29070 31313";
//! let ttbb = "TTBB 5100/ 41953 00996 23504 11975 21856 21212 00996 10203 11970 18012";
//!
//! let snd = analyze(ttaa, ttbb).unwrap();
//!
//! assert_eq!(snd.station(), "41953");
//! assert_eq!(snd.mandatory_levels().len(), 2);
//! assert_eq!(snd.tropopause().unwrap().pressure, 215);
//! assert_eq!(snd.max_wind().unwrap().wind_speed, Some(70));
//! assert_eq!(snd.significant_levels().len(), 3);
//! ```
//!
//! Decoding is a pure function of the text, so a message decodes the same way every time and
//! calls from several threads need no coordination.
//!
//! Missing structure, like a report that is too short or a TTBB report without a surface group,
//! does not fail. Those problems are listed in `DecodedSounding::format_errors` and the parts of
//! the sounding they affect are left empty. Only a blank TTAA report or a group that can't be
//! read fails, see `DecodeError`.

//
// API
//
pub use crate::{
    analysis::analyze,
    error::{DecodeError, FormatError, GroupError, Result},
    groups::Wind,
    keys::{MandatoryLevel, Section},
    sounding::{DataRow, DecodedLevel, DecodedSounding, MaxWind, Tropopause},
    ttaa::decode_ttaa,
    ttbb::{decode_ttbb, TtbbReport},
};

pub mod groups;

//
// Internal use only
//

// Modules
mod analysis;
mod error;
mod keys;
mod sounding;
mod ttaa;
mod ttbb;
mod utility;
