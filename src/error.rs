//! Error types for the sounding-decode crate.
use crate::keys::Section;
use serde::Serialize;
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum DecodeError {
    /// A report that is required for decoding is missing or blank.
    #[error("{0}")]
    Validation(&'static str),
    /// A group could not be read while decoding.
    #[error("Decoding error: {0}")]
    Decoding(#[from] GroupError),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, DecodeError>;

/// A required field of a group could not be read as a number.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("malformed {field} in group '{group}'")]
pub struct GroupError {
    field: &'static str,
    group: String,
}

impl GroupError {
    pub(crate) fn new(field: &'static str, group: &str) -> Self {
        GroupError {
            field,
            group: group.to_owned(),
        }
    }

    /// The name of the field that failed, e.g. "pressure" or "hour".
    pub fn field(&self) -> &str {
        self.field
    }

    /// The group as it appeared in the report.
    pub fn group(&self) -> &str {
        &self.group
    }
}

/// Structural problems with a report. These never stop a decode, the affected part of the
/// result is just left empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatError {
    /// Not enough groups in the report to hold a header and any data.
    #[error("insufficient data in {section} report, only {found} groups")]
    InsufficientData {
        /// Which part of the message was short.
        section: Section,
        /// How many groups were found.
        found: usize,
    },
    /// No `00PPP` surface group was found in a TTBB report.
    #[error("no surface pressure group in TTBB report")]
    MissingSurfaceGroup,
}
