//! Decode a full TEMP message, Part A and optionally Part B, into one sounding.
use crate::{
    error::{DecodeError, Result},
    sounding::DecodedSounding,
    ttaa::decode_ttaa,
    ttbb::{decode_ttbb, TtbbReport},
};
use tracing::{debug, instrument};

/// Decode a TTAA report and, if there is one, its TTBB report.
///
/// The TTAA report is required, a blank one is a `DecodeError::Validation`. A blank TTBB
/// report just leaves the significant levels empty. The date and time always come from the
/// TTAA report.
///
/// If a group can't be read the whole call fails with `DecodeError::Decoding`, no partial
/// sounding is returned. Structural problems don't fail, see `DecodedSounding::format_errors`.
///
/// # Examples
///
/// ```rust
/// use sounding_decode::{analyze, DecodeError};
///
/// let ttaa = "TTAA 51004 41953 99996 23504 10203 00120 23606 10204 50586 11957 27035 31313";
/// let ttbb = "TTBB 5100/ 41953 00996 23504 55500 11957 21212 00996 10203 55500 27035 31313";
///
/// let snd = analyze(ttaa, ttbb).unwrap();
/// assert_eq!(snd.station(), "41953");
/// assert_eq!(snd.mandatory_levels().len(), 2);
/// assert_eq!(snd.significant_levels().len(), 2);
///
/// let snd = analyze(ttaa, "").unwrap();
/// assert!(snd.significant_levels().is_empty());
///
/// assert_eq!(analyze("  ", ttbb), Err(DecodeError::Validation("TTAA required")));
/// ```
#[instrument(level = "debug", skip_all)]
pub fn analyze(ttaa: &str, ttbb: &str) -> Result<DecodedSounding> {
    if ttaa.trim().is_empty() {
        return Err(DecodeError::Validation("TTAA required"));
    }

    let snd = decode_ttaa(ttaa).map_err(|err| {
        debug!(%err, "failed to decode TTAA report");
        err
    })?;

    if ttbb.trim().is_empty() {
        return Ok(snd);
    }

    let TtbbReport {
        significant_levels,
        format_errors,
        ..
    } = decode_ttbb(ttbb).map_err(|err| {
        debug!(%err, "failed to decode TTBB report");
        err
    })?;

    Ok(snd
        .with_significant_levels(significant_levels)
        .with_format_errors(format_errors))
}
