use crate::charset;
use crate::checksum::{verify_checksum, Variant};
use crate::error::Error;
use crate::validate;
use crate::CHECKSUM_LENGTH;

/// Output of a successful [`decode`]: lowercase HRP, payload values with
/// the trailing checksum stripped, and the variant that validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedResult {
    pub hrp: String,
    pub dp: Vec<u8>,
    pub variant: Variant,
}

/// Checksum status of a [`Parts`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantTag {
    /// No checksum applies to this pairing. Not produced by [`decode`];
    /// kept for callers that split strings without verifying them.
    NoChecksum,
    /// Checksum not yet verified against either constant.
    Unresolved,
    /// Checksum verified under the given variant's constant.
    Resolved(Variant),
}

/// HRP / data-value pairing mid-pipeline, before (or without) checksum
/// verification. Equality and hashing are structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parts {
    pub hrp: String,
    pub dp: Vec<u8>,
    pub tag: VariantTag,
}

/// Decodes a bech32/bech32m string, auto-detecting the variant.
///
/// Validation runs in a fixed order so error precedence is deterministic:
/// length floor and ceiling, case consistency, character range, separator
/// presence, then HRP and data-part bounds after the split.
pub fn decode(s: &str) -> Result<DecodedResult, Error> {
    validate::reject_too_short(s)?;
    validate::reject_too_long(s)?;
    validate::reject_mixed_case(s)?;
    validate::reject_values_out_of_range(s)?;
    validate::reject_no_separator(s)?;

    let lowered = s.to_lowercase();
    let hrp = validate::extract_human_readable_part(&lowered)?;
    let dp_chars = validate::extract_data_part(&lowered)?;
    validate::reject_hrp_out_of_bounds(hrp)?;
    validate::reject_data_part_too_short(dp_chars)?;

    let mut parts = Parts {
        hrp: hrp.to_owned(),
        dp: map_data_part(dp_chars)?,
        tag: VariantTag::Unresolved,
    };

    // The revised constant is tried first; a value can never satisfy both.
    for variant in [Variant::Bech32m, Variant::Bech32] {
        if verify_checksum(&parts.hrp, &parts.dp, variant) {
            parts.tag = VariantTag::Resolved(variant);
            break;
        }
    }
    let VariantTag::Resolved(variant) = parts.tag else {
        return Err(Error::BadChecksum);
    };

    let Parts { hrp, mut dp, .. } = parts;
    dp.truncate(dp.len() - CHECKSUM_LENGTH);
    Ok(DecodedResult { hrp, dp, variant })
}

fn map_data_part(dp: &str) -> Result<Vec<u8>, Error> {
    dp.chars().map(charset::value_of).collect()
}
