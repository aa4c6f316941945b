use crate::charset;
use crate::checksum::{create_checksum, Variant};
use crate::error::Error;
use crate::validate;
use crate::{CHECKSUM_LENGTH, MAX_BECH32_LENGTH, SEPARATOR};

/// Encodes `hrp` and `dp` (5-bit values) under the revised (bech32m)
/// checksum constant. The HRP is lowercased for canonical output.
pub fn encode(hrp: &str, dp: &[u8]) -> Result<String, Error> {
    encode_with_constant(hrp, dp, Variant::Bech32m)
}

/// Encodes under the original (bech32) checksum constant.
pub fn encode_legacy(hrp: &str, dp: &[u8]) -> Result<String, Error> {
    encode_with_constant(hrp, dp, Variant::Bech32)
}

// Single parameterized path; the two public entry points only pick the
// constant.
fn encode_with_constant(hrp: &str, dp: &[u8], variant: Variant) -> Result<String, Error> {
    if hrp.is_empty() {
        return Err(Error::EmptyHrp);
    }
    validate::reject_hrp_out_of_bounds(hrp)?;
    validate::reject_values_out_of_range(hrp)?;
    if dp.iter().any(|&v| v > 31) {
        return Err(Error::ValueOutOfRange);
    }
    let total = hrp.len() + 1 + dp.len() + CHECKSUM_LENGTH;
    if total > MAX_BECH32_LENGTH {
        return Err(Error::TooLong);
    }

    let hrp = hrp.to_lowercase();
    let checksum = create_checksum(&hrp, dp, variant);
    let mut out = String::with_capacity(total);
    out.push_str(&hrp);
    out.push(SEPARATOR);
    for &v in dp.iter().chain(checksum.iter()) {
        out.push(charset::char_of(v));
    }
    Ok(out)
}
