use crate::CHECKSUM_LENGTH;

/// Which checksum constant a string was produced or validated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Original scheme, checksum constant 1.
    Bech32,
    /// Revised scheme, checksum constant 0x2bc830a3.
    Bech32m,
}

impl Variant {
    pub(crate) const fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Bech32 => f.write_str("bech32"),
            Variant::Bech32m => f.write_str("bech32m"),
        }
    }
}

const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// Polynomial-residue reduction over 5-bit symbols, strictly left-to-right.
pub(crate) fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = (chk & 0x01ff_ffff) << 5 ^ u32::from(v);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}

/// Folds the HRP into the checksum domain: high 3 bits of each character,
/// a zero, then the low 5 bits of each character. 2n+1 values for n chars.
pub(crate) fn expand_hrp(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(2 * bytes.len() + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

/// Computes the six trailing checksum values for `hrp` + `dp` under the
/// given variant's constant, most significant 5-bit group first.
pub(crate) fn create_checksum(hrp: &str, dp: &[u8], variant: Variant) -> [u8; CHECKSUM_LENGTH] {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(dp);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let residue = polymod(&values) ^ variant.constant();
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((residue >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// True iff `dp` (checksum values included) verifies under the variant's
/// constant.
pub(crate) fn verify_checksum(hrp: &str, dp: &[u8], variant: Variant) -> bool {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(dp);
    polymod(&values) == variant.constant()
}
