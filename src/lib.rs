//! Bech32 and bech32m codec.
//!
//! Maps a human-readable part (HRP) plus a sequence of 5-bit values to a
//! single checksum-protected ASCII string, and back. The checksum constant
//! distinguishes the original bech32 scheme from its bech32m revision;
//! [`decode`] detects which one applies.
//!
//! ```
//! use bech32_codec::{decode, encode, Variant};
//!
//! let s = encode("a", &[]).unwrap();
//! assert_eq!(s, "a1lqfn3a");
//! let r = decode(&s).unwrap();
//! assert_eq!(r.hrp, "a");
//! assert_eq!(r.variant, Variant::Bech32m);
//! ```

pub const SEPARATOR: char = '1';
pub const MIN_BECH32_LENGTH: usize = 8;
pub const MAX_BECH32_LENGTH: usize = 90;
pub const MIN_HRP_LENGTH: usize = 1;
pub const MAX_HRP_LENGTH: usize = 83;
pub const CHECKSUM_LENGTH: usize = 6;

pub(crate) const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

mod charset;
mod checksum;
mod dec;
mod enc;
mod error;
mod validate;

pub use crate::checksum::Variant;
pub use crate::dec::{decode, DecodedResult, Parts, VariantTag};
pub use crate::enc::{encode, encode_legacy};
pub use crate::error::Error;
pub use crate::validate::strip_unknown_chars;
