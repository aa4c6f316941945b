use thiserror::Error;

/// Everything that can go wrong while encoding or decoding.
///
/// All variants are input-validation failures; none is transient. The first
/// violated check aborts the call, so callers always see the highest-
/// precedence failure for a given input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("bech32 string is null")]
    NullInput,
    #[error("HRP must not be empty")]
    EmptyHrp,
    #[error("bech32 string too short")]
    TooShort,
    #[error("bech32 string too long")]
    TooLong,
    #[error("bech32 string is mixed case")]
    MixedCase,
    #[error("bech32 string has value out of range")]
    ValueOutOfRange,
    #[error("bech32 string is missing separator character")]
    MissingSeparator,
    #[error("HRP must be at least one character")]
    HrpTooShort,
    #[error("HRP must be less than 84 characters")]
    HrpTooLong,
    #[error("data part must be at least six characters")]
    DataPartTooShort,
    #[error("data part contains invalid character")]
    InvalidCharacter,
    #[error("bech32 string has bad checksum")]
    BadChecksum,
}
