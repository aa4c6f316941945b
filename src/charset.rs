use crate::error::Error;
use crate::CHARSET;

// Reverse of CHARSET, indexed by code point. Covers both cases so lookup is
// case-insensitive; -1 marks characters outside the alphabet.
static CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// Maps an alphabet character (either case) to its 5-bit value.
pub(crate) fn value_of(c: char) -> Result<u8, Error> {
    let idx = c as usize;
    if idx >= 128 || CHARSET_REV[idx] < 0 {
        return Err(Error::InvalidCharacter);
    }
    Ok(CHARSET_REV[idx] as u8)
}

/// Maps a 5-bit value to its alphabet character.
pub(crate) fn char_of(value: u8) -> char {
    CHARSET[(value & 0x1f) as usize] as char
}

pub(crate) fn is_member(c: char) -> bool {
    (c as usize) < 128 && CHARSET_REV[c as usize] >= 0
}
