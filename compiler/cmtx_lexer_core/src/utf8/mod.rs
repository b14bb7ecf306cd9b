//! Byte-level UTF-8 arithmetic.
//!
//! Codepoints are counted without decoding: every byte that is not a
//! continuation byte (`0b10xx_xxxx`) starts a new codepoint. For
//! well-formed UTF-8 this equals `str::chars().count()`. For ill-formed
//! input each stray lead byte counts once and stray continuation bytes
//! count zero.

/// Returns `true` if `byte` is a UTF-8 continuation byte (high bits `10`).
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of codepoints in `bytes`.
pub fn count_codepoints(bytes: &[u8]) -> u64 {
    bytes.iter().filter(|&&b| !is_continuation(b)).count() as u64
}

/// Number of `\n` bytes in `bytes`.
pub fn count_newlines(bytes: &[u8]) -> u64 {
    memchr::memchr_iter(b'\n', bytes).count() as u64
}
