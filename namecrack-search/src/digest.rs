use std::fmt;
use std::str::FromStr;

use sha1::{Digest, Sha1};

/// Length of a SHA1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a hex-encoded SHA1 digest.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Lowercase hex lookup table.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// A target digest that failed format validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestFormatError {
    #[error("expected 40 hex characters, got {len}")]
    Length { len: usize },

    #[error("non-hex character {ch:?} at position {index}")]
    NonHex { index: usize, ch: char },
}

/// The SHA1 digest a search is looking for.
///
/// Parsed once from hex, so comparisons during the search are plain byte
/// comparisons and the input's case never matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetDigest([u8; DIGEST_LEN]);

impl TargetDigest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    #[inline]
    pub fn matches(&self, digest: &[u8; DIGEST_LEN]) -> bool {
        self.0 == *digest
    }
}

impl FromStr for TargetDigest {
    type Err = DigestFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Count chars, not bytes, so a multi-byte character reports a sane length.
        let len = s.chars().count();
        if len != DIGEST_HEX_LEN {
            return Err(DigestFormatError::Length { len });
        }

        let mut nibbles = [0u8; DIGEST_HEX_LEN];
        for (index, ch) in s.chars().enumerate() {
            nibbles[index] = hex_to_nibble(ch).ok_or(DigestFormatError::NonHex { index, ch })?;
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (i, pair) in nibbles.chunks_exact(2).enumerate() {
            bytes[i] = (pair[0] << 4) | pair[1];
        }

        Ok(Self(bytes))
    }
}

impl fmt::Display for TargetDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digest_hex(&self.0))
    }
}

/// Convert a hex character to its nibble value (0-15)
#[inline]
fn hex_to_nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// SHA1 of the lowercased name.
#[inline]
pub fn name_digest(name: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(name.to_lowercase().as_bytes());
    hasher.finalize().into()
}

/// Lowercase hex encoding of a digest.
pub fn digest_hex(digest: &[u8; DIGEST_LEN]) -> String {
    let mut out = String::with_capacity(DIGEST_HEX_LEN);
    for byte in digest {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    // john -> SHA1: a51dda7c7ff50b61eaea0444371f4a6a9301e501
    const JOHN: [u8; 20] = hex!("a51dda7c7ff50b61eaea0444371f4a6a9301e501");

    #[test]
    fn test_name_digest() {
        assert_eq!(name_digest("john"), JOHN);
        assert_eq!(
            name_digest("mary"),
            hex!("5665331b9b819ac358165f8c38970dc8c7ddb47d")
        );
    }

    #[test]
    fn test_name_digest_ignores_case() {
        for name in ["John", "JOHN", "jOhN", "Mary", "PATRICIA", "Zoë"] {
            assert_eq!(name_digest(name), name_digest(&name.to_lowercase()));
        }
        assert_eq!(name_digest("JOHN"), JOHN);
    }

    #[test]
    fn test_digest_hex() {
        assert_eq!(digest_hex(&JOHN), "a51dda7c7ff50b61eaea0444371f4a6a9301e501");
        assert_eq!(digest_hex(&[0u8; 20]), "0".repeat(40));
        assert_eq!(digest_hex(&[0xFF; 20]), "f".repeat(40));
    }

    #[test]
    fn test_parse_target_any_case() {
        let lower: TargetDigest = "a51dda7c7ff50b61eaea0444371f4a6a9301e501".parse().unwrap();
        let upper: TargetDigest = "A51DDA7C7FF50B61EAEA0444371F4A6A9301E501".parse().unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.as_bytes(), &JOHN);
        assert!(upper.matches(&name_digest("john")));
        assert_eq!(upper.to_string(), "a51dda7c7ff50b61eaea0444371f4a6a9301e501");
    }

    #[test]
    fn test_parse_target_wrong_length() {
        assert_eq!(
            "".parse::<TargetDigest>(),
            Err(DigestFormatError::Length { len: 0 })
        );
        assert_eq!(
            "a51dda7c7ff50b61eaea0444371f4a6a9301e50".parse::<TargetDigest>(),
            Err(DigestFormatError::Length { len: 39 })
        );
        assert_eq!(
            "a51dda7c7ff50b61eaea0444371f4a6a9301e5011".parse::<TargetDigest>(),
            Err(DigestFormatError::Length { len: 41 })
        );
    }

    #[test]
    fn test_parse_target_non_hex() {
        let malformed = format!("zz11{}", "0".repeat(36));
        assert_eq!(
            malformed.parse::<TargetDigest>(),
            Err(DigestFormatError::NonHex { index: 0, ch: 'z' })
        );

        let multibyte = format!("{}é", "0".repeat(39));
        assert_eq!(
            multibyte.parse::<TargetDigest>(),
            Err(DigestFormatError::NonHex { index: 39, ch: 'é' })
        );
    }
}
