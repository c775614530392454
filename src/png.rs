use std::fmt;

use serde::Serialize;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Outcome of comparing the first bytes of recovered data to the PNG signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HeaderCheck {
    Match,
    Mismatch { found: [u8; 8] },
    TooShort { len: usize },
}

impl HeaderCheck {
    pub fn of(data: &[u8]) -> Self {
        match data.first_chunk::<8>() {
            Some(head) if *head == PNG_SIGNATURE => Self::Match,
            Some(head) => Self::Mismatch { found: *head },
            None => Self::TooShort { len: data.len() },
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

impl fmt::Display for HeaderCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => write!(f, "valid PNG header"),
            Self::Mismatch { found } => write!(f, "PNG header mismatch, found {found:?}"),
            Self::TooShort { len } => write!(f, "only {len} bytes, too short for a PNG header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_signature() {
        assert_eq!(HeaderCheck::of(&PNG_SIGNATURE), HeaderCheck::Match);

        let mut file = PNG_SIGNATURE.to_vec();
        file.extend_from_slice(b"\0\0\0\rIHDR");
        assert!(HeaderCheck::of(&file).is_match());
    }

    #[test]
    fn mismatch_reports_found_bytes() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0A, 0x0A, 0x1A, 0x0A, 0xFF];
        assert_eq!(
            HeaderCheck::of(&data),
            HeaderCheck::Mismatch {
                found: [0x89, 0x50, 0x4E, 0x47, 0x0A, 0x0A, 0x1A, 0x0A]
            }
        );
    }

    #[test]
    fn short_input_is_not_compared() {
        assert_eq!(HeaderCheck::of(&[]), HeaderCheck::TooShort { len: 0 });
        assert_eq!(
            HeaderCheck::of(&PNG_SIGNATURE[..7]),
            HeaderCheck::TooShort { len: 7 }
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(HeaderCheck::Match.to_string(), "valid PNG header");
        assert_eq!(
            HeaderCheck::TooShort { len: 3 }.to_string(),
            "only 3 bytes, too short for a PNG header"
        );
        let mismatch = HeaderCheck::Mismatch { found: [0; 8] }.to_string();
        assert_eq!(mismatch, "PNG header mismatch, found [0, 0, 0, 0, 0, 0, 0, 0]");
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(HeaderCheck::TooShort { len: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "too_short", "len": 3 }));
    }
}
