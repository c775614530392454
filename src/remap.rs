//! Reverse mapping from the printable-ASCII encoding back to original bytes.
//!
//! The table is fixed. Code points it does not list pass through unchanged,
//! which makes the transform lossy: several original bytes share one
//! encoded character and only one of them can come back.

use std::sync::LazyLock;

use crate::error::{RemapError, Result};

// (encoded character, original byte)
const CONTROL_MAPPINGS: &[(u8, u8)] = &[
    (b'0', 0),   // NUL
    (b'1', 1),   // SOH
    (b'2', 2),   // STX
    (b'3', 3),   // ETX
    (b'4', 4),   // EOT
    (b'5', 5),   // ENQ
    (b'6', 6),   // ACK
    (b'7', 7),   // BEL
    (b'b', 8),   // BS
    (b' ', 10),  // LF, the most common source of a space
    (b'v', 11),  // VT
    (b'f', 12),  // FF
    (b'e', 14),  // SO
    (b'E', 27),  // ESC, shadowed by the DLE range
    (b'D', 127), // DEL, shadowed by the DLE range
];

// DLE..SUB were written as 'A'..='K', FS..US as 'L'..='O'.
const DLE_RANGE: (u8, u8, u8) = (b'A', 16, 11);
const FS_RANGE: (u8, u8, u8) = (b'L', 28, 4);

// Bytes from 128 up were folded onto code points 48..=123. Only 76 entries
// exist, so this rule can restore 128..=203 and nothing above.
const EXTENDED_RANGE: (u8, u8, u8) = (48, 128, 76);

static STANDARD: LazyLock<RemapTable> = LazyLock::new(RemapTable::build);

/// Lookup table from encoded code point (0..=255) to original byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapTable {
    entries: [Option<u8>; 256],
}

impl RemapTable {
    /// Builds the fixed table.
    ///
    /// Later rules overwrite earlier ones: the extended range first, then the
    /// control mappings, then the letter ranges. So `'0'` restores NUL and
    /// `'D'` restores DC3 rather than DEL.
    pub fn build() -> Self {
        let mut entries = [None; 256];

        let (start, base, len) = EXTENDED_RANGE;
        for i in 0..len {
            entries[usize::from(start + i)] = Some(base + i);
        }
        for &(encoded, original) in CONTROL_MAPPINGS {
            entries[usize::from(encoded)] = Some(original);
        }
        for (start, base, len) in [DLE_RANGE, FS_RANGE] {
            for i in 0..len {
                entries[usize::from(start + i)] = Some(base + i);
            }
        }

        Self { entries }
    }

    /// Returns a copy of this table with `code_point` restoring `byte`.
    pub fn with_entry(mut self, code_point: u8, byte: u8) -> Self {
        self.entries[usize::from(code_point)] = Some(byte);
        self
    }

    /// The process-wide table, built on first use.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Raw table entry for `code_point`, if the table lists it.
    pub fn get(&self, code_point: u8) -> Option<u8> {
        self.entries[usize::from(code_point)]
    }

    /// Maps one decoded code point to an output byte.
    ///
    /// Returns `None` for code points above 255, which have no byte form.
    pub fn map_code_point(&self, code_point: u32) -> Option<u8> {
        let byte = u8::try_from(code_point).ok()?;
        // Printable ASCII and unlisted control bytes both pass through.
        Some(self.get(byte).unwrap_or(byte))
    }

    /// Maps every character of `payload` in order, one byte per character.
    pub fn remap_payload(&self, payload: &str) -> Result<Vec<u8>> {
        payload
            .chars()
            .enumerate()
            .map(|(offset, c)| {
                let code_point = u32::from(c);
                self.map_code_point(code_point)
                    .ok_or(RemapError::CodePointOutOfRange { code_point, offset })
            })
            .collect()
    }
}

impl Default for RemapTable {
    fn default() -> Self {
        Self::build()
    }
}
