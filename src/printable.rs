//! Forward direction: fold arbitrary bytes onto printable ASCII.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{RemapError, Result};

const ASCII_PRINTABLE_START: u8 = 32;
const ASCII_PRINTABLE_END: u8 = 126;

// (original byte, printable replacement)
const CHAR_MAPPINGS: &[(u8, u8)] = &[
    (0, b'0'),
    (1, b'1'),
    (2, b'2'),
    (3, b'3'),
    (4, b'4'),
    (5, b'5'),
    (6, b'6'),
    (7, b'7'),
    (8, b'b'),
    (9, b' '),
    (10, b' '),
    (11, b'v'),
    (12, b'f'),
    (13, b' '),
    (14, b'e'),
    (15, b'f'),
    (27, b'E'),
    (127, b'D'),
];

/// Counts of what the forward encoder had to rewrite.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConversionStats {
    pub total_bytes: usize,
    pub converted_bytes: usize,
    /// Original byte -> number of times it was rewritten.
    pub character_map: HashMap<u8, usize>,
}

impl ConversionStats {
    pub fn percentage(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.converted_bytes as f64 / self.total_bytes as f64 * 100.0
    }

    pub fn log_summary(&self) {
        if self.converted_bytes == 0 {
            log::info!("No conversions needed, input is already printable ASCII");
            return;
        }

        log::info!(
            "ASCII conversion: {} of {} bytes converted ({:.2}%)",
            self.converted_bytes,
            self.total_bytes,
            self.percentage()
        );

        let mut sorted: Vec<_> = self.character_map.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        for (byte, count) in sorted.iter().take(10) {
            let repr = match **byte {
                0..=31 => format!("0x{byte:02X} (control)"),
                32..=126 => format!("0x{byte:02X} ('{}')", **byte as char),
                127 => "0x7F (DEL)".to_string(),
                _ => format!("0x{byte:02X} (extended)"),
            };
            log::debug!("  {repr} converted {count} times");
        }
        if sorted.len() > 10 {
            log::debug!("  {} more unique characters", sorted.len() - 10);
        }
    }
}

fn convert_byte(byte: u8, stats: &mut ConversionStats) -> u8 {
    if (ASCII_PRINTABLE_START..=ASCII_PRINTABLE_END).contains(&byte) {
        return byte;
    }

    stats.converted_bytes += 1;
    *stats.character_map.entry(byte).or_insert(0) += 1;

    if let Some(&(_, to)) = CHAR_MAPPINGS.iter().find(|&&(from, _)| from == byte) {
        return to;
    }

    match byte {
        16..=26 => b'A' + (byte - 16),
        28..=31 => b'L' + (byte - 28),
        // 128..=255 onto '0'..='z'
        128..=255 => 48 + (byte - 128) % 75,
        _ => b'?',
    }
}

/// Rewrites every byte of `data` as a printable ASCII character.
pub fn to_printable_ascii(data: &[u8]) -> (Vec<u8>, ConversionStats) {
    let mut stats = ConversionStats {
        total_bytes: data.len(),
        ..Default::default()
    };
    let encoded = data.iter().map(|&b| convert_byte(b, &mut stats)).collect();
    (encoded, stats)
}

pub fn validate_printable_ascii(data: &[u8]) -> Result<()> {
    match data
        .iter()
        .position(|b| !(ASCII_PRINTABLE_START..=ASCII_PRINTABLE_END).contains(b))
    {
        Some(offset) => Err(RemapError::NotPrintable {
            offset,
            byte: data[offset],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remap::RemapTable;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn reverse(encoded: &[u8]) -> Vec<u8> {
        let table = RemapTable::standard();
        encoded
            .iter()
            .map(|&c| table.map_code_point(u32::from(c)).unwrap())
            .collect()
    }

    #[test]
    fn printable_unchanged() {
        let input = b"Hello, World!";
        let (result, stats) = to_printable_ascii(input);
        assert_eq!(result, input.to_vec());
        assert_eq!(stats.converted_bytes, 0);
        assert_eq!(stats.percentage(), 0.0);
    }

    #[test]
    fn control_characters() {
        let input = [0, 9, 10, 13, 27, 16, 26, 28, 31, 127];
        let (result, stats) = to_printable_ascii(&input);
        assert_eq!(result, b"0   EAKLOD".to_vec());
        assert_eq!(stats.converted_bytes, input.len());
        assert_eq!(stats.character_map.get(&9), Some(&1));
    }

    #[test]
    fn extended_bytes() {
        let (result, stats) = to_printable_ascii(&[128, 200, 202, 203, 255]);
        assert_eq!(result, vec![48, 120, 122, 48, 100]);
        assert_eq!(stats.converted_bytes, 5);
        assert_eq!(stats.percentage(), 100.0);
    }

    #[test]
    fn random_data_is_printable() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in [1usize, 10, 100, 1000, 5000] {
            let mut input = vec![0u8; size];
            rng.fill_bytes(&mut input);
            let (encoded, stats) = to_printable_ascii(&input);
            assert_eq!(encoded.len(), size);
            assert_eq!(stats.total_bytes, size);
            assert!(validate_printable_ascii(&encoded).is_ok());
        }
    }

    #[test]
    fn validation() {
        assert!(validate_printable_ascii(b"Valid ASCII!").is_ok());
        assert!(validate_printable_ascii(b"").is_ok());

        let err = validate_printable_ascii(&[b'A', 0, 127]).unwrap_err();
        assert!(matches!(err, RemapError::NotPrintable { offset: 1, byte: 0 }));
    }

    #[test]
    fn round_trip_restores_uniquely_encoded_controls() {
        let controls: Vec<u8> = (0u8..=8)
            .chain([10, 11, 12, 14])
            .chain(16..=18)
            .chain(21..=26)
            .chain(28..=31)
            .collect();
        let (encoded, _) = to_printable_ascii(&controls);
        assert_eq!(reverse(&encoded), controls);
    }

    #[test]
    fn round_trip_restores_unclaimed_printable() {
        let printable: Vec<u8> = (33u8..=47).chain(124..=126).collect();
        let (encoded, _) = to_printable_ascii(&printable);
        assert_eq!(reverse(&encoded), printable);
    }

    #[test]
    fn round_trip_is_lossy_for_shared_characters() {
        // TAB, CR and LF all become a space; only LF comes back.
        let (encoded, _) = to_printable_ascii(&[9, 13, 10]);
        assert_eq!(reverse(&encoded), vec![10, 10, 10]);

        // DC3 and DEL share 'D', DC4 and ESC share 'E'; the letter range wins.
        let (encoded, _) = to_printable_ascii(&[19, 127, 20, 27]);
        assert_eq!(encoded, b"DDEE".to_vec());
        assert_eq!(reverse(&encoded), vec![19, 19, 20, 20]);
    }
}
