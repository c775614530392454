//! The `.raw` text layout: encoded payload lines followed by two metadata
//! lines, the original file name and its size in bytes.

use serde::Serialize;

use crate::error::{RemapError, Result};

pub const METADATA_LINES: usize = 2;

/// What to do with byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DecodePolicy {
    /// Drop malformed sequences and keep going.
    #[default]
    Skip,
    /// Stop at the first malformed sequence.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub dropped_bytes: usize,
}

pub fn decode_text(bytes: &[u8], policy: DecodePolicy) -> Result<DecodedText> {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped_bytes = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());

        let invalid = chunk.invalid();
        if invalid.is_empty() {
            continue;
        }
        match policy {
            DecodePolicy::Skip => dropped_bytes += invalid.len(),
            DecodePolicy::Fail => return Err(RemapError::Decode { offset: text.len() }),
        }
    }

    Ok(DecodedText {
        text,
        dropped_bytes,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub file_name: String,
    /// Size line parsed as a byte count, `None` when it is not a number.
    pub declared_size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDocument {
    pub payload: String,
    pub metadata: Metadata,
}

impl EncodedDocument {
    /// Splits `text` into payload and metadata.
    ///
    /// Trailing whitespace is trimmed before splitting on `\n`. Leading
    /// whitespace is kept: a space is encoded data, not padding.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.trim_end().split('\n').collect();
        if lines.len() <= METADATA_LINES {
            return Err(RemapError::Format { lines: lines.len() });
        }

        let (data, meta) = lines.split_at(lines.len() - METADATA_LINES);

        Ok(Self {
            payload: data.join("\n"),
            metadata: Metadata {
                file_name: meta[0].trim_end_matches('\r').to_string(),
                declared_size: meta[1].trim().parse().ok(),
            },
        })
    }
}

pub fn render_document(payload: &str, file_name: &str, size: u64) -> String {
    format!("{payload}\n{file_name}\n{size}\n")
}
