use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::document::{DecodePolicy, EncodedDocument, Metadata, decode_text, render_document};
use crate::error::{RemapError, Result};
use crate::png::{HeaderCheck, PNG_SIGNATURE};
use crate::printable::{ConversionStats, to_printable_ascii, validate_printable_ascii};
use crate::remap::RemapTable;

#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions<'a> {
    pub on_decode_error: DecodePolicy,
    pub table: &'a RemapTable,
}

impl Default for ConvertOptions<'static> {
    fn default() -> Self {
        Self {
            on_decode_error: DecodePolicy::default(),
            table: RemapTable::standard(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub payload_chars: usize,
    pub bytes_written: usize,
    /// Malformed UTF-8 bytes dropped while reading the input.
    pub dropped_bytes: usize,
    pub metadata: Metadata,
    pub header: HeaderCheck,
}

fn write_output(output_path: &Path, data: &[u8]) -> Result<()> {
    let mut outfile = BufWriter::new(File::create(output_path)?);
    outfile.write_all(data)?;
    outfile.flush()?;
    Ok(())
}

fn log_header(data: &[u8], header: HeaderCheck) {
    if let HeaderCheck::TooShort { .. } = header {
        return;
    }
    log::info!("First 8 bytes: {:?}", &data[..PNG_SIGNATURE.len()]);
    log::info!("Expected PNG header: {PNG_SIGNATURE:?}");
    if header.is_match() {
        log::info!("{header}");
    } else {
        log::warn!("{header}, file may need additional processing");
    }
}

/// Recovers the binary file behind an ASCII-encoded `.raw` document.
///
/// Nothing is written unless the input parses and every payload character
/// maps to a byte. An existing output file is overwritten.
pub fn convert_file(
    input_path: &Path,
    output_path: &Path,
    options: &ConvertOptions<'_>,
) -> Result<ConvertReport> {
    log::info!("Reading ASCII data from {}", input_path.display());
    let raw = fs::read(input_path)?;

    let decoded = decode_text(&raw, options.on_decode_error)?;
    if decoded.dropped_bytes > 0 {
        log::debug!("Dropped {} malformed UTF-8 bytes", decoded.dropped_bytes);
    }

    let document = EncodedDocument::parse(&decoded.text)?;
    let payload_chars = document.payload.chars().count();
    log::info!("ASCII data length: {payload_chars} characters");

    log::info!("Applying reverse ASCII conversion");
    let data = options.table.remap_payload(&document.payload)?;
    log::info!("Converted to {} original bytes", data.len());

    log::info!("Writing binary data to {}", output_path.display());
    write_output(output_path, &data)?;

    let header = HeaderCheck::of(&data);
    log_header(&data, header);

    if let Some(declared) = document.metadata.declared_size {
        if declared != data.len() as u64 {
            log::warn!(
                "Recovered {} bytes but the document declares {declared}",
                data.len()
            );
        }
    }

    Ok(ConvertReport {
        payload_chars,
        bytes_written: data.len(),
        dropped_bytes: decoded.dropped_bytes,
        metadata: document.metadata,
        header,
    })
}

/// Converts with the default options.
///
/// Returns `Ok(false)` when the input has too few lines to hold a payload
/// and its metadata. Any other failure is returned as an error.
pub fn convert(input_path: &Path, output_path: &Path) -> Result<bool> {
    match convert_file(input_path, output_path, &ConvertOptions::default()) {
        Ok(_) => {
            log::info!("Conversion complete! Output file: {}", output_path.display());
            Ok(true)
        }
        Err(e @ RemapError::Format { .. }) => {
            log::error!("{e}");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Encodes a binary file as a `.raw` document.
pub fn encode_file(input_path: &Path, output_path: &Path) -> Result<ConversionStats> {
    let data = fs::read(input_path)?;
    let (encoded, stats) = to_printable_ascii(&data);
    validate_printable_ascii(&encoded)?;

    let payload: String = encoded.iter().map(|&b| b as char).collect();
    let file_name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let text = render_document(&payload, &file_name, data.len() as u64);
    write_output(output_path, text.as_bytes())?;

    stats.log_summary();
    Ok(stats)
}
