use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemapError {
    #[error("invalid file format: expected at least 3 lines, found {lines}")]
    Format { lines: usize },

    #[error("input is not valid UTF-8 at byte offset {offset}")]
    Decode { offset: usize },

    #[error("code point U+{code_point:04X} at character {offset} does not fit in a byte")]
    CodePointOutOfRange { code_point: u32, offset: usize },

    #[error("non-printable character found at position {offset}: 0x{byte:02X}")]
    NotPrintable { offset: usize, byte: u8 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RemapError>;
