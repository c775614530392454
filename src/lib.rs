pub mod convert;
pub mod document;
pub mod error;
pub mod logger;
pub mod png;
pub mod printable;
pub mod remap;

pub use convert::{ConvertOptions, ConvertReport, convert, convert_file, encode_file};
pub use document::DecodePolicy;
pub use error::RemapError;
pub use png::{HeaderCheck, PNG_SIGNATURE};
pub use remap::RemapTable;
