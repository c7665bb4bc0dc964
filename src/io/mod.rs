pub mod error;
pub mod reader;

use std::fmt;
use std::path::Path;

pub use error::IoError;

/// Input formats understood by the record reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Csv,
    Jsonl,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Jsonl => "jsonl",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            "jsonl" | "ndjson" => Some(Self::Jsonl),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the explicit format, else the one implied by the path extension.
pub fn resolve_input_format(
    explicit: Option<Format>,
    input: Option<&Path>,
) -> Result<Format, IoError> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    let Some(path) = input else {
        return Err(IoError::UnresolvedFormat { kind: "input" });
    };
    format_from_path(path).ok_or_else(|| IoError::UnsupportedPathExtension {
        kind: "input",
        path: path.to_string_lossy().into_owned(),
    })
}

pub fn format_from_path(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_string_lossy();
    Format::from_extension(&ext)
}
