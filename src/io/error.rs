use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("could not resolve {kind} format; pass --from or use a known file extension")]
    UnresolvedFormat { kind: &'static str },

    #[error("unsupported {kind} file extension: {path}")]
    UnsupportedPathExtension { kind: &'static str, path: String },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("csv header '{header}' appears more than once")]
    DuplicateHeader { header: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
