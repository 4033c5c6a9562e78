use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrimeError>;

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("functions parameter cannot be empty")]
    EmptyInput,

    #[error("Malformed descriptor at index {index}: missing or invalid `{field}`")]
    MalformedDescriptor { index: usize, field: String },

    #[error("Input is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Path is outside repository bounds: {path}")]
    PathOutsideRoot { path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PrimeError {
    pub fn malformed(index: usize, field: &str) -> Self {
        Self::MalformedDescriptor {
            index,
            field: field.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        2
    }
}
