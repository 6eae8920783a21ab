pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid selection JSON: {message}")]
    InvalidSelectionJson { message: String },

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Palette color {position} is blank")]
    BlankColor { position: usize },

    #[error("Unknown {kind}: {value}")]
    UnknownToken { kind: &'static str, value: String },

    #[error("Invalid config value for `{key}`: {message}")]
    InvalidConfig { key: String, message: String },
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownToken {
            kind,
            value: value.to_string(),
        }
    }
}
