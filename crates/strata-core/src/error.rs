use thiserror::Error;

/// Unified error type for the Strata workspace.
#[derive(Error, Debug)]
pub enum StrataError {
    // ── Store errors ───────────────────────────────────────────
    #[error("unknown parameter \"{name}\" in section \"{section}\"")]
    UnknownParameter { section: String, name: String },

    #[error("unknown section \"{0}\"")]
    UnknownSection(String),

    #[error("leave_subsection called with no matching enter_subsection")]
    UnbalancedSection,

    #[error("parameter \"{name}\": cannot parse {value:?}: {reason}")]
    ParameterParse {
        name: String,
        value: String,
        reason: String,
    },

    // ── Input / format errors ──────────────────────────────────
    #[error("input format error: {0}")]
    Format(String),

    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StrataError>;
