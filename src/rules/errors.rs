use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("[{entry}] unknown directive '{key}'")]
    UnknownDirective { entry: String, key: String },

    #[error("[{entry}] invalid regex in '{key}': {message}")]
    InvalidRegex { entry: String, key: String, message: String },

    #[error("[{entry}] invalid value for '{key}': {message}")]
    InvalidValue { entry: String, key: String, message: String },

    #[error("group '{group}' inherits from itself through its type chain")]
    CyclicType { group: String },
}
