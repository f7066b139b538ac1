use core::{
    error::Error,
    fmt,
    fmt::{Display, Formatter},
};
use std::io;

/// A configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// An invalid concurrency.
    InvalidConcurrency(usize),
    /// An I/O error while reading configuration.
    Io(io::Error),
    /// A regular expression error.
    Regex(regex::Error),
    /// A TOML deserialization error.
    TomlDeserialize(::toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConcurrency(concurrency) => {
                write!(formatter, "invalid concurrency: {concurrency}")
            }
            Self::Io(error) => {
                write!(formatter, "{error}")
            }
            Self::Regex(error) => {
                write!(formatter, "{error}")
            }
            Self::TomlDeserialize(error) => {
                write!(formatter, "{error}")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<regex::Error> for ConfigError {
    fn from(error: regex::Error) -> Self {
        Self::Regex(error)
    }
}

impl From<::toml::de::Error> for ConfigError {
    fn from(error: ::toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}
