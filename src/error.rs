use std::fmt::{Display, Formatter};

use config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is not present in the store. Carries the raw key.
    InvalidKey(Vec<u8>),
    /// The outer text is not a well-formed object of strings.
    Decode(String),
    /// A key or value string is not valid hexadecimal.
    HexDecode(String),
    Internal(String),
}

impl Error {
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::InvalidKey(_))
    }

    /// Returns the offending key of an `InvalidKey` error.
    pub fn key(&self) -> Option<&[u8]> {
        match self {
            Error::InvalidKey(key) => Some(key),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidKey(key) => write!(f, "invalid key: {}", hex::encode(key)),
            Error::Decode(s) => write!(f, "decode error: {}", s),
            Error::HexDecode(s) => write!(f, "hex decode error: {}", s),
            Error::Internal(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl serde::de::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Decode(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Internal(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::HexDecode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Internal(err.to_string())
    }
}

impl From<log::ParseLevelError> for Error {
    fn from(err: log::ParseLevelError) -> Self {
        Error::Internal(err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Internal(err.to_string())
    }
}
