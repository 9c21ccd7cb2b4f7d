use std::fmt::Display;
use std::path::PathBuf;

use indexmap::IndexMap;

/// Flat POST field mapping in insertion order
pub type PostFields = IndexMap<String, PostValue>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PostValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    /// Sent as a file upload part
    File(PathBuf),
}

impl Display for PostValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<String> for PostValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PostValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<bool> for PostValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for PostValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<PathBuf> for PostValue {
    fn from(value: PathBuf) -> Self {
        Self::File(value)
    }
}
