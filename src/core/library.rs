use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // A business rule refused the request, e.g. outstanding fees or a loan longer
    // than the category allows.
    NotGranted {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn not_granted(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::NotGranted { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => message,
            LibraryError::NotGranted { message, .. } => message,
            LibraryError::Validation { message, .. } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotGranted { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// ItemCategory is the closed set of borrowable kinds; anything the catalogue
// names outside of it becomes Unknown and is never borrowable.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemCategory {
    Book,
    GardeningTool,
    CarpentryTool,
    Unknown,
}

impl From<&str> for ItemCategory {
    fn from(s: &str) -> Self {
        match s {
            "Book" => ItemCategory::Book,
            "Gardening tool" => ItemCategory::GardeningTool,
            "Carpentry tool" => ItemCategory::CarpentryTool,
            _ => ItemCategory::Unknown,
        }
    }
}

impl From<String> for ItemCategory {
    fn from(s: String) -> Self {
        ItemCategory::from(s.as_str())
    }
}

impl Display for ItemCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemCategory::Book => write!(f, "Book"),
            ItemCategory::GardeningTool => write!(f, "Gardening tool"),
            ItemCategory::CarpentryTool => write!(f, "Carpentry tool"),
            ItemCategory::Unknown => write!(f, "Unknown"),
        }
    }
}

// PatronType is the age band a patron falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PatronType {
    Error,
    Minor,
    Adult,
    Elderly,
}

impl Display for PatronType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PatronType::Error => write!(f, "ERROR"),
            PatronType::Minor => write!(f, "Minor"),
            PatronType::Adult => write!(f, "Adult"),
            PatronType::Elderly => write!(f, "Elderly"),
        }
    }
}
