use std::fmt;
use std::io;

#[derive(Debug)]
pub enum StorageError {
    LockPoisoned(&'static str),
    Io(io::Error),
    Codec(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Io(err) => write!(f, "storage io error: {}", err),
            StorageError::Codec(err) => write!(f, "cart document could not be encoded: {}", err),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::LockPoisoned(_) => None,
            StorageError::Io(err) => Some(err),
            StorageError::Codec(err) => Some(err),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Codec(err)
    }
}
