use super::error::StorageError;

/// Where the serialized cart document lives between sessions.
///
/// The store treats the document as an opaque string; backends only
/// move it in and out of wherever they keep it.
pub trait CartStorage: Send + Sync {
    /// Returns the stored document, or `None` when nothing has been
    /// written yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the stored document.
    fn write(&self, document: &str) -> Result<(), StorageError>;
}
