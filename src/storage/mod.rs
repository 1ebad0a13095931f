mod error;
mod file;
mod in_memory;
mod storage;

// Persistence seam for the cart document
pub use storage::CartStorage;

// Errors
pub use error::StorageError;

// Backends
pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
