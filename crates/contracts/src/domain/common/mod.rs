//! Common types and traits for all records

pub mod record;
pub mod store;
pub mod validation;

// Re-exports
pub use record::Record;
pub use store::{InMemoryStore, RecordStore, StoreError};
pub use validation::{SubmitGuard, ValidationError, ValidationErrors};
