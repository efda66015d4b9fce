//! Storage module for uploaded files
//!
//! `UploadStore` persists uploaded content either to an S3-compatible object
//! store or to a local directory tree behind one interface, returning a
//! stable reference usable later for retrieval.

mod object_store;
mod upload_store;

pub use object_store::{ObjectStore, S3ObjectStore};
pub use upload_store::{StorageOutcome, StoredUpload, UploadStore};
