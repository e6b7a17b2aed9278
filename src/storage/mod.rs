//! Contains the blob store trait and its implementations.

mod filesystem;

pub use filesystem::FileSystemBlobStore;

use crate::Error;

/// Stores and removes binary files, such as uploaded images, by name.
///
/// Blobs are grouped into collections (e.g. `"categories"`), which a store
/// may map to directories, key prefixes or buckets.
pub trait BlobStore {
    /// Store `contents` as `name` in `collection`, replacing any blob with the same name.
    fn put(&self, collection: &str, name: &str, contents: &[u8]) -> Result<(), Error>;

    /// Remove the blob `name` from `collection`.
    ///
    /// Removing a blob that does not exist is not an error.
    fn delete(&self, collection: &str, name: &str) -> Result<(), Error>;
}
