//! Implements a blob store backed by a directory on the local file system.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, storage::BlobStore};

/// Stores blobs as files at `<root>/<collection>/<name>`.
#[derive(Debug, Clone)]
pub struct FileSystemBlobStore {
    root: PathBuf,
}

impl FileSystemBlobStore {
    /// Create a blob store that keeps its files under `root`.
    ///
    /// The directory is created on the first write if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory the blobs are stored in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the path of a blob.
    ///
    /// Only the final component of `name` is used, so a name cannot point
    /// outside of its collection.
    fn blob_path(&self, collection: &str, name: &str) -> Result<PathBuf, Error> {
        let file_name = Path::new(name)
            .file_name()
            .ok_or_else(|| Error::InvalidBlobName(name.to_owned()))?;

        Ok(self.root.join(collection).join(file_name))
    }
}

impl BlobStore for FileSystemBlobStore {
    fn put(&self, collection: &str, name: &str, contents: &[u8]) -> Result<(), Error> {
        let path = self.blob_path(collection, name)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).inspect_err(|error| {
                tracing::error!("could not create directory {}: {error}", parent.display())
            })?;
        }

        fs::write(&path, contents)
            .inspect_err(|error| tracing::error!("could not write {}: {error}", path.display()))?;

        tracing::debug!("Stored {} bytes at {}", contents.len(), path.display());

        Ok(())
    }

    fn delete(&self, collection: &str, name: &str) -> Result<(), Error> {
        let path = self.blob_path(collection, name)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Deleted {}", path.display());
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
