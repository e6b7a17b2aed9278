//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    category::{CategoryService, CategoryStore, SQLiteCategoryStore},
    db::initialize,
    pagination::PaginationConfig,
    storage::{BlobStore, FileSystemBlobStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<C, B>
where
    C: CategoryStore + Clone + Send + Sync,
    B: BlobStore + Clone + Send + Sync,
{
    /// The store for category records.
    pub category_store: C,
    /// The store for category images.
    pub blob_store: B,
    /// The config that controls how to split lists into pages.
    pub pagination_config: PaginationConfig,
}

impl<C, B> AppState<C, B>
where
    C: CategoryStore + Clone + Send + Sync,
    B: BlobStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(category_store: C, blob_store: B, pagination_config: PaginationConfig) -> Self {
        Self {
            category_store,
            blob_store,
            pagination_config,
        }
    }
}

impl AppState<SQLiteCategoryStore, FileSystemBlobStore> {
    /// Create a new [AppState] with a SQLite database and images stored under `storage_root`.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn with_sqlite(
        db_connection: Connection,
        storage_root: impl Into<std::path::PathBuf>,
        pagination_config: PaginationConfig,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::new(
            SQLiteCategoryStore::new(connection)?,
            FileSystemBlobStore::new(storage_root),
            pagination_config,
        ))
    }
}

impl<C, B> FromRef<AppState<C, B>> for CategoryService<C, B>
where
    C: CategoryStore + Clone + Send + Sync,
    B: BlobStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C, B>) -> Self {
        CategoryService::new(
            state.category_store.clone(),
            state.blob_store.clone(),
            state.pagination_config.clone(),
        )
    }
}
