//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryChanges, CategoryId, CategoryName, CategoryQuery, NewCategory},
};

/// Creates, retrieves, updates and deletes categories.
pub trait CategoryStore {
    /// Add a new category to the store.
    ///
    /// Returns `None` if the store did not produce a record, e.g. because
    /// another category took the name after it was validated.
    fn create(&self, category: NewCategory) -> Result<Option<Category>, Error>;

    /// Get a category by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no category with `id`.
    fn get(&self, id: CategoryId) -> Result<Category, Error>;

    /// Apply `changes` to the category with `id` and return the updated category.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingCategory] if there is no category with `id`
    /// and [Error::DuplicateCategoryName] if another category has the new name.
    fn update(&self, id: CategoryId, changes: CategoryChanges) -> Result<Category, Error>;

    /// Delete the category with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingCategory] if there is no category with `id`.
    fn delete(&self, id: CategoryId) -> Result<(), Error>;

    /// Get one page of categories, newest first, and the total number of
    /// categories matching `query`.
    fn list(&self, query: &CategoryQuery) -> Result<(u64, Vec<Category>), Error>;

    /// Whether a category other than `except` already uses `name`.
    fn name_exists(&self, name: &CategoryName, except: Option<CategoryId>)
    -> Result<bool, Error>;
}
