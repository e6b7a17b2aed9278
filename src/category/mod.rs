//! Category management: the records, their images and the admin API endpoints.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod form;
mod list;
mod path;
mod service;
mod show;
mod slug;
mod store;

pub use create::create_category_endpoint;
pub use db::{SQLiteCategoryStore, create_category_table};
pub use delete::delete_category_endpoint;
pub use domain::{
    Category, CategoryChanges, CategoryId, CategoryName, CategoryQuery, ImageChange, NewCategory,
};
pub use edit::update_category_endpoint;
pub use form::{CategoryForm, CategoryFormData};
pub use list::{ListParams, list_categories_endpoint};
pub use path::CategoryPath;
pub use service::{CATEGORY_IMAGE_COLLECTION, CategoryService, ListCategories, MAX_IMAGE_BYTES};
pub use show::get_category_endpoint;
pub use slug::slugify;
pub use store::CategoryStore;

#[cfg(test)]
pub(crate) use test_service::get_test_service;
