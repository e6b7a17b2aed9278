//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, category::slugify};

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from `name` with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is empty or
    /// only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    /// The URL slug for this name.
    pub fn slug(&self) -> String {
        slugify(&self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A category, e.g. 'Announcements', optionally illustrated by an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name, unique among categories.
    pub name: CategoryName,
    /// Always the slug of `name`.
    pub slug: String,
    /// The file name of the image in the blob store.
    pub image: Option<String>,
    /// When the category was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the category was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The data needed to insert a category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: String,
    pub image: Option<String>,
}

impl NewCategory {
    /// A new category called `name` with the slug derived from it.
    pub fn new(name: CategoryName, image: Option<String>) -> Self {
        Self {
            slug: name.slug(),
            name,
            image,
        }
    }
}

/// What to do with the image of a category during an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageChange {
    /// Leave the image as it is.
    Keep,
    /// Point the category at a newly stored image.
    Replace(String),
}

/// The fields written by an update.
///
/// `name` and `slug` are always written together so the slug cannot drift
/// from the name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct CategoryChanges {
    pub name: CategoryName,
    pub slug: String,
    pub image: ImageChange,
}

impl CategoryChanges {
    /// Rename a category to `name`, deriving the slug.
    pub fn new(name: CategoryName, image: ImageChange) -> Self {
        Self {
            slug: name.slug(),
            name,
            image,
        }
    }
}

/// Filtering and paging options for listing categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    /// Only include categories whose name contains this text, ignoring case.
    pub search: Option<String>,
    /// The maximum number of categories to return.
    pub limit: u64,
    /// The number of categories to skip, newest first.
    pub offset: u64,
}
