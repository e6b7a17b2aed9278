//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row, functions::FunctionFlags};
use time::OffsetDateTime;

use crate::{
    Error,
    category::{
        Category, CategoryChanges, CategoryId, CategoryName, CategoryQuery, CategoryStore,
        ImageChange, NewCategory,
    },
};

const CATEGORY_COLUMNS: &str = "id, name, slug, image, created_at, updated_at";

/// SQL function that lowercases text using Unicode case rules.
const UNICODE_LOWER: &str = "unicode_lower";

/// Creates, retrieves, updates and deletes categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    ///
    /// The category table must already exist, see [create_category_table].
    ///
    /// # Errors
    /// Returns an error if the search functions cannot be registered on the connection.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Result<Self, Error> {
        let store = Self { connection };

        register_unicode_lower(&*store.connection()?)?;

        Ok(store)
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl CategoryStore for SQLiteCategoryStore {
    fn create(&self, category: NewCategory) -> Result<Option<Category>, Error> {
        let now = OffsetDateTime::now_utc();

        self.connection()?
            .prepare(&format!(
                "INSERT INTO category (name, slug, image, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?4)
                ON CONFLICT(name) DO NOTHING
                RETURNING {CATEGORY_COLUMNS};"
            ))?
            .query_row(
                (category.name.as_ref(), &category.slug, &category.image, now),
                map_row,
            )
            .optional()
            .map_err(Error::from)
    }

    fn get(&self, id: CategoryId) -> Result<Category, Error> {
        self.connection()?
            .prepare(&format!(
                "SELECT {CATEGORY_COLUMNS} FROM category WHERE id = :id;"
            ))?
            .query_row(&[(":id", &id)], map_row)
            .map_err(|error| error.into())
    }

    fn update(&self, id: CategoryId, changes: CategoryChanges) -> Result<Category, Error> {
        let connection = self.connection()?;
        let now = OffsetDateTime::now_utc();

        let result = match &changes.image {
            ImageChange::Keep => connection
                .prepare(&format!(
                    "UPDATE category SET name = ?1, slug = ?2, updated_at = ?3
                    WHERE id = ?4
                    RETURNING {CATEGORY_COLUMNS};"
                ))?
                .query_row((changes.name.as_ref(), &changes.slug, now, id), map_row),
            ImageChange::Replace(image) => connection
                .prepare(&format!(
                    "UPDATE category SET name = ?1, slug = ?2, image = ?3, updated_at = ?4
                    WHERE id = ?5
                    RETURNING {CATEGORY_COLUMNS};"
                ))?
                .query_row(
                    (changes.name.as_ref(), &changes.slug, image, now, id),
                    map_row,
                ),
        };

        result.map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingCategory,
            error => error.into(),
        })
    }

    fn delete(&self, id: CategoryId) -> Result<(), Error> {
        let rows_affected = self
            .connection()?
            .execute("DELETE FROM category WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingCategory);
        }

        Ok(())
    }

    fn list(&self, query: &CategoryQuery) -> Result<(u64, Vec<Category>), Error> {
        let connection = self.connection()?;
        let search = query.search.as_deref();

        let total: i64 = connection
            .prepare(&format!(
                "SELECT COUNT(1) FROM category
                WHERE (?1 IS NULL OR instr({UNICODE_LOWER}(name), {UNICODE_LOWER}(?1)) > 0);"
            ))?
            .query_row((search,), |row| row.get(0))?;

        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(query.offset).unwrap_or(i64::MAX);

        let categories = connection
            .prepare(&format!(
                "SELECT {CATEGORY_COLUMNS} FROM category
                WHERE (?1 IS NULL OR instr({UNICODE_LOWER}(name), {UNICODE_LOWER}(?1)) > 0)
                ORDER BY created_at DESC, id DESC
                LIMIT ?2 OFFSET ?3;"
            ))?
            .query_map((search, limit, offset), map_row)?
            .map(|maybe_category| maybe_category.map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total as u64, categories))
    }

    fn name_exists(
        &self,
        name: &CategoryName,
        except: Option<CategoryId>,
    ) -> Result<bool, Error> {
        self.connection()?
            .prepare(
                "SELECT EXISTS(
                    SELECT 1 FROM category WHERE name = ?1 AND (?2 IS NULL OR id != ?2)
                );",
            )?
            .query_row((name.as_ref(), except), |row| row.get(0))
            .map_err(Error::from)
    }
}

/// Initialize the category table and indexes.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            slug TEXT NOT NULL,
            image TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_category_created_at ON category(created_at);",
    )?;

    Ok(())
}

/// Register [UNICODE_LOWER] so that searches ignore case beyond ASCII.
fn register_unicode_lower(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.create_scalar_function(
        UNICODE_LOWER,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |context| {
            let text: Option<String> = context.get(0)?;

            Ok(text.map(|text| text.to_lowercase()))
        },
    )
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);

    Ok(Category {
        id,
        name,
        slug: row.get(2)?,
        image: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

#[cfg(test)]
pub(crate) fn get_test_store() -> SQLiteCategoryStore {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    create_category_table(&connection).expect("Could not create category table");

    SQLiteCategoryStore::new(Arc::new(Mutex::new(connection)))
        .expect("Could not create category store")
}
