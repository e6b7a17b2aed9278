//! Database schema setup.

use rusqlite::Connection;

use crate::{Error, category::create_category_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// Safe to call on an existing database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    create_category_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
