//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryName, DatabaseID},
    pagination::{Page, PageRequest},
    stores::CategoryStore,
};

/// Creates and retrieves product categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Retrieve the category with `category_id` from the database.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if there is no matching
    /// row, or [Error::SqlError] if there is an SQL error.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name FROM category WHERE id = :id")?
            .query_row(named_params! {":id": category_id}, Self::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve a page of the categories in the database, ordered by ID.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self, page: PageRequest) -> Result<Page<Category>, Error> {
        let connection = self.connection.lock().unwrap();

        let total: u64 = connection.query_row("SELECT COUNT(id) FROM category", [], |row| {
            row.get(0)
        })?;

        let categories = connection
            .prepare("SELECT id, name FROM category ORDER BY id LIMIT :limit OFFSET :offset")?
            .query_map(
                named_params! {":limit": page.size(), ":offset": page.offset()},
                Self::map_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(categories, page, total))
    }

    /// Retrieve a page of the categories whose name contains `name_fragment`.
    ///
    /// Matching is case-insensitive (`LIKE` semantics).
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_by_name(&self, name_fragment: &str, page: PageRequest) -> Result<Page<Category>, Error> {
        let connection = self.connection.lock().unwrap();

        let total: u64 = connection.query_row(
            "SELECT COUNT(id) FROM category WHERE name LIKE '%' || :fragment || '%'",
            named_params! {":fragment": name_fragment},
            |row| row.get(0),
        )?;

        let categories = connection
            .prepare(
                "SELECT id, name FROM category WHERE name LIKE '%' || :fragment || '%'
                 ORDER BY id LIMIT :limit OFFSET :offset",
            )?
            .query_map(
                named_params! {
                    ":fragment": name_fragment,
                    ":limit": page.size(),
                    ":offset": page.offset(),
                },
                Self::map_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(categories, page, total))
    }

    /// Check whether the category with `category_id` exists in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn exists(&self, category_id: DatabaseID) -> Result<bool, Error> {
        self.connection
            .lock()
            .unwrap()
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM category WHERE id = :id)",
                named_params! {":id": category_id},
                |row| row.get(0),
            )
            .map_err(|error| error.into())
    }

    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, name: CategoryName) -> Result<Category, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute("INSERT INTO category (name) VALUES (?1)", (name.as_ref(),))?;

        let id = connection.last_insert_rowid();

        Ok(Category { id, name })
    }

    /// Overwrite the name of the stored category with `category.id`.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if no row was updated, or
    /// [Error::SqlError] if there is an SQL error.
    fn update(&self, category: &Category) -> Result<Category, Error> {
        let rows_updated = self.connection.lock().unwrap().execute(
            "UPDATE category SET name = :name WHERE id = :id",
            named_params! {":name": category.name.as_ref(), ":id": category.id},
        )?;

        if rows_updated == 0 {
            return Err(Error::NotFound);
        }

        Ok(category.clone())
    }

    /// Remove the category with `category_id` from the database.
    ///
    /// Products referencing the category are detached, not deleted: the
    /// schema's foreign key sets their `category_id` to NULL.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if no row was deleted, or
    /// [Error::SqlError] if there is an SQL error.
    fn delete(&self, category_id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self.connection.lock().unwrap().execute(
            "DELETE FROM category WHERE id = :id",
            named_params! {":id": category_id},
        )?;

        if rows_deleted == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(0)?;

        let raw_name: String = row.get(1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        Ok(Self::ReturnType { id, name })
    }
}
