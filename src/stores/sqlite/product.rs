//! Implements a SQLite backed product store.
//!
//! Note that because a product references a [Category](crate::models::Category),
//! the category table must be set up in the database before products can be
//! created.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, NewProduct, Product},
    pagination::{Page, PageRequest},
    stores::ProductStore,
};

/// Creates and retrieves products to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteProductStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteProductStore {
    /// Create a new product store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

const PRODUCT_COLUMNS: &str = "id, name, price, stock, category_id";

impl ProductStore for SQLiteProductStore {
    /// Retrieve the product with `product_id` from the database.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if there is no matching
    /// row, or [Error::SqlError] if there is an SQL error.
    fn get(&self, product_id: DatabaseID) -> Result<Product, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM product WHERE id = :id"
            ))?
            .query_row(named_params! {":id": product_id}, Self::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve a page of the products in the database, ordered by ID.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self, page: PageRequest) -> Result<Page<Product>, Error> {
        let connection = self.connection.lock().unwrap();

        let total: u64 =
            connection.query_row("SELECT COUNT(id) FROM product", [], |row| row.get(0))?;

        let products = connection
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM product ORDER BY id LIMIT :limit OFFSET :offset"
            ))?
            .query_map(
                named_params! {":limit": page.size(), ":offset": page.offset()},
                Self::map_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(products, page, total))
    }

    /// Retrieve a page of the products whose name contains `name_fragment`.
    ///
    /// Matching is case-insensitive (`LIKE` semantics).
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_by_name(&self, name_fragment: &str, page: PageRequest) -> Result<Page<Product>, Error> {
        let connection = self.connection.lock().unwrap();

        let total: u64 = connection.query_row(
            "SELECT COUNT(id) FROM product WHERE name LIKE '%' || :fragment || '%'",
            named_params! {":fragment": name_fragment},
            |row| row.get(0),
        )?;

        let products = connection
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM product WHERE name LIKE '%' || :fragment || '%'
                 ORDER BY id LIMIT :limit OFFSET :offset"
            ))?
            .query_map(
                named_params! {
                    ":fragment": name_fragment,
                    ":limit": page.size(),
                    ":offset": page.offset(),
                },
                Self::map_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(products, page, total))
    }

    /// Retrieve a page of the products that belong to the category with
    /// `category_id`.
    ///
    /// An unknown `category_id` yields an empty page, the same as a category
    /// with no products.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_by_category(
        &self,
        category_id: DatabaseID,
        page: PageRequest,
    ) -> Result<Page<Product>, Error> {
        let connection = self.connection.lock().unwrap();

        let total: u64 = connection.query_row(
            "SELECT COUNT(id) FROM product WHERE category_id = :category_id",
            named_params! {":category_id": category_id},
            |row| row.get(0),
        )?;

        let products = connection
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM product WHERE category_id = :category_id
                 ORDER BY id LIMIT :limit OFFSET :offset"
            ))?
            .query_map(
                named_params! {
                    ":category_id": category_id,
                    ":limit": page.size(),
                    ":offset": page.offset(),
                },
                Self::map_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(products, page, total))
    }

    /// Check whether the product with `product_id` exists in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn exists(&self, product_id: DatabaseID) -> Result<bool, Error> {
        self.connection
            .lock()
            .unwrap()
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM product WHERE id = :id)",
                named_params! {":id": product_id},
                |row| row.get(0),
            )
            .map_err(|error| error.into())
    }

    /// Create a product in the database.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if `new_product.category_id`
    /// no longer refers to a category, or [Error::SqlError] if there is some
    /// other SQL error.
    fn create(&self, new_product: NewProduct) -> Result<Product, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "INSERT INTO product (name, price, stock, category_id)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING {PRODUCT_COLUMNS}"
            ))?
            .query_row(
                (
                    &new_product.name,
                    new_product.price,
                    new_product.stock,
                    new_product.category_id,
                ),
                Self::map_row,
            )
            .map_err(|error| match error {
                // Code 787 occurs when a FOREIGN KEY constraint failed: the
                // category was removed between the service's existence check
                // and this insert.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                    Error::NotFound
                }
                error => error.into(),
            })
    }

    /// Overwrite the stored product that has `product.id` with `product`.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if no row was updated or
    /// if `product.category_id` no longer refers to a category, or
    /// [Error::SqlError] if there is some other SQL error.
    fn update(&self, product: &Product) -> Result<Product, Error> {
        let rows_updated = self
            .connection
            .lock()
            .unwrap()
            .execute(
                "UPDATE product
                 SET name = :name, price = :price, stock = :stock, category_id = :category_id
                 WHERE id = :id",
                named_params! {
                    ":name": product.name,
                    ":price": product.price,
                    ":stock": product.stock,
                    ":category_id": product.category_id,
                    ":id": product.id,
                },
            )
            .map_err(|error| match error {
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                    Error::NotFound
                }
                error => error.into(),
            })?;

        if rows_updated == 0 {
            return Err(Error::NotFound);
        }

        Ok(product.clone())
    }

    /// Remove the product with `product_id` from the database.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if no row was deleted, or
    /// [Error::SqlError] if there is an SQL error.
    fn delete(&self, product_id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self.connection.lock().unwrap().execute(
            "DELETE FROM product WHERE id = :id",
            named_params! {":id": product_id},
        )?;

        if rows_deleted == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl CreateTable for SQLiteProductStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS product (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                stock INTEGER NOT NULL,
                category_id INTEGER,
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE SET NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteProductStore {
    type ReturnType = Product;

    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Self::ReturnType {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            stock: row.get(3)?,
            category_id: row.get(4)?,
        })
    }
}
