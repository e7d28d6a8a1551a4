//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, CategoryName, DatabaseID},
    pagination::{Page, PageRequest},
};

/// Creates and retrieves product categories.
pub trait CategoryStore {
    /// Get a category by its ID.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error>;

    /// Get a page of all categories.
    fn get_all(&self, page: PageRequest) -> Result<Page<Category>, Error>;

    /// Get a page of categories whose name contains `name_fragment`,
    /// ignoring case.
    fn get_by_name(&self, name_fragment: &str, page: PageRequest) -> Result<Page<Category>, Error>;

    /// Whether a category with `category_id` exists in the store.
    fn exists(&self, category_id: DatabaseID) -> Result<bool, Error>;

    /// Create a new category and add it to the store.
    fn create(&self, name: CategoryName) -> Result<Category, Error>;

    /// Overwrite the stored category that has `category.id` with `category`.
    fn update(&self, category: &Category) -> Result<Category, Error>;

    /// Remove the category with `category_id` from the store.
    fn delete(&self, category_id: DatabaseID) -> Result<(), Error>;
}
