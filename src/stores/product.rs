//! Defines the product store trait.

use crate::{
    Error,
    models::{DatabaseID, NewProduct, Product},
    pagination::{Page, PageRequest},
};

/// Creates and retrieves the products in the catalogue.
pub trait ProductStore {
    /// Get a product by its ID.
    fn get(&self, product_id: DatabaseID) -> Result<Product, Error>;

    /// Get a page of all products.
    fn get_all(&self, page: PageRequest) -> Result<Page<Product>, Error>;

    /// Get a page of products whose name contains `name_fragment`, ignoring
    /// case.
    fn get_by_name(&self, name_fragment: &str, page: PageRequest) -> Result<Page<Product>, Error>;

    /// Get a page of the products that belong to the category with
    /// `category_id`.
    fn get_by_category(
        &self,
        category_id: DatabaseID,
        page: PageRequest,
    ) -> Result<Page<Product>, Error>;

    /// Whether a product with `product_id` exists in the store.
    fn exists(&self, product_id: DatabaseID) -> Result<bool, Error>;

    /// Create a new product and add it to the store.
    fn create(&self, new_product: NewProduct) -> Result<Product, Error>;

    /// Overwrite the stored product that has `product.id` with `product`.
    fn update(&self, product: &Product) -> Result<Product, Error>;

    /// Remove the product with `product_id` from the store.
    fn delete(&self, product_id: DatabaseID) -> Result<(), Error>;
}
