//! The application service for managing products.

use crate::{
    Error,
    dto::ProductDto,
    models::{DatabaseID, NewProduct},
    pagination::{Page, PageRequest},
    services::validate_id,
    stores::{CategoryStore, ProductStore},
};

/// Orchestrates validation, lookups, and DTO conversion for products.
///
/// Product operations that bind a product to a category resolve the category
/// through the category store first, so a product created or updated through
/// this service always references a category that existed at the time of the
/// write.
#[derive(Debug, Clone)]
pub struct ProductService<P, C>
where
    P: ProductStore,
    C: CategoryStore,
{
    products: P,
    categories: C,
}

impl<P, C> ProductService<P, C>
where
    P: ProductStore,
    C: CategoryStore,
{
    /// Create a new product service backed by the given stores.
    pub fn new(products: P, categories: C) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Get a page of products.
    ///
    /// If `name_filter` is present and non-blank the results are restricted
    /// to products whose name contains it, ignoring case.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if the resulting page has
    /// no items.
    pub fn list(
        &self,
        name_filter: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<ProductDto>, Error> {
        let products = match name_filter {
            Some(fragment) if !fragment.trim().is_empty() => {
                self.products.get_by_name(fragment, page)?
            }
            _ => self.products.get_all(page)?,
        };

        if products.is_empty() {
            return Err(Error::NotFound);
        }

        Ok(products.map(ProductDto::from))
    }

    /// Get a page of the products in the category with `category_id`.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if the page has no items.
    /// A category that does not exist and a category with no products are
    /// indistinguishable here: both produce an empty page.
    pub fn list_by_category(
        &self,
        category_id: DatabaseID,
        page: PageRequest,
    ) -> Result<Page<ProductDto>, Error> {
        let products = self.products.get_by_category(category_id, page)?;

        if products.is_empty() {
            return Err(Error::NotFound);
        }

        Ok(products.map(ProductDto::from))
    }

    /// Get the product with `product_id`.
    ///
    /// # Errors
    /// This function will return [Error::InvalidId] if `product_id` is not
    /// positive, or [Error::NotFound] if no product matches.
    pub fn get(&self, product_id: DatabaseID) -> Result<ProductDto, Error> {
        validate_id(product_id)?;

        self.products.get(product_id).map(ProductDto::from)
    }

    /// Create a new product from `data`, bound to the category named by
    /// `data.category_id`.
    ///
    /// A client-supplied product ID is ignored. Missing name, price, or
    /// stock fields are written as their defaults; updates and creates are
    /// full overwrites, never merges.
    ///
    /// # Errors
    /// This function will return [Error::InvalidCategoryId] if
    /// `data.category_id` is missing or not positive, or [Error::NotFound]
    /// if the referenced category does not exist. Nothing is written in
    /// either case.
    pub fn create(&self, data: ProductDto) -> Result<ProductDto, Error> {
        let category = self.categories.get(validate_category_id(data.category_id)?)?;

        self.products
            .create(NewProduct {
                name: data.name.unwrap_or_default(),
                price: data.price.unwrap_or_default(),
                stock: data.stock.unwrap_or_default(),
                category_id: category.id,
            })
            .map(ProductDto::from)
    }

    /// Overwrite the product with `product_id` using `data`.
    ///
    /// The category reference is re-resolved from `data.category_id`, and
    /// name, price, stock, and category are all replaced.
    ///
    /// # Errors
    /// This function will return [Error::InvalidId] if `product_id` is not
    /// positive, [Error::NotFound] if the product or the referenced category
    /// does not exist, or [Error::InvalidCategoryId] if `data.category_id`
    /// is missing or not positive.
    pub fn update(&self, product_id: DatabaseID, data: ProductDto) -> Result<ProductDto, Error> {
        validate_id(product_id)?;

        let mut product = self.products.get(product_id)?;
        let category = self.categories.get(validate_category_id(data.category_id)?)?;

        product.name = data.name.unwrap_or_default();
        product.price = data.price.unwrap_or_default();
        product.stock = data.stock.unwrap_or_default();
        product.category_id = Some(category.id);

        self.products.update(&product).map(ProductDto::from)
    }

    /// Delete the product with `product_id`.
    ///
    /// # Errors
    /// This function will return [Error::InvalidId] if `product_id` is not
    /// positive, or [Error::NotFound] if no product matches.
    pub fn delete(&self, product_id: DatabaseID) -> Result<(), Error> {
        validate_id(product_id)?;

        if !self.products.exists(product_id)? {
            return Err(Error::NotFound);
        }

        self.products.delete(product_id)
    }

    /// Get a page of the products whose name contains `name`.
    ///
    /// Unlike [ProductService::list], the search term is mandatory.
    ///
    /// # Errors
    /// This function will return [Error::EmptySearchTerm] if `name` is
    /// blank, or [Error::NotFound] if the resulting page has no items.
    pub fn search(&self, name: &str, page: PageRequest) -> Result<Page<ProductDto>, Error> {
        if name.trim().is_empty() {
            return Err(Error::EmptySearchTerm);
        }

        let products = self.products.get_by_name(name, page)?;

        if products.is_empty() {
            return Err(Error::NotFound);
        }

        Ok(products.map(ProductDto::from))
    }
}

fn validate_category_id(category_id: Option<DatabaseID>) -> Result<DatabaseID, Error> {
    match category_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidCategoryId),
    }
}
