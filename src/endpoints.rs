//! The API endpoint URIs.

/// The route for listing categories with an optional name filter.
pub const CATEGORIES: &str = "/api/v1/categories";
/// The route for creating a category.
pub const CATEGORY: &str = "/api/v1/category";
/// The route for getting, updating, or deleting a single category.
pub const CATEGORY_BY_ID: &str = "/api/v1/category/{id}";
/// The route for listing products with an optional name filter.
pub const PRODUCTS: &str = "/api/v1/products";
/// The route for creating a product.
pub const PRODUCT: &str = "/api/v1/product";
/// The route for getting, updating, or deleting a single product.
pub const PRODUCT_BY_ID: &str = "/api/v1/product/{id}";
/// The route for searching products by name.
pub const PRODUCT_SEARCH: &str = "/api/v1/products/search";
