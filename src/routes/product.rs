//! This file defines the API routes for the product type.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    Error,
    dto::ProductDto,
    models::DatabaseID,
    pagination::{Page, PageRequest},
    services::ProductService,
    state::ProductState,
    stores::{CategoryStore, ProductStore},
};

fn default_page_size() -> u64 {
    10
}

/// The query parameters for the product list route.
///
/// Unlike the category list route, `page` and `size` fall back to defaults
/// when not supplied.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Optional case-insensitive name filter.
    name: Option<String>,
    /// The zero-based page number.
    #[serde(default)]
    page: u64,
    /// The number of products per page.
    #[serde(default = "default_page_size")]
    size: u64,
}

/// The query parameters for the product search route.
///
/// The search term is mandatory: a request without `name` is rejected by the
/// query extractor, and a blank `name` is rejected by the service.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// The name fragment to search for.
    name: String,
    /// The zero-based page number.
    #[serde(default)]
    page: u64,
    /// The number of products per page.
    #[serde(default = "default_page_size")]
    size: u64,
}

/// A route handler for listing products, optionally filtered by name.
///
/// Returns 404 if the requested page has no items.
pub async fn get_products<P, C>(
    State(state): State<ProductState<P, C>>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<Page<ProductDto>>, Error>
where
    P: ProductStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let page = PageRequest::new(query.page, query.size)?;

    ProductService::new(state.product_store, state.category_store)
        .list(query.name.as_deref(), page)
        .map(Json)
}

/// A route handler for getting a product by its database ID.
pub async fn get_product<P, C>(
    State(state): State<ProductState<P, C>>,
    Path(product_id): Path<DatabaseID>,
) -> Result<Json<ProductDto>, Error>
where
    P: ProductStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    ProductService::new(state.product_store, state.category_store)
        .get(product_id)
        .map(Json)
}

/// A route handler for creating a new product.
///
/// The product is bound to the category named by the request's `categoryId`,
/// which must refer to an existing category.
///
/// Responds with 201 and the created product on success.
pub async fn create_product<P, C>(
    State(state): State<ProductState<P, C>>,
    Json(data): Json<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), Error>
where
    P: ProductStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    ProductService::new(state.product_store, state.category_store)
        .create(data)
        .map(|product| (StatusCode::CREATED, Json(product)))
}

/// A route handler for updating the product with the given database ID.
///
/// All mutable fields are overwritten with the request's values.
pub async fn update_product<P, C>(
    State(state): State<ProductState<P, C>>,
    Path(product_id): Path<DatabaseID>,
    Json(data): Json<ProductDto>,
) -> Result<Json<ProductDto>, Error>
where
    P: ProductStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    ProductService::new(state.product_store, state.category_store)
        .update(product_id, data)
        .map(Json)
}

/// A route handler for deleting the product with the given database ID.
///
/// Responds with 204 and an empty body on success.
pub async fn delete_product<P, C>(
    State(state): State<ProductState<P, C>>,
    Path(product_id): Path<DatabaseID>,
) -> Result<StatusCode, Error>
where
    P: ProductStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    ProductService::new(state.product_store, state.category_store).delete(product_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// A route handler for searching products by a mandatory name fragment.
pub async fn search_products<P, C>(
    State(state): State<ProductState<P, C>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Page<ProductDto>>, Error>
where
    P: ProductStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let page = PageRequest::new(query.page, query.size)?;

    ProductService::new(state.product_store, state.category_store)
        .search(&query.name, page)
        .map(Json)
}
