//! Defines the API route handlers and assembles them into the app's router.

mod category;
mod product;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    endpoints,
    state::AppState,
    stores::{CategoryStore, ProductStore},
};

/// Return a router with all the app's routes.
pub fn build_router<C, P>(state: AppState<C, P>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    P: ProductStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::CATEGORIES, get(category::get_categories::<C>))
        .route(endpoints::CATEGORY, post(category::create_category::<C>))
        .route(
            endpoints::CATEGORY_BY_ID,
            get(category::get_category::<C>)
                .put(category::update_category::<C>)
                .delete(category::delete_category::<C>),
        )
        .route(endpoints::PRODUCTS, get(product::get_products::<P, C>))
        .route(endpoints::PRODUCT, post(product::create_product::<P, C>))
        .route(
            endpoints::PRODUCT_BY_ID,
            get(product::get_product::<P, C>)
                .put(product::update_product::<P, C>)
                .delete(product::delete_product::<P, C>),
        )
        .route(
            endpoints::PRODUCT_SEARCH,
            get(product::search_products::<P, C>),
        )
        .with_state(state)
}
