//! Implements the structs that hold the state of the REST server.

use axum::extract::FromRef;

use crate::stores::{CategoryStore, ProductStore};

/// The state of the REST server.
///
/// The state is just the two store handles: the services are stateless and
/// are constructed per request from clones of these.
#[derive(Debug, Clone)]
pub struct AppState<C, P>
where
    C: CategoryStore + Clone + Send + Sync,
    P: ProductStore + Clone + Send + Sync,
{
    /// The store for managing [categories](crate::models::Category).
    pub category_store: C,
    /// The store for managing [products](crate::models::Product).
    pub product_store: P,
}

impl<C, P> AppState<C, P>
where
    C: CategoryStore + Clone + Send + Sync,
    P: ProductStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(category_store: C, product_store: P) -> Self {
        Self {
            category_store,
            product_store,
        }
    }
}

/// The state needed by the category route handlers.
#[derive(Debug, Clone)]
pub struct CategoryState<C>
where
    C: CategoryStore + Clone + Send + Sync,
{
    /// The store for managing [categories](crate::models::Category).
    pub category_store: C,
}

impl<C, P> FromRef<AppState<C, P>> for CategoryState<C>
where
    C: CategoryStore + Clone + Send + Sync,
    P: ProductStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C, P>) -> Self {
        Self {
            category_store: state.category_store.clone(),
        }
    }
}

/// The state needed by the product route handlers.
///
/// Product handlers also need the category store because creating or
/// updating a product resolves its category reference.
#[derive(Debug, Clone)]
pub struct ProductState<P, C>
where
    P: ProductStore + Clone + Send + Sync,
    C: CategoryStore + Clone + Send + Sync,
{
    /// The store for managing [products](crate::models::Product).
    pub product_store: P,
    /// The store for managing [categories](crate::models::Category).
    pub category_store: C,
}

impl<C, P> FromRef<AppState<C, P>> for ProductState<P, C>
where
    C: CategoryStore + Clone + Send + Sync,
    P: ProductStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C, P>) -> Self {
        Self {
            product_store: state.product_store.clone(),
            category_store: state.category_store.clone(),
        }
    }
}
