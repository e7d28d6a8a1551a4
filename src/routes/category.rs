//! This file defines the API routes for the category type.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    Error,
    dto::CategoryDto,
    models::DatabaseID,
    pagination::{Page, PageRequest},
    services::CategoryService,
    state::CategoryState,
    stores::CategoryStore,
};

/// The query parameters for the category list route.
///
/// `page` and `size` are mandatory here: a request without them is rejected
/// by the query extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    /// Optional case-insensitive name filter.
    name: Option<String>,
    /// The zero-based page number.
    page: u64,
    /// The number of categories per page.
    size: u64,
}

/// A route handler for listing categories, optionally filtered by name.
///
/// Returns 404 if the requested page has no items.
pub async fn get_categories<C>(
    State(state): State<CategoryState<C>>,
    Query(query): Query<CategoriesQuery>,
) -> Result<Json<Page<CategoryDto>>, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let page = PageRequest::new(query.page, query.size)?;

    CategoryService::new(state.category_store)
        .list(query.name.as_deref(), page)
        .map(Json)
}

/// A route handler for getting a category by its database ID.
pub async fn get_category<C>(
    State(state): State<CategoryState<C>>,
    Path(category_id): Path<DatabaseID>,
) -> Result<Json<CategoryDto>, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    CategoryService::new(state.category_store)
        .get(category_id)
        .map(Json)
}

/// A route handler for creating a new category.
///
/// Responds with 201 and the created category on success.
pub async fn create_category<C>(
    State(state): State<CategoryState<C>>,
    Json(data): Json<CategoryDto>,
) -> Result<(StatusCode, Json<CategoryDto>), Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    CategoryService::new(state.category_store)
        .create(data)
        .map(|category| (StatusCode::CREATED, Json(category)))
}

/// A route handler for updating the category with the given database ID.
pub async fn update_category<C>(
    State(state): State<CategoryState<C>>,
    Path(category_id): Path<DatabaseID>,
    Json(data): Json<CategoryDto>,
) -> Result<Json<CategoryDto>, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    CategoryService::new(state.category_store)
        .update(category_id, data)
        .map(Json)
}

/// A route handler for deleting the category with the given database ID.
///
/// Responds with 204 and an empty body on success.
pub async fn delete_category<C>(
    State(state): State<CategoryState<C>>,
    Path(category_id): Path<DatabaseID>,
) -> Result<StatusCode, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    CategoryService::new(state.category_store).delete(category_id)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod category_route_tests {
    use std::sync::{Arc, Mutex};

    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, build_router,
        db::initialize,
        dto::CategoryDto,
        endpoints,
        stores::sqlite::{SQLiteCategoryStore, SQLiteProductStore},
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");
        let connection = Arc::new(Mutex::new(connection));

        let state = AppState::new(
            SQLiteCategoryStore::new(connection.clone()),
            SQLiteProductStore::new(connection),
        );

        TestServer::new(build_router(state))
    }

    async fn create_category(server: &TestServer, name: &str) -> CategoryDto {
        let response = server
            .post(endpoints::CATEGORY)
            .content_type("application/json")
            .json(&json!({ "name": name }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);

        response.json::<CategoryDto>()
    }

    #[tokio::test]
    async fn create_category_returns_created() {
        let server = get_test_server();

        let category = create_category(&server, "Electronics").await;

        assert!(category.id.unwrap() > 0);
        assert_eq!(category.name.as_deref(), Some("Electronics"));
    }

    #[tokio::test]
    async fn create_category_with_blank_name_returns_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORY)
            .content_type("application/json")
            .json(&json!({ "name": "  " }))
            .await;

        response.assert_status_bad_request();

        let body = response.json::<Value>();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn get_category_round_trips() {
        let server = get_test_server();
        let category = create_category(&server, "Electronics").await;

        let response = server
            .get(&format!("/api/v1/category/{}", category.id.unwrap()))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<CategoryDto>(), category);
    }

    #[tokio::test]
    async fn get_missing_category_returns_not_found() {
        let server = get_test_server();

        let response = server.get("/api/v1/category/999").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn get_category_with_non_positive_id_returns_bad_request() {
        let server = get_test_server();

        server.get("/api/v1/category/0").await.assert_status_bad_request();
        server.get("/api/v1/category/-1").await.assert_status_bad_request();
    }

    #[tokio::test]
    async fn get_category_with_non_numeric_id_returns_bad_request() {
        let server = get_test_server();

        server
            .get("/api/v1/category/abc")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn list_categories_requires_page_and_size() {
        let server = get_test_server();

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn list_categories_returns_page() {
        let server = get_test_server();
        create_category(&server, "Electronics").await;
        create_category(&server, "Groceries").await;

        let response = server
            .get(endpoints::CATEGORIES)
            .add_query_param("page", 0)
            .add_query_param("size", 10)
            .await;

        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["totalItems"], 2);
        assert_eq!(body["totalPages"], 1);
    }

    #[tokio::test]
    async fn list_categories_with_no_matches_returns_not_found() {
        let server = get_test_server();
        create_category(&server, "Electronics").await;

        let response = server
            .get(endpoints::CATEGORIES)
            .add_query_param("name", "zzz-no-match")
            .add_query_param("page", 0)
            .add_query_param("size", 10)
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn list_categories_with_zero_size_returns_bad_request() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CATEGORIES)
            .add_query_param("page", 0)
            .add_query_param("size", 0)
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn update_category_overwrites_name() {
        let server = get_test_server();
        let category = create_category(&server, "Electronics").await;

        let response = server
            .put(&format!("/api/v1/category/{}", category.id.unwrap()))
            .content_type("application/json")
            .json(&json!({ "name": "Gadgets" }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<CategoryDto>().name.as_deref(),
            Some("Gadgets")
        );
    }

    #[tokio::test]
    async fn delete_category_returns_no_content() {
        let server = get_test_server();
        let category = create_category(&server, "Electronics").await;
        let path = format!("/api/v1/category/{}", category.id.unwrap());

        let response = server.delete(&path).await;

        response.assert_status(axum::http::StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());

        server.get(&path).await.assert_status_not_found();
    }
}
