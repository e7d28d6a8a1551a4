//! The application service for managing categories.

use crate::{
    Error,
    dto::CategoryDto,
    models::{CategoryName, DatabaseID},
    pagination::{Page, PageRequest},
    services::validate_id,
    stores::CategoryStore,
};

/// Orchestrates validation, lookups, and DTO conversion for categories.
///
/// The service is stateless: it only wraps a store handle and can be
/// constructed per request.
#[derive(Debug, Clone)]
pub struct CategoryService<C: CategoryStore> {
    store: C,
}

impl<C: CategoryStore> CategoryService<C> {
    /// Create a new category service backed by `store`.
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// Get a page of categories.
    ///
    /// If `name_filter` is present and non-blank the results are restricted
    /// to categories whose name contains it, ignoring case.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if the resulting page has
    /// no items, which includes both zero total matches and an out-of-range
    /// page.
    pub fn list(
        &self,
        name_filter: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<CategoryDto>, Error> {
        let categories = match name_filter {
            Some(fragment) if !fragment.trim().is_empty() => {
                self.store.get_by_name(fragment, page)?
            }
            _ => self.store.get_all(page)?,
        };

        if categories.is_empty() {
            return Err(Error::NotFound);
        }

        Ok(categories.map(CategoryDto::from))
    }

    /// Get the category with `category_id`.
    ///
    /// # Errors
    /// This function will return [Error::InvalidId] if `category_id` is not
    /// positive, or [Error::NotFound] if no category matches.
    pub fn get(&self, category_id: DatabaseID) -> Result<CategoryDto, Error> {
        validate_id(category_id)?;

        self.store.get(category_id).map(CategoryDto::from)
    }

    /// Create a new category from `data`.
    ///
    /// A client-supplied ID is ignored; the store assigns one.
    ///
    /// # Errors
    /// This function will return [Error::EmptyCategoryName] if the name is
    /// missing or blank.
    pub fn create(&self, data: CategoryDto) -> Result<CategoryDto, Error> {
        let name = CategoryName::new(data.name.as_deref().unwrap_or_default())?;

        self.store.create(name).map(CategoryDto::from)
    }

    /// Overwrite the name of the category with `category_id`.
    ///
    /// # Errors
    /// This function will return [Error::InvalidId] if `category_id` is not
    /// positive, [Error::NotFound] if no category matches, or
    /// [Error::EmptyCategoryName] if the new name is missing or blank.
    pub fn update(&self, category_id: DatabaseID, data: CategoryDto) -> Result<CategoryDto, Error> {
        validate_id(category_id)?;

        let mut category = self.store.get(category_id)?;
        category.name = CategoryName::new(data.name.as_deref().unwrap_or_default())?;

        self.store.update(&category).map(CategoryDto::from)
    }

    /// Delete the category with `category_id`.
    ///
    /// The deletion is unconditional: a category that still has products is
    /// removed and its products are detached by the store.
    ///
    /// # Errors
    /// This function will return [Error::InvalidId] if `category_id` is not
    /// positive, or [Error::NotFound] if no category matches.
    pub fn delete(&self, category_id: DatabaseID) -> Result<(), Error> {
        validate_id(category_id)?;

        if !self.store.exists(category_id)? {
            return Err(Error::NotFound);
        }

        self.store.delete(category_id)
    }
}

#[cfg(test)]
mod category_service_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        dto::CategoryDto,
        db::initialize,
        pagination::PageRequest,
        stores::sqlite::SQLiteCategoryStore,
    };

    use super::CategoryService;

    fn get_test_service() -> CategoryService<SQLiteCategoryStore> {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        CategoryService::new(SQLiteCategoryStore::new(Arc::new(Mutex::new(connection))))
    }

    fn named(name: &str) -> CategoryDto {
        CategoryDto {
            id: None,
            name: Some(name.to_string()),
        }
    }

    fn page_request(page: u64, size: u64) -> PageRequest {
        PageRequest::new(page, size).unwrap()
    }

    #[test]
    fn create_then_get_round_trips() {
        let service = get_test_service();

        let created = service.create(named("Electronics")).unwrap();
        let selected = service.get(created.id.unwrap()).unwrap();

        assert!(created.id.unwrap() > 0);
        assert_eq!(selected.name.as_deref(), Some("Electronics"));
    }

    #[test]
    fn create_ignores_client_supplied_id() {
        let service = get_test_service();

        let mut data = named("Electronics");
        data.id = Some(42);
        let created = service.create(data).unwrap();

        assert_ne!(created.id, Some(42));
    }

    #[test]
    fn create_with_blank_name_fails() {
        let service = get_test_service();

        assert_eq!(
            service.create(named("   ")),
            Err(Error::EmptyCategoryName)
        );
        assert_eq!(
            service.create(CategoryDto::default()),
            Err(Error::EmptyCategoryName)
        );
    }

    #[test]
    fn get_with_non_positive_id_fails_before_store_access() {
        let service = get_test_service();

        assert_eq!(service.get(0), Err(Error::InvalidId));
        assert_eq!(service.get(-1), Err(Error::InvalidId));
    }

    #[test]
    fn get_with_unused_id_returns_not_found() {
        let service = get_test_service();

        assert_eq!(service.get(999), Err(Error::NotFound));
    }

    #[test]
    fn list_without_filter_returns_all() {
        let service = get_test_service();
        service.create(named("Electronics")).unwrap();
        service.create(named("Groceries")).unwrap();

        let page = service.list(None, page_request(0, 10)).unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_items, 2);
    }

    #[test]
    fn list_with_blank_filter_behaves_like_no_filter() {
        let service = get_test_service();
        service.create(named("Electronics")).unwrap();

        let page = service.list(Some("  "), page_request(0, 10)).unwrap();

        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn list_with_filter_restricts_results() {
        let service = get_test_service();
        service.create(named("Electronics")).unwrap();
        service.create(named("Groceries")).unwrap();

        let page = service.list(Some("groc"), page_request(0, 10)).unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name.as_deref(), Some("Groceries"));
    }

    #[test]
    fn list_with_no_matches_returns_not_found() {
        let service = get_test_service();
        service.create(named("Electronics")).unwrap();

        let result = service.list(Some("zzz-no-match"), page_request(0, 10));

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn list_out_of_range_page_returns_not_found() {
        let service = get_test_service();
        service.create(named("Electronics")).unwrap();

        let result = service.list(None, page_request(5, 10));

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn update_overwrites_name() {
        let service = get_test_service();
        let created = service.create(named("Electronics")).unwrap();
        let id = created.id.unwrap();

        let updated = service.update(id, named("Gadgets")).unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name.as_deref(), Some("Gadgets"));
        assert_eq!(service.get(id).unwrap().name.as_deref(), Some("Gadgets"));
    }

    #[test]
    fn update_missing_category_returns_not_found() {
        let service = get_test_service();

        assert_eq!(service.update(999, named("Gadgets")), Err(Error::NotFound));
    }

    #[test]
    fn update_with_invalid_id_fails() {
        let service = get_test_service();

        assert_eq!(service.update(0, named("Gadgets")), Err(Error::InvalidId));
    }

    #[test]
    fn delete_removes_category() {
        let service = get_test_service();
        let created = service.create(named("Electronics")).unwrap();
        let id = created.id.unwrap();

        service.delete(id).unwrap();

        assert_eq!(service.get(id), Err(Error::NotFound));
    }

    #[test]
    fn delete_with_invalid_id_fails() {
        let service = get_test_service();

        assert_eq!(service.delete(-5), Err(Error::InvalidId));
    }

    #[test]
    fn delete_missing_category_returns_not_found() {
        let service = get_test_service();

        assert_eq!(service.delete(999), Err(Error::NotFound));
    }
}
