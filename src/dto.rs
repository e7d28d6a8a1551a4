//! Defines the transfer objects exposed at the HTTP boundary.
//!
//! These are flat records, distinct from the domain models: a product's DTO
//! carries the owning category's ID rather than a nested category object.
//! All fields are optional on the way in so that the services, not the
//! deserializer, decide which missing fields are an error.

use serde::{Deserialize, Serialize};

use crate::models::{Category, DatabaseID, Product};

/// The boundary representation of a [Category].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryDto {
    /// The ID of the category. Ignored on creation.
    pub id: Option<DatabaseID>,
    /// The name of the category.
    pub name: Option<String>,
}

/// The boundary representation of a [Product].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductDto {
    /// The ID of the product. Ignored on creation.
    pub id: Option<DatabaseID>,
    /// The display name of the product.
    pub name: Option<String>,
    /// The unit price of the product.
    pub price: Option<f64>,
    /// How many units are in stock.
    pub stock: Option<i64>,
    /// The ID of the category the product belongs to.
    pub category_id: Option<DatabaseID>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: Some(category.id),
            name: Some(category.name.to_string()),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: Some(product.name),
            price: Some(product.price),
            stock: Some(product.stock),
            // None when the product's category has been deleted.
            category_id: product.category_id,
        }
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::{
        dto::{CategoryDto, ProductDto},
        models::{Category, CategoryName, Product},
    };

    #[test]
    fn category_projects_id_and_name() {
        let category = Category {
            id: 7,
            name: CategoryName::new_unchecked("Electronics"),
        };

        let dto = CategoryDto::from(category);

        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.name.as_deref(), Some("Electronics"));
    }

    #[test]
    fn product_flattens_category_reference() {
        let product = Product {
            id: 3,
            name: "Keyboard".to_string(),
            price: 49.99,
            stock: 12,
            category_id: Some(7),
        };

        let dto = ProductDto::from(product);

        assert_eq!(dto.category_id, Some(7));
    }

    #[test]
    fn product_with_no_category_projects_null_category_id() {
        let product = Product {
            id: 3,
            name: "Keyboard".to_string(),
            price: 49.99,
            stock: 12,
            category_id: None,
        };

        let dto = ProductDto::from(product);

        assert_eq!(dto.category_id, None);
    }

    #[test]
    fn product_deserializes_camel_case_category_id() {
        let dto: ProductDto =
            serde_json::from_str(r#"{"name": "Keyboard", "categoryId": 7}"#).unwrap();

        assert_eq!(dto.category_id, Some(7));
        assert_eq!(dto.price, None);
    }
}
