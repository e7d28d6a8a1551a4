//! Defines the domain models for the product catalogue: categories and the
//! products that belong to them.

use std::fmt::Display;

use crate::Error;

/// Alias for the integer type used for database primary keys.
pub type DatabaseID = i64;

/// The name of a category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return [Error::EmptyCategoryName] if `name` is
    /// empty or contains only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty. This is
    /// intended for values read back from the database, which were validated
    /// when they were first stored.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grouping for products, e.g., 'Electronics', 'Groceries'.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    /// The ID of the category, assigned by the database.
    pub id: DatabaseID,
    /// The name of the category.
    pub name: CategoryName,
}

/// An item in the catalogue.
///
/// `category_id` is optional because deleting a category detaches its
/// products rather than deleting them; a product created through the service
/// layer always starts out attached to a valid category.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// The ID of the product, assigned by the database.
    pub id: DatabaseID,
    /// The display name of the product.
    pub name: String,
    /// The unit price of the product.
    pub price: f64,
    /// How many units are in stock.
    pub stock: i64,
    /// The ID of the category the product belongs to, if any.
    pub category_id: Option<DatabaseID>,
}

/// The data needed to create a new product.
///
/// The ID is omitted since it is assigned by the database on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// The display name of the product.
    pub name: String,
    /// The unit price of the product.
    pub price: f64,
    /// How many units are in stock.
    pub stock: i64,
    /// The ID of the category the product belongs to.
    pub category_id: DatabaseID,
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, models::CategoryName};

    #[test]
    fn new_fails_on_empty_string() {
        let category_name = CategoryName::new("");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_fails_on_whitespace_only_string() {
        let category_name = CategoryName::new("   \t");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        let category_name = CategoryName::new("Electronics");

        assert!(category_name.is_ok())
    }
}
