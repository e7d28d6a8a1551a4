//! SQLite backed implementations of the store traits.

mod category;
mod product;

pub use category::SQLiteCategoryStore;
pub use product::SQLiteProductStore;
