//! Contains traits and implementations for objects that store the domain [models](crate::models).

mod category;
mod product;

pub mod sqlite;

pub use category::CategoryStore;
pub use product::ProductStore;
